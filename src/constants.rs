// DOM contract between the host page and the mounted widgets.

// Elements mounted automatically on start
pub const SLIDER_TAG: &str = "gravity-slider";
pub const LAUNCHER_TAG: &str = "number-launcher";

// Outward notification event names (detail = { value })
pub const SLIDER_EVENT: &str = "input";
pub const LAUNCHER_EVENT: &str = "change";

// Element ids inside each widget's shadow root
pub const SLIDER_CONTAINER_ID: &str = "slider-container";
pub const SLIDER_RANGE_ID: &str = "slider";
pub const SLIDER_READOUT_ID: &str = "display-value";
pub const LAUNCHER_ICON_ID: &str = "icon";
pub const LAUNCHER_INDICATOR_ID: &str = "indicator";
pub const LAUNCHER_READOUT_ID: &str = "value-display";

// Classes
pub const HANDLE_CLASS: &str = "handle"; // presses here start a slider drag
pub const TRANSITION_CLASS: &str = "transition"; // eases the tilt back to neutral
pub const BUMP_CLASS: &str = "bump"; // readout emphasis after a commit

// Moves the indicator sprite so its center sits on the projectile position
pub const INDICATOR_OFFSET: [f64; 2] = [-6.0, -4.0];

// Captions
pub const SLIDER_LABEL: &str = "Cows";
pub const LAUNCHER_LABEL: &str = "Bulls";
