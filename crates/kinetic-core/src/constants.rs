use std::f64::consts::FRAC_PI_4;

// Fixed tuning shared by both widgets. Geometry is in CSS pixels, time in ticks.

// Timing
pub const FRAME_RATE: f64 = 60.0; // ticks per second

// Gravity slider
pub const SLIDER_MAX_VALUE: u32 = 15;
pub const GRAVITY_CONST: f64 = 0.5; // value units per tick^2 at 90 degrees of tilt

// Number launcher
pub const LAUNCHER_MAX_VALUE: u32 = 20;
pub const TRACK_LENGTH: f64 = 200.0; // px, landing distance that maps to the max value
pub const ICON_WIDTH: f64 = 60.0; // px, launch icon pivots about its left edge
pub const MAX_CHARGE_ANGLE: f64 = FRAC_PI_4; // magnitude; charge accumulates toward -MAX
pub const CHARGE_SECONDS: f64 = 1.0; // hold time to reach full charge
pub const FLIGHT_SECONDS: f64 = 1.0; // airtime of a full-charge launch

// Transient emphasis applied to the readout on every commit
pub const EMPHASIS_MS: u32 = 200;
