// CSS values for render sync. Pure string formatting, no DOM access.

use crate::constants::INDICATOR_OFFSET;

#[inline]
pub fn rotate(radians: f64) -> String {
    format!("rotate({:.3}deg)", radians.to_degrees())
}

#[inline]
pub fn translate(x: f64, y: f64) -> String {
    format!("translateX({:.2}px) translateY({:.2}px)", x, y)
}

/// Transform that centers the indicator sprite on a projectile at `(x, y)`
/// relative to the start of the track.
#[inline]
pub fn indicator_transform(x: f64, y: f64) -> String {
    translate(x + INDICATOR_OFFSET[0], y + INDICATOR_OFFSET[1])
}

#[inline]
pub fn visibility(visible: bool) -> &'static str {
    if visible {
        "visible"
    } else {
        "hidden"
    }
}

/// Attribute text for the raw slider position; non-finite input shows 0.
#[inline]
pub fn range_value(value: f64) -> String {
    if value.is_finite() {
        format!("{:.3}", value)
    } else {
        "0".to_string()
    }
}
