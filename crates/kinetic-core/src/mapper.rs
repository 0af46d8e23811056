//! Continuous simulation state to committed integer value.
//!
//! Every path ends in [`to_value`], which rounds half away from zero and pins
//! the result into `[0, max]`.

#[inline]
pub fn to_value(raw: f64, max: u32) -> u32 {
    let rounded = raw.round();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else if rounded >= f64::from(max) {
        max
    } else {
        rounded as u32
    }
}

/// The pendulum keeps its value in range itself; this only rounds it.
#[inline]
pub fn pendulum_value(value: f64, max: u32) -> u32 {
    to_value(value, max)
}

#[inline]
pub fn clamp_to_track(x: f64, track_length: f64) -> f64 {
    x.clamp(0.0, track_length)
}

/// Landing distance as a proportion of the track, scaled to `[0, max]`.
#[inline]
pub fn landing_value(x: f64, track_length: f64, max: u32) -> u32 {
    let clamped = clamp_to_track(x, track_length);
    to_value(clamped / track_length * f64::from(max), max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_for_non_negative_input() {
        assert_eq!(to_value(7.5, 15), 8);
        assert_eq!(to_value(7.49, 15), 7);
        assert_eq!(to_value(0.5, 15), 1);
        assert_eq!(to_value(0.49, 15), 0);
    }

    #[test]
    fn never_leaves_range() {
        assert_eq!(to_value(-3.0, 15), 0);
        assert_eq!(to_value(99.0, 15), 15);
        assert_eq!(to_value(f64::NAN, 15), 0);
        assert_eq!(to_value(f64::INFINITY, 15), 15);
    }

    #[test]
    fn landing_maps_proportionally() {
        assert_eq!(landing_value(0.0, 200.0, 20), 0);
        assert_eq!(landing_value(100.0, 200.0, 20), 10);
        assert_eq!(landing_value(200.0, 200.0, 20), 20);
        assert_eq!(landing_value(205.0, 200.0, 20), 20);
        assert_eq!(landing_value(-4.0, 200.0, 20), 0);
        // 4.71 px is under half a step of 10 px
        assert_eq!(landing_value(4.71, 200.0, 20), 0);
        assert_eq!(landing_value(6.0, 200.0, 20), 1);
    }

    #[test]
    fn landing_value_is_monotonic_in_x() {
        let mut prev = 0;
        for i in 0..=4000 {
            let x = -10.0 + f64::from(i) * 0.055;
            let v = landing_value(x, 200.0, 20);
            assert!(v >= prev, "value dropped at x={x}");
            prev = v;
        }
    }
}
