//! Tilt-fed value integrator behind the gravity slider.
//!
//! The tilt angle is an input: it is set from the gesture and is never
//! integrated. Each tick turns the tilt into an acceleration along the
//! slider, which moves a continuous value between 0 and `max`.

/// Which end of the range a step ran into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Floor,
    Ceiling,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pendulum {
    angle: f64,
    velocity: f64,
    value: f64,
    max: f64,
    gravity: f64,
}

impl Pendulum {
    /// Starts at rest in the middle of `[0, max_value]`.
    pub fn new(max_value: u32, gravity: f64) -> Self {
        let max = f64::from(max_value);
        Self {
            angle: 0.0,
            velocity: 0.0,
            value: max / 2.0,
            max,
            gravity,
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn set_tilt(&mut self, angle: f64) {
        if angle.is_finite() {
            self.angle = angle;
        }
    }

    /// Advances one tick. Hitting either end pins the value there and kills
    /// the velocity.
    pub fn step(&mut self) -> Option<Boundary> {
        let acceleration = self.angle.sin() * self.gravity;
        self.velocity += acceleration;
        let candidate = self.value + self.velocity;

        let (next, hit) = if candidate > self.max {
            (self.max, Some(Boundary::Ceiling))
        } else if candidate < 0.0 {
            (0.0, Some(Boundary::Floor))
        } else {
            (candidate, None)
        };
        if hit.is_some() {
            self.velocity = 0.0;
        }
        self.value = next;
        hit
    }

    /// Drops the tilt and any motion; the value stays where it is.
    pub fn release(&mut self) {
        self.velocity = 0.0;
        self.angle = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn starts_centered_at_rest() {
        let p = Pendulum::new(15, 0.5);
        assert_eq!(p.value(), 7.5);
        assert_eq!(p.velocity(), 0.0);
        assert_eq!(p.angle(), 0.0);
    }

    #[test]
    fn level_pendulum_does_not_move() {
        let mut p = Pendulum::new(15, 0.5);
        for _ in 0..120 {
            assert_eq!(p.step(), None);
        }
        assert_eq!(p.value(), 7.5);
        assert_eq!(p.velocity(), 0.0);
    }

    #[test]
    fn tilt_accelerates_toward_lower_end() {
        let mut p = Pendulum::new(15, 0.5);
        p.set_tilt(FRAC_PI_2);
        p.step();
        assert_eq!(p.velocity(), 0.5);
        assert_eq!(p.value(), 8.0);
        p.step();
        assert_eq!(p.velocity(), 1.0);
        assert_eq!(p.value(), 9.0);

        p.set_tilt(-FRAC_PI_2);
        p.step();
        assert_eq!(p.velocity(), 0.5);
    }

    #[test]
    fn floor_clamps_and_stops() {
        let mut p = Pendulum::new(15, 0.5);
        p.set_tilt(-FRAC_PI_2);
        let mut hits = 0;
        for _ in 0..60 {
            if p.step() == Some(Boundary::Floor) {
                hits += 1;
                assert_eq!(p.value(), 0.0);
                assert_eq!(p.velocity(), 0.0);
            }
        }
        assert!(hits > 0);
    }

    #[test]
    fn non_finite_tilt_is_ignored() {
        let mut p = Pendulum::new(15, 0.5);
        p.set_tilt(0.3);
        p.set_tilt(f64::NAN);
        assert_eq!(p.angle(), 0.3);
    }

    #[test]
    fn release_keeps_value() {
        let mut p = Pendulum::new(15, 0.5);
        p.set_tilt(0.4);
        for _ in 0..5 {
            p.step();
        }
        let v = p.value();
        p.release();
        assert_eq!(p.value(), v);
        assert_eq!(p.velocity(), 0.0);
        assert_eq!(p.angle(), 0.0);
    }
}
