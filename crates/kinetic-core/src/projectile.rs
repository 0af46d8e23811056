//! Charge-and-launch motion model behind the number launcher.
//!
//! Screen convention: `y` grows downward and the track sits at `y = 0`, so a
//! projectile is airborne while `y <= 0` and has landed once `y > 0`. Charge
//! angles are negative (the icon tips up) and bounded by the calibrated
//! maximum.
//!
//! The constants are not free parameters. [`LaunchCalibration::derive`]
//! solves for launch speed and gravity so that a full charge lands exactly at
//! the end of the track after `flight_seconds` worth of ticks.

use crate::config::LauncherConfig;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchCalibration {
    /// Ticks a full-charge flight takes.
    pub flight_ticks: f64,
    /// Charge added per tick (negative).
    pub angular_rate: f64,
    pub max_charge_angle: f64,
    pub launch_speed: f64,
    /// Launch height of a full charge, the icon tip raised by the max angle.
    pub max_height: f64,
    pub gravity: f64,
    pub track_length: f64,
}

impl LaunchCalibration {
    pub fn derive(config: &LauncherConfig) -> Self {
        let theta = config.max_charge_angle;
        let flight_ticks = config.flight_seconds * config.frame_rate;
        let angular_rate = -theta / (config.charge_seconds * config.frame_rate);
        let launch_speed = config.track_length / theta.cos() / flight_ticks;
        let max_height = config.icon_width * theta.sin();
        let gravity = (max_height + launch_speed * theta.sin() * flight_ticks) * 2.0
            / (flight_ticks * flight_ticks);
        Self {
            flight_ticks,
            angular_rate,
            max_charge_angle: theta,
            launch_speed,
            max_height,
            gravity,
            track_length: config.track_length,
        }
    }

    /// One tick of charging from `angle`, never past the maximum.
    #[inline]
    pub fn charge(&self, angle: f64) -> f64 {
        (angle + self.angular_rate).max(-self.max_charge_angle)
    }
}

impl Default for LaunchCalibration {
    fn default() -> Self {
        Self::derive(&LauncherConfig::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlightStep {
    Airborne(DVec2),
    /// Unclamped `x` at the instant the trajectory crossed the track.
    Landed(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flight {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl Flight {
    pub fn launch(calibration: &LaunchCalibration, charge_angle: f64) -> Self {
        let angle = charge_angle.clamp(-calibration.max_charge_angle, 0.0);
        let v0 = calibration.launch_speed;
        Self {
            x: 0.0,
            y: (angle / calibration.max_charge_angle) * calibration.max_height,
            vx: v0 * angle.cos(),
            vy: v0 * angle.sin(),
        }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Advances one tick under constant gravity `g`.
    ///
    /// Positions are advanced with the exact constant-acceleration update, so
    /// tick samples sit on the calibrated parabola. When this tick crosses the
    /// track the landing `x` is taken at the crossing instant rather than at
    /// the end of the tick.
    pub fn advance(&mut self, g: f64) -> FlightStep {
        let (x0, y0, vy0) = (self.x, self.y, self.vy);
        self.y = y0 + vy0 + 0.5 * g;
        self.vy = vy0 + g;
        self.x = x0 + self.vx;

        if self.y <= 0.0 {
            return FlightStep::Airborne(self.position());
        }
        // y0 + vy0*t + g/2*t^2 = 0, downward crossing is the larger root
        let t = if g > 0.0 {
            let disc = (vy0 * vy0 - 2.0 * g * y0).max(0.0);
            ((-vy0 + disc.sqrt()) / g).clamp(0.0, 1.0)
        } else {
            1.0
        };
        FlightStep::Landed(x0 + self.vx * t)
    }

    /// Flies to the ground and reports the unclamped landing `x` and the
    /// number of ticks taken.
    pub fn run_to_landing(mut self, g: f64) -> (f64, u32) {
        let mut ticks = 0u32;
        loop {
            ticks += 1;
            if let FlightStep::Landed(x) = self.advance(g) {
                return (x, ticks);
            }
        }
    }
}
