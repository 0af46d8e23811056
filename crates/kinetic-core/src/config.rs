//! Construction-time configuration for both widgets.
//!
//! The shipped widgets always use the `Default` values from
//! [`crate::constants`]. The structs exist so the derived physics can be
//! computed from named parameters in one place, and so a bad override
//! degrades to the defaults instead of producing a widget that can leave its
//! value range.

use crate::constants::{
    CHARGE_SECONDS, FLIGHT_SECONDS, FRAME_RATE, GRAVITY_CONST, ICON_WIDTH, LAUNCHER_MAX_VALUE,
    MAX_CHARGE_ANGLE, SLIDER_MAX_VALUE, TRACK_LENGTH,
};
use std::f64::consts::FRAC_PI_2;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("max value must be at least 1")]
    MaxValue,
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("max charge angle must lie in (0, pi/2), got {0}")]
    ChargeAngle(f64),
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn tick_period(frame_rate: f64) -> Duration {
    Duration::from_secs_f64(1.0 / frame_rate)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    pub max_value: u32,
    pub frame_rate: f64,
    pub gravity: f64,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            max_value: SLIDER_MAX_VALUE,
            frame_rate: FRAME_RATE,
            gravity: GRAVITY_CONST,
        }
    }
}

impl SliderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_value == 0 {
            return Err(ConfigError::MaxValue);
        }
        positive("frame rate", self.frame_rate)?;
        if !self.gravity.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "gravity",
                value: self.gravity,
            });
        }
        Ok(())
    }

    /// Returns `self` when valid, otherwise logs the problem and falls back to
    /// the defaults.
    pub fn sanitized(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("[slider] invalid config ({e}); using defaults");
                Self::default()
            }
        }
    }

    pub fn tick_period(&self) -> Duration {
        tick_period(self.frame_rate)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LauncherConfig {
    pub max_value: u32,
    pub frame_rate: f64,
    pub track_length: f64,
    pub icon_width: f64,
    pub max_charge_angle: f64,
    pub charge_seconds: f64,
    pub flight_seconds: f64,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            max_value: LAUNCHER_MAX_VALUE,
            frame_rate: FRAME_RATE,
            track_length: TRACK_LENGTH,
            icon_width: ICON_WIDTH,
            max_charge_angle: MAX_CHARGE_ANGLE,
            charge_seconds: CHARGE_SECONDS,
            flight_seconds: FLIGHT_SECONDS,
        }
    }
}

impl LauncherConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_value == 0 {
            return Err(ConfigError::MaxValue);
        }
        positive("frame rate", self.frame_rate)?;
        positive("track length", self.track_length)?;
        positive("icon width", self.icon_width)?;
        positive("charge time", self.charge_seconds)?;
        positive("flight time", self.flight_seconds)?;
        let a = self.max_charge_angle;
        if !(a.is_finite() && a > 0.0 && a < FRAC_PI_2) {
            return Err(ConfigError::ChargeAngle(a));
        }
        Ok(())
    }

    /// Returns `self` when valid, otherwise logs the problem and falls back to
    /// the defaults.
    pub fn sanitized(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("[launcher] invalid config ({e}); using defaults");
                Self::default()
            }
        }
    }

    pub fn tick_period(&self) -> Duration {
        tick_period(self.frame_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(SliderConfig::default().validate(), Ok(()));
        assert_eq!(LauncherConfig::default().validate(), Ok(()));
    }

    #[test]
    fn default_tick_is_sixty_hertz() {
        let period = SliderConfig::default().tick_period();
        assert!((period.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(period, LauncherConfig::default().tick_period());
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let cfg = LauncherConfig {
            track_length: 0.0,
            ..LauncherConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                name: "track length",
                ..
            })
        ));

        let cfg = LauncherConfig {
            max_charge_angle: FRAC_PI_2,
            ..LauncherConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ChargeAngle(FRAC_PI_2)));

        let cfg = SliderConfig {
            frame_rate: f64::NAN,
            ..SliderConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn sanitized_falls_back_to_defaults() {
        let cfg = SliderConfig {
            max_value: 0,
            ..SliderConfig::default()
        };
        assert_eq!(cfg.sanitized(), SliderConfig::default());

        let custom = LauncherConfig {
            track_length: 300.0,
            ..LauncherConfig::default()
        };
        assert_eq!(custom.clone().sanitized(), custom);
    }
}
