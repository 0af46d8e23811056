use crate::commit::{Committer, Observer, SubscriptionId};
use crate::config::LauncherConfig;
use crate::gesture::{GestureCapture, Press};
use crate::mapper;
use crate::projectile::{Flight, FlightStep, LaunchCalibration};
use crate::surface::{Paint, Surface};
use crate::ticker::{Scheduler, TickGuard};
use crate::widget::{Phase, Widget};
use glam::DVec2;
use std::rc::Rc;

/// Charge-and-launch picker: hold to wind up the launch angle, release to
/// fire, and the landing point along the track becomes the value.
pub struct NumberLauncher {
    config: LauncherConfig,
    calibration: LaunchCalibration,
    charge_angle: f64,
    flight: Option<Flight>,
    gesture: GestureCapture,
    commit: Committer,
    surface: Box<dyn Surface>,
    scheduler: Rc<dyn Scheduler>,
    timer: Option<TickGuard>,
    indicator_shown: bool,
    mounted: bool,
}

impl NumberLauncher {
    pub fn new(
        config: LauncherConfig,
        scheduler: Rc<dyn Scheduler>,
        surface: Box<dyn Surface>,
    ) -> Self {
        let config = config.sanitized();
        let calibration = LaunchCalibration::derive(&config);
        Self {
            config,
            calibration,
            charge_angle: 0.0,
            flight: None,
            gesture: GestureCapture::default(),
            commit: Committer::new(0),
            surface,
            scheduler,
            timer: None,
            indicator_shown: false,
            mounted: false,
        }
    }

    pub fn with_defaults(scheduler: Rc<dyn Scheduler>, surface: Box<dyn Surface>) -> Self {
        Self::new(LauncherConfig::default(), scheduler, surface)
    }

    pub fn calibration(&self) -> &LaunchCalibration {
        &self.calibration
    }

    fn restart_timer(&mut self) {
        drop(self.timer.take());
        self.timer = Some(self.scheduler.every(self.config.tick_period()));
    }

    fn reset_charge(&mut self) {
        self.charge_angle = 0.0;
        self.surface.paint(Paint::Tilt {
            radians: 0.0,
            animated: true,
        });
    }

    fn launch(&mut self) {
        let flight = Flight::launch(&self.calibration, self.charge_angle);
        log::debug!(
            "[launcher] launch at {:.3} rad: y0={:.2} v=({:.3},{:.3})",
            self.charge_angle,
            flight.y,
            flight.vx,
            flight.vy
        );
        self.flight = Some(flight);
        self.reset_charge();
        if !self.indicator_shown {
            self.indicator_shown = true;
            self.surface.paint(Paint::Indicator { visible: true });
        }
        self.surface.paint(Paint::Projectile {
            position: flight.position(),
        });
        self.restart_timer();
    }

    fn land(&mut self, x: f64) {
        drop(self.timer.take());
        self.flight = None;
        let track = self.calibration.track_length;
        let landed = mapper::clamp_to_track(x, track);
        self.surface.paint(Paint::Projectile {
            position: DVec2::new(landed, 0.0),
        });
        let value = mapper::landing_value(landed, track, self.config.max_value);
        log::debug!("[launcher] landed at x={landed:.2} -> {value}");
        if let Some(change) = self.commit.commit(value, self.surface.as_mut()) {
            log::debug!("[launcher] commit {}", change.value);
        }
    }
}

impl Widget for NumberLauncher {
    fn mount(&mut self) {
        self.mounted = true;
        self.render();
    }

    fn unmount(&mut self) {
        drop(self.timer.take());
        if self.gesture.end().is_some() {
            self.reset_charge();
        }
        self.flight = None;
        self.mounted = false;
    }

    fn render(&mut self) {
        self.surface.paint(Paint::Tilt {
            radians: self.charge_angle,
            animated: false,
        });
        self.surface.paint(Paint::Indicator {
            visible: self.indicator_shown,
        });
        if let Some(flight) = self.flight {
            self.surface.paint(Paint::Projectile {
                position: flight.position(),
            });
        }
        self.surface.paint(Paint::Readout {
            value: self.commit.last(),
        });
    }

    fn session_start(&mut self, press: Press) {
        if !self.mounted {
            return;
        }
        // one timer per widget: a new charge abandons a flight still in the air
        if self.flight.take().is_some() {
            log::debug!("[launcher] flight aborted by new charge");
        }
        self.gesture.begin(press.point, None);
        self.charge_angle = 0.0;
        self.surface.paint(Paint::Tilt {
            radians: 0.0,
            animated: false,
        });
        self.restart_timer();
    }

    fn session_move(&mut self, _point: DVec2) {}

    fn session_end(&mut self) {
        if self.gesture.end().is_none() {
            return;
        }
        drop(self.timer.take());
        self.launch();
    }

    fn cancel(&mut self) {
        if self.gesture.end().is_none() {
            return;
        }
        drop(self.timer.take());
        self.reset_charge();
        log::debug!("[launcher] charge cancelled");
    }

    fn tick(&mut self) {
        if !self.mounted {
            return;
        }
        if self.gesture.is_active() {
            self.charge_angle = self.calibration.charge(self.charge_angle);
            self.surface.paint(Paint::Tilt {
                radians: self.charge_angle,
                animated: false,
            });
            return;
        }
        let Some(flight) = self.flight.as_mut() else {
            return;
        };
        match flight.advance(self.calibration.gravity) {
            FlightStep::Airborne(position) => self.surface.paint(Paint::Projectile { position }),
            FlightStep::Landed(x) => self.land(x),
        }
    }

    fn value(&self) -> u32 {
        self.commit.last()
    }

    fn max_value(&self) -> u32 {
        self.config.max_value
    }

    fn phase(&self) -> Phase {
        if self.gesture.is_active() {
            Phase::Charging
        } else if self.flight.is_some() {
            Phase::Settling
        } else {
            Phase::Idle
        }
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        self.commit.subscribe(observer)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.commit.unsubscribe(id)
    }
}
