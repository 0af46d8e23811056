use crate::commit::{Committer, Observer, SubscriptionId};
use crate::config::SliderConfig;
use crate::gesture::{Bounds, GestureCapture, Press, PressTarget};
use crate::mapper;
use crate::pendulum::Pendulum;
use crate::surface::{Paint, Surface};
use crate::ticker::{Scheduler, TickGuard};
use crate::widget::{Phase, Widget};
use glam::DVec2;
use std::rc::Rc;

/// Pendulum-driven slider: grab a handle, tilt the bar, and the value rolls
/// toward the lower end.
pub struct GravitySlider {
    config: SliderConfig,
    pendulum: Pendulum,
    gesture: GestureCapture,
    bounds: Bounds,
    commit: Committer,
    surface: Box<dyn Surface>,
    scheduler: Rc<dyn Scheduler>,
    timer: Option<TickGuard>,
    mounted: bool,
}

impl GravitySlider {
    pub fn new(
        config: SliderConfig,
        scheduler: Rc<dyn Scheduler>,
        surface: Box<dyn Surface>,
    ) -> Self {
        let config = config.sanitized();
        let pendulum = Pendulum::new(config.max_value, config.gravity);
        let initial = mapper::pendulum_value(pendulum.value(), config.max_value);
        Self {
            config,
            pendulum,
            gesture: GestureCapture::default(),
            bounds: Bounds::default(),
            commit: Committer::new(initial),
            surface,
            scheduler,
            timer: None,
            mounted: false,
        }
    }

    pub fn with_defaults(scheduler: Rc<dyn Scheduler>, surface: Box<dyn Surface>) -> Self {
        Self::new(SliderConfig::default(), scheduler, surface)
    }

    fn restart_timer(&mut self) {
        drop(self.timer.take());
        self.timer = Some(self.scheduler.every(self.config.tick_period()));
    }

    fn stop_drag(&mut self) {
        if self.gesture.end().is_none() {
            return;
        }
        drop(self.timer.take());
        self.pendulum.release();
        self.surface.paint(Paint::Tilt {
            radians: 0.0,
            animated: true,
        });
        log::debug!(
            "[slider] released at value {:.2} ({})",
            self.pendulum.value(),
            self.commit.last()
        );
    }
}

impl Widget for GravitySlider {
    fn mount(&mut self) {
        self.mounted = true;
        self.render();
    }

    fn unmount(&mut self) {
        self.stop_drag();
        drop(self.timer.take());
        self.mounted = false;
    }

    fn render(&mut self) {
        self.surface.paint(Paint::Tilt {
            radians: self.pendulum.angle(),
            animated: false,
        });
        self.surface.paint(Paint::Track {
            value: self.pendulum.value(),
        });
        self.surface.paint(Paint::Readout {
            value: self.commit.last(),
        });
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    fn session_start(&mut self, press: Press) {
        if !self.mounted || press.target != PressTarget::Handle {
            return;
        }
        let center = self.bounds.center();
        let session = self.gesture.begin(press.point, Some(center));
        self.restart_timer();
        log::debug!(
            "[slider] drag from ({:.1},{:.1}) grab angle {:.3}",
            press.point.x,
            press.point.y,
            session.grab_angle
        );
    }

    fn session_move(&mut self, point: DVec2) {
        // a pointer sitting on the center keeps the previous tilt
        if let Some(tilt) = self.gesture.session().and_then(|s| s.tilt(point)) {
            self.pendulum.set_tilt(tilt);
        }
    }

    fn session_end(&mut self) {
        self.stop_drag();
    }

    fn cancel(&mut self) {
        self.stop_drag();
    }

    fn tick(&mut self) {
        if !self.mounted || !self.gesture.is_active() {
            return;
        }
        self.pendulum.step();
        self.surface.paint(Paint::Tilt {
            radians: self.pendulum.angle(),
            animated: false,
        });
        self.surface.paint(Paint::Track {
            value: self.pendulum.value(),
        });
        let value = mapper::pendulum_value(self.pendulum.value(), self.config.max_value);
        if let Some(change) = self.commit.commit(value, self.surface.as_mut()) {
            log::debug!("[slider] commit {}", change.value);
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
            Phase::Dragging
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PaintLog;
    use crate::ticker::ManualScheduler;
    use std::cell::RefCell;

    const CENTER: DVec2 = DVec2::new(100.0, 100.0);

    fn slider() -> (GravitySlider, ManualScheduler, Rc<RefCell<PaintLog>>) {
        let sched = ManualScheduler::new();
        let log = Rc::new(RefCell::new(PaintLog::default()));
        let mut s = GravitySlider::with_defaults(Rc::new(sched.clone()), Box::new(Rc::clone(&log)));
        s.set_bounds(Bounds::from_ltrb(0.0, 50.0, 200.0, 150.0));
        s.mount();
        (s, sched, log)
    }

    fn grab_right_end(s: &mut GravitySlider) {
        s.session_start(Press::on_handle(DVec2::new(180.0, 100.0)));
    }

    #[test]
    fn press_off_handle_is_ignored() {
        let (mut s, sched, _) = slider();
        s.session_start(Press::on_body(DVec2::new(180.0, 100.0)));
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(sched.started(), 0);
    }

    #[test]
    fn press_before_mount_is_ignored() {
        let sched = ManualScheduler::new();
        let mut s = GravitySlider::with_defaults(Rc::new(sched.clone()), Box::new(PaintLog::default()));
        grab_right_end(&mut s);
        assert_eq!(s.phase(), Phase::Idle);
        assert_eq!(sched.started(), 0);
    }

    #[test]
    fn move_without_session_is_noop() {
        let (mut s, _, _) = slider();
        s.session_move(DVec2::new(100.0, 180.0));
        assert_eq!(s.pendulum.angle(), 0.0);
    }

    #[test]
    fn pointer_on_center_keeps_previous_tilt() {
        let (mut s, _, _) = slider();
        grab_right_end(&mut s);
        s.session_move(DVec2::new(180.0, 120.0));
        let tilt = s.pendulum.angle();
        assert!(tilt > 0.0);
        s.session_move(CENTER);
        assert_eq!(s.pendulum.angle(), tilt);
    }

    #[test]
    fn regrab_replaces_the_timer() {
        let (mut s, sched, _) = slider();
        grab_right_end(&mut s);
        grab_right_end(&mut s);
        grab_right_end(&mut s);
        assert_eq!(sched.started(), 3);
        assert_eq!(sched.live(), 1);
        s.session_end();
        assert_eq!(sched.live(), 0);
    }

    #[test]
    fn release_animates_back_to_neutral() {
        let (mut s, _, log) = slider();
        grab_right_end(&mut s);
        s.session_move(DVec2::new(180.0, 130.0));
        for _ in 0..5 {
            s.tick();
        }
        let held = s.pendulum.value();
        s.session_end();
        assert_eq!(log.borrow().last_tilt(), Some((0.0, true)));
        assert_eq!(s.pendulum.value(), held);
        assert_eq!(s.pendulum.velocity(), 0.0);
        assert_eq!(s.pendulum.angle(), 0.0);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn ticks_after_release_do_nothing() {
        let (mut s, _, _) = slider();
        grab_right_end(&mut s);
        s.session_move(DVec2::new(180.0, 130.0));
        s.tick();
        s.session_end();
        let before = s.pendulum;
        s.tick();
        assert_eq!(s.pendulum, before);
    }

    #[test]
    fn unmount_cancels_everything() {
        let (mut s, sched, _) = slider();
        let seen = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&seen);
        s.subscribe(Box::new(move |_| *sink.borrow_mut() += 1));
        grab_right_end(&mut s);
        s.session_move(DVec2::new(180.0, 150.0));
        s.unmount();
        assert_eq!(sched.live(), 0);
        assert!(!s.is_mounted());
        s.tick();
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn mount_paints_initial_readout() {
        let (s, _, log) = slider();
        assert_eq!(s.value(), 8);
        assert_eq!(log.borrow().readouts().collect::<Vec<_>>(), vec![8]);
    }
}
