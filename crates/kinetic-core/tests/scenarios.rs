// End-to-end runs of both widgets against a manually pumped scheduler.

use glam::DVec2;
use kinetic_core::mapper::landing_value;
use kinetic_core::pendulum::Pendulum;
use kinetic_core::projectile::{Flight, LaunchCalibration};
use kinetic_core::{
    Bounds, GravitySlider, ManualScheduler, NullSurface, NumberLauncher, Phase, Press,
    ValueChange, Widget, GRAVITY_CONST, LAUNCHER_MAX_VALUE, SLIDER_MAX_VALUE, TRACK_LENGTH,
};
use std::cell::RefCell;
use std::f64::consts::FRAC_PI_4;
use std::rc::Rc;

const CENTER: DVec2 = DVec2::new(100.0, 100.0);

fn observe(widget: &mut dyn Widget) -> Rc<RefCell<Vec<u32>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    widget.subscribe(Box::new(move |c: ValueChange| sink.borrow_mut().push(c.value)));
    seen
}

fn mounted_slider(sched: &ManualScheduler) -> GravitySlider {
    let mut s = GravitySlider::with_defaults(Rc::new(sched.clone()), Box::new(NullSurface));
    s.set_bounds(Bounds::from_ltrb(0.0, 50.0, 200.0, 150.0));
    s.mount();
    s
}

fn mounted_launcher(sched: &ManualScheduler) -> NumberLauncher {
    let mut l = NumberLauncher::with_defaults(Rc::new(sched.clone()), Box::new(NullSurface));
    l.mount();
    l
}

fn settle(widget: &mut dyn Widget, sched: &ManualScheduler) -> u32 {
    let mut ticks = 0;
    while sched.live() > 0 {
        widget.tick();
        ticks += 1;
        assert!(ticks < 10_000, "widget never settled");
    }
    ticks
}

#[test]
fn launcher_full_charge_lands_at_track_end() {
    let sched = ManualScheduler::new();
    let mut l = mounted_launcher(&sched);
    let seen = observe(&mut l);

    l.session_start(Press::on_body(DVec2::new(5.0, 5.0)));
    for _ in 0..90 {
        l.tick();
    }
    l.session_end();
    assert_eq!(l.phase(), Phase::Settling);
    let ticks = settle(&mut l, &sched);
    assert!(ticks <= 61, "full charge took {ticks} ticks");

    assert_eq!(l.value(), LAUNCHER_MAX_VALUE);
    assert_eq!(*seen.borrow(), vec![20]);
    assert_eq!(l.phase(), Phase::Idle);

    let cal = LaunchCalibration::default();
    let (x, _) = Flight::launch(&cal, -FRAC_PI_4).run_to_landing(cal.gravity);
    let clamped = x.clamp(0.0, TRACK_LENGTH);
    assert!((clamped - TRACK_LENGTH).abs() < 1e-9);
    assert_eq!(landing_value(clamped, TRACK_LENGTH, 20), 20);
}

#[test]
fn launcher_zero_charge_lands_at_origin() {
    let cal = LaunchCalibration::default();
    let flight = Flight::launch(&cal, 0.0);
    assert_eq!(flight.vy, 0.0);
    let (x, _) = flight.run_to_landing(cal.gravity);
    assert_eq!(x, 0.0);

    let sched = ManualScheduler::new();
    let mut l = mounted_launcher(&sched);
    let seen = observe(&mut l);
    l.session_start(Press::on_body(DVec2::ZERO));
    l.session_end();
    settle(&mut l, &sched);
    assert_eq!(l.value(), 0);
    // 0 was already committed, so nothing to announce
    assert!(seen.borrow().is_empty());
}

#[test]
fn launcher_commits_again_only_on_a_different_landing() {
    let sched = ManualScheduler::new();
    let mut l = mounted_launcher(&sched);
    let seen = observe(&mut l);

    for _ in 0..2 {
        l.session_start(Press::on_body(DVec2::ZERO));
        for _ in 0..120 {
            l.tick();
        }
        l.session_end();
        settle(&mut l, &sched);
    }
    l.session_start(Press::on_body(DVec2::ZERO));
    l.session_end();
    settle(&mut l, &sched);

    assert_eq!(*seen.borrow(), vec![20, 0]);
}

#[test]
fn slider_neutral_release_keeps_value() {
    let sched = ManualScheduler::new();
    let mut s = mounted_slider(&sched);
    let seen = observe(&mut s);

    let grab = CENTER + DVec2::new(80.0, 0.0);
    s.session_start(Press::on_handle(grab));
    // sliding along the grab ray is zero tilt
    s.session_move(CENTER + DVec2::new(60.0, 0.0));
    for _ in 0..100 {
        s.tick();
    }
    s.session_end();

    assert_eq!(s.value(), 8);
    assert!(seen.borrow().is_empty());
    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(sched.live(), 0);

    let mut p = Pendulum::new(SLIDER_MAX_VALUE, GRAVITY_CONST);
    for _ in 0..100 {
        p.step();
    }
    p.release();
    assert_eq!(p.value(), f64::from(SLIDER_MAX_VALUE) / 2.0);
    assert_eq!(p.velocity(), 0.0);
}

#[test]
fn slider_boundary_pins_value_and_velocity() {
    let max = f64::from(SLIDER_MAX_VALUE);
    let mut p = Pendulum::new(SLIDER_MAX_VALUE, GRAVITY_CONST);
    p.set_tilt(0.3);

    let mut clamp_tick = None;
    for tick in 0..200 {
        let hit = p.step();
        if let Some(first) = clamp_tick {
            assert!(tick > first);
            assert_eq!(p.value(), max);
            assert_eq!(p.velocity(), 0.0);
        } else if hit.is_some() {
            clamp_tick = Some(tick);
            assert_eq!(p.value(), max);
            assert_eq!(p.velocity(), 0.0);
        } else {
            assert!(p.value() < max);
        }
    }
    assert!(clamp_tick.is_some());

    p.set_tilt(-0.3);
    p.step();
    assert!(p.velocity() < 0.0);
    assert!(p.value() < max);
}

#[test]
fn slider_tilted_down_commits_each_step_once() {
    let sched = ManualScheduler::new();
    let mut s = mounted_slider(&sched);
    let seen = observe(&mut s);

    s.session_start(Press::on_handle(CENTER + DVec2::new(80.0, 0.0)));
    // right end pulled straight down
    s.session_move(CENTER + DVec2::new(0.0, 80.0));
    for _ in 0..200 {
        s.tick();
    }
    s.session_end();

    let seen = seen.borrow();
    assert_eq!(seen.last().copied(), Some(SLIDER_MAX_VALUE));
    assert!(seen.windows(2).all(|w| w[0] < w[1]), "{seen:?}");
    assert_eq!(s.value(), SLIDER_MAX_VALUE);
}

#[test]
fn widgets_do_not_cross_talk() {
    let sched_a = ManualScheduler::new();
    let sched_b = ManualScheduler::new();
    let mut a = mounted_slider(&sched_a);
    let mut b = mounted_slider(&sched_b);

    a.session_start(Press::on_handle(CENTER + DVec2::new(80.0, 0.0)));
    // window-wide move and release reach both; only the active one reacts
    let both: [&mut dyn Widget; 2] = [&mut a, &mut b];
    for w in both {
        w.session_move(CENTER + DVec2::new(0.0, 80.0));
    }
    for _ in 0..30 {
        a.tick();
        b.tick();
    }
    assert!(a.value() > 8);
    assert_eq!(b.value(), 8);
    assert_eq!(b.phase(), Phase::Idle);
    assert_eq!(sched_b.started(), 0);
}

#[test]
fn unmount_silences_a_live_widget() {
    let sched = ManualScheduler::new();
    let mut l = mounted_launcher(&sched);
    let seen = observe(&mut l);
    l.session_start(Press::on_body(DVec2::ZERO));
    for _ in 0..40 {
        l.tick();
    }
    l.session_end();
    l.unmount();
    assert_eq!(sched.live(), 0);
    for _ in 0..100 {
        l.tick();
    }
    assert!(seen.borrow().is_empty());
    assert!(!l.is_mounted());
}
