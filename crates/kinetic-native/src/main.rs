//! Replays scripted gestures against both inputs with no browser attached.
//!
//! Ticks are paced in real time at the configured frame rate unless `--fast`
//! is passed. `--rate <hz>` overrides the frame rate for both widgets.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use glam::DVec2;
use kinetic_core::{
    GravitySlider, LauncherConfig, ManualScheduler, NumberLauncher, Paint, Press, SliderConfig,
    Surface, ValueChange, Widget,
};

/// One scripted input.
#[derive(Clone, Copy, Debug)]
enum Step {
    Press(Press),
    Move(DVec2),
    /// Pump this many ticks (only while a timer is live).
    Hold(u32),
    Release,
    /// Pump ticks until the widget's timer stops.
    Settle,
}

struct Options {
    fast: bool,
    rate: Option<f64>,
}

fn parse_args() -> anyhow::Result<Options> {
    let mut opts = Options {
        fast: false,
        rate: None,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--fast" => opts.fast = true,
            "--rate" => {
                let v = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--rate needs a value"))?;
                opts.rate = Some(v.parse()?);
            }
            other => anyhow::bail!("unknown argument {other:?}"),
        }
    }
    Ok(opts)
}

/// Sleeps out the rest of each tick period.
struct Pacer {
    period: Duration,
    next: Instant,
    enabled: bool,
}

impl Pacer {
    fn new(period: Duration, enabled: bool) -> Self {
        Self {
            period,
            next: Instant::now(),
            enabled,
        }
    }

    fn wait(&mut self) {
        if !self.enabled {
            return;
        }
        self.next += self.period;
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        } else {
            // fell behind; don't try to catch up with a burst
            self.next = now;
        }
    }
}

/// Logs readouts, with the landing point when there is one.
#[derive(Default)]
struct ConsoleSurface {
    label: &'static str,
    last_projectile: Option<DVec2>,
}

impl Surface for ConsoleSurface {
    fn paint(&mut self, paint: Paint) {
        match paint {
            Paint::Readout { value } => match self.last_projectile {
                Some(p) => log::info!("[{}] readout {} (landed at x={:.1})", self.label, value, p.x),
                None => log::info!("[{}] readout {}", self.label, value),
            },
            Paint::Projectile { position } => self.last_projectile = Some(position),
            Paint::Tilt { radians, animated: true } => {
                log::debug!("[{}] tilt eases to {:.1} deg", self.label, radians.to_degrees())
            }
            Paint::Indicator { visible } => {
                log::debug!("[{}] indicator visible={}", self.label, visible)
            }
            _ => {}
        }
    }
}

fn run(widget: &mut dyn Widget, sched: &ManualScheduler, script: &[Step], pacer: &mut Pacer) -> u32 {
    let mut ticks = 0u32;
    for step in script {
        match *step {
            Step::Press(press) => widget.session_start(press),
            Step::Move(point) => widget.session_move(point),
            Step::Hold(n) => {
                for _ in 0..n {
                    if sched.live() == 0 {
                        break;
                    }
                    pacer.wait();
                    widget.tick();
                    ticks += 1;
                }
            }
            Step::Release => widget.session_end(),
            Step::Settle => {
                while sched.live() > 0 {
                    pacer.wait();
                    widget.tick();
                    ticks += 1;
                }
            }
        }
    }
    ticks
}

fn slider_script(center: DVec2) -> Vec<Step> {
    let grab = center + DVec2::new(80.0, 0.0);
    let tilt = |deg: f64| center + DVec2::from_angle(deg.to_radians()) * 80.0;
    vec![
        Step::Press(Press::on_handle(grab)),
        Step::Move(tilt(20.0)),
        Step::Hold(90),
        Step::Release,
        Step::Press(Press::on_handle(grab)),
        Step::Move(tilt(-30.0)),
        Step::Hold(120),
        Step::Release,
        Step::Press(Press::on_handle(grab)),
        Step::Move(tilt(5.0)),
        Step::Hold(15),
        Step::Release,
    ]
}

fn launcher_script(hold_ticks: u32) -> Vec<Step> {
    vec![
        Step::Press(Press::on_body(DVec2::ZERO)),
        Step::Hold(hold_ticks),
        Step::Release,
        Step::Settle,
    ]
}

fn observe(widget: &mut dyn Widget, label: &'static str) -> Rc<RefCell<Vec<u32>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    widget.subscribe(Box::new(move |c: ValueChange| {
        log::info!("[{label}] commit {}", c.value);
        sink.borrow_mut().push(c.value);
    }));
    seen
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let opts = parse_args()?;

    let mut slider_cfg = SliderConfig::default();
    let mut launcher_cfg = LauncherConfig::default();
    if let Some(rate) = opts.rate {
        slider_cfg.frame_rate = rate;
        launcher_cfg.frame_rate = rate;
    }
    slider_cfg.validate()?;
    launcher_cfg.validate()?;

    // Slider
    let sched = ManualScheduler::new();
    let surface = ConsoleSurface {
        label: "slider",
        ..Default::default()
    };
    let mut slider = GravitySlider::new(slider_cfg.clone(), Rc::new(sched.clone()), Box::new(surface));
    let center = DVec2::new(100.0, 100.0);
    slider.set_bounds(kinetic_core::Bounds::from_ltrb(0.0, 80.0, 200.0, 120.0));
    let slider_seen = observe(&mut slider, "slider");
    slider.mount();
    let mut pacer = Pacer::new(slider_cfg.tick_period(), !opts.fast);
    let t0 = Instant::now();
    let ticks = run(&mut slider, &sched, &slider_script(center), &mut pacer);
    log::info!(
        "[slider] {} ticks in {:.2?}, final value {}, {} commits",
        ticks,
        t0.elapsed(),
        slider.value(),
        slider_seen.borrow().len()
    );
    slider.unmount();

    // Launcher: a sweep of charge durations
    let sched = ManualScheduler::new();
    let surface = ConsoleSurface {
        label: "launcher",
        ..Default::default()
    };
    let mut launcher =
        NumberLauncher::new(launcher_cfg.clone(), Rc::new(sched.clone()), Box::new(surface));
    let launcher_seen = observe(&mut launcher, "launcher");
    launcher.mount();
    let mut pacer = Pacer::new(launcher_cfg.tick_period(), !opts.fast);
    for hold in [0u32, 10, 20, 30, 45, 60, 90] {
        let ticks = run(&mut launcher, &sched, &launcher_script(hold), &mut pacer);
        log::info!(
            "[launcher] charged {:>2} ticks -> value {:>2} ({} ticks total)",
            hold,
            launcher.value(),
            ticks
        );
    }
    log::info!(
        "[launcher] {} commits: {:?}",
        launcher_seen.borrow().len(),
        launcher_seen.borrow()
    );
    launcher.unmount();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_charge_script_reaches_max() {
        let sched = ManualScheduler::new();
        let mut l = NumberLauncher::with_defaults(
            Rc::new(sched.clone()),
            Box::new(ConsoleSurface::default()),
        );
        l.mount();
        let mut pacer = Pacer::new(Duration::from_millis(16), false);
        run(&mut l, &sched, &launcher_script(90), &mut pacer);
        assert_eq!(l.value(), l.max_value());
        assert_eq!(sched.live(), 0);
    }

    #[test]
    fn hold_without_session_pumps_nothing() {
        let sched = ManualScheduler::new();
        let mut s = GravitySlider::with_defaults(
            Rc::new(sched.clone()),
            Box::new(ConsoleSurface::default()),
        );
        s.mount();
        let mut pacer = Pacer::new(Duration::from_millis(16), false);
        assert_eq!(run(&mut s, &sched, &[Step::Hold(50)], &mut pacer), 0);
    }
}
