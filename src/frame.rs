use kinetic_core::{Scheduler, TickGuard, Widget};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickTarget = Rc<RefCell<Option<Weak<RefCell<dyn Widget>>>>>;

/// `setInterval`-backed scheduler. A widget owns its scheduler, so the widget
/// to tick is bound after both exist; the timer only holds a weak reference.
#[derive(Clone, Default)]
pub struct IntervalScheduler {
    target: TickTarget,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, widget: &Rc<RefCell<dyn Widget>>) {
        *self.target.borrow_mut() = Some(Rc::downgrade(widget));
    }
}

fn tick(target: &TickTarget) {
    let Some(widget) = target.borrow().as_ref().and_then(Weak::upgrade) else {
        return;
    };
    match widget.try_borrow_mut() {
        Ok(mut w) => w.tick(),
        Err(_) => log::warn!("[frame] widget busy, tick skipped"),
    };
}

impl Scheduler for IntervalScheduler {
    fn every(&self, period: Duration) -> TickGuard {
        let Some(window) = web::window() else {
            log::error!("[frame] no window, timer not started");
            return TickGuard::new(|| {});
        };
        let target = Rc::clone(&self.target);
        let closure = Closure::wrap(Box::new(move || tick(&target)) as Box<dyn FnMut()>);
        let ms = i32::try_from(period.as_millis()).unwrap_or(i32::MAX).max(1);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        ) {
            // Landing cancels from inside the callback; wasm-bindgen defers
            // freeing the closure until that call returns.
            Ok(handle) => TickGuard::new(move || {
                window.clear_interval_with_handle(handle);
                drop(closure);
            }),
            Err(e) => {
                log::error!("[frame] setInterval failed: {:?}", e);
                TickGuard::new(|| {})
            }
        }
    }
}
