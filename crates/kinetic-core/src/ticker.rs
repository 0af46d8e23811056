//! Fixed-period tick timers as owned, cancellable handles.
//!
//! A [`Scheduler`] starts a repeating timer and hands back a [`TickGuard`];
//! the timer runs until the guard is cancelled or dropped. Widgets keep at
//! most one guard and drop it before asking for another, so two loops can
//! never drive the same motion state.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

pub struct TickGuard {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TickGuard {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.stop();
    }
}

impl fmt::Debug for TickGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickGuard")
            .field("live", &self.cancel.is_some())
            .finish()
    }
}

pub trait Scheduler {
    /// Starts calling the owner's tick every `period` until the guard goes.
    fn every(&self, period: Duration) -> TickGuard;
}

/// Scheduler for hosts that pump ticks themselves (tests, the replay
/// harness). It only books timers; callers invoke `tick()` while
/// [`ManualScheduler::live`] is non-zero.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    live: Rc<Cell<usize>>,
    started: Rc<Cell<usize>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers started and not yet cancelled.
    pub fn live(&self) -> usize {
        self.live.get()
    }

    /// Timers ever started.
    pub fn started(&self) -> usize {
        self.started.get()
    }
}

impl Scheduler for ManualScheduler {
    fn every(&self, _period: Duration) -> TickGuard {
        self.live.set(self.live.get() + 1);
        self.started.set(self.started.get() + 1);
        let live = Rc::clone(&self.live);
        TickGuard::new(move || live.set(live.get().saturating_sub(1)))
    }
}
