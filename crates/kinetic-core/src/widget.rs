//! Lifecycle and signal contract shared by both widgets.

use crate::commit::{Observer, SubscriptionId};
use crate::gesture::{Bounds, GestureSignal, Press};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Charging,
    Dragging,
    /// Value still converging after release (projectile in flight).
    Settling,
}

/// A mountable physics-driven input.
///
/// All methods are driven from a single thread: host input listeners call
/// the `session_*` methods and the widget's own timer calls [`Widget::tick`].
/// Motion state stays private; the committed value is observable through
/// [`Widget::value`] and the subscribed observers.
pub trait Widget {
    /// Paints the initial state and starts accepting gestures.
    fn mount(&mut self);
    /// Cancels the timer and any open session. No notifications follow.
    fn unmount(&mut self);
    /// Repaints everything from current state.
    fn render(&mut self);

    /// On-screen bounds, refreshed by the host before a press is delivered.
    fn set_bounds(&mut self, _bounds: Bounds) {}

    fn session_start(&mut self, press: Press);
    fn session_move(&mut self, point: DVec2);
    fn session_end(&mut self);
    /// Abandons the session without the usual release behaviour.
    fn cancel(&mut self);
    fn tick(&mut self);

    fn value(&self) -> u32;
    fn max_value(&self) -> u32;
    fn phase(&self) -> Phase;
    fn is_mounted(&self) -> bool;

    fn subscribe(&mut self, observer: Observer) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;

    /// Routes a modality-agnostic gesture signal.
    fn dispatch(&mut self, signal: GestureSignal) {
        match signal {
            GestureSignal::Start(press) => self.session_start(press),
            GestureSignal::Move(point) => self.session_move(point),
            GestureSignal::End => self.session_end(),
            GestureSignal::Cancel => self.cancel(),
        }
    }
}
