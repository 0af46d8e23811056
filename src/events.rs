mod pointer;
mod touch;

use crate::dom::{self, ListenerGuard};
use glam::DVec2;
use kinetic_core::{to_signal, Bounds, GestureSignal, InputStage, Phase, PointSource, PressTarget, Widget};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything a widget's input listeners need.
#[derive(Clone)]
pub struct InputWiring {
    pub widget: Rc<RefCell<dyn Widget>>,
    /// Presses start here (slider container, launcher icon).
    pub press_zone: web::HtmlElement,
    /// Its rect becomes the widget bounds on every press.
    pub frame: web::HtmlElement,
    pub label: &'static str,
}

/// Press listeners go on the widget, move and release listeners on the
/// window so a drag keeps tracking outside the element. Dropping the
/// returned guards removes them all.
pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Vec<ListenerGuard>> {
    let window: web::EventTarget = web::window()
        .ok_or_else(|| anyhow::anyhow!("no window"))?
        .into();
    let zone: &web::EventTarget = w.press_zone.as_ref();

    let mut guards = Vec::with_capacity(7);
    guards.push(pointer::wire_mousedown(zone, w)?);
    guards.push(pointer::wire_mousemove(&window, w)?);
    guards.push(pointer::wire_mouseup(&window, w)?);
    guards.push(touch::wire_touchstart(zone, w)?);
    guards.push(touch::wire_touchmove(&window, w)?);
    guards.push(touch::wire_touchend(&window, w)?);
    guards.push(touch::wire_touchcancel(&window, w)?);
    log::debug!("[{}] {} input listeners", w.label, guards.len());
    Ok(guards)
}

fn element_bounds(el: &web::HtmlElement) -> Bounds {
    let r = el.get_bounding_client_rect();
    Bounds::from_ltrb(r.left(), r.top(), r.right(), r.bottom())
}

#[inline]
fn press_target(ev: &web::Event) -> PressTarget {
    if dom::has_class(ev.target(), crate::constants::HANDLE_CLASS) {
        PressTarget::Handle
    } else {
        PressTarget::Body
    }
}

/// Translates one raw event and hands it to the widget. Returns the phase
/// afterwards, or `None` when nothing was delivered.
fn deliver<S: PointSource>(
    w: &InputWiring,
    stage: InputStage,
    source: &S,
    target: PressTarget,
) -> Option<Phase> {
    let signal = to_signal(stage, source, target)?;
    // A listener can fire while a tick or an observer still holds the widget.
    let Ok(mut widget) = w.widget.try_borrow_mut() else {
        log::warn!("[{}] busy, dropped {:?}", w.label, stage);
        return None;
    };
    if matches!(signal, GestureSignal::Start(_)) {
        widget.set_bounds(element_bounds(&w.frame));
    }
    widget.dispatch(signal);
    Some(widget.phase())
}

#[inline]
fn client_point(x: i32, y: i32) -> DVec2 {
    DVec2::new(f64::from(x), f64::from(y))
}
