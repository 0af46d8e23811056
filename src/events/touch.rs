use super::{client_point, deliver, press_target, InputWiring};
use crate::dom::{self, ListenerGuard};
use glam::DVec2;
use kinetic_core::{InputStage, Phase, PressTarget, TouchSample};
use wasm_bindgen::JsCast;
use web_sys as web;

// Active touches in list order; sessions follow the first.
fn touch_points(ev: &web::TouchEvent) -> Vec<DVec2> {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| client_point(t.client_x(), t.client_y()))
        .collect()
}

pub fn wire_touchstart(zone: &web::EventTarget, w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    dom::listen(zone, "touchstart", move |ev: web::Event| {
        let Some(tev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let points = touch_points(tev);
        let phase = deliver(
            &w,
            InputStage::Down,
            &TouchSample { touches: &points },
            press_target(&ev),
        );
        // Only swallow the browser's scroll and zoom when a session began.
        if matches!(phase, Some(p) if p != Phase::Idle) {
            ev.prevent_default();
        }
    })
}

pub fn wire_touchmove(window: &web::EventTarget, w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    dom::listen(window, "touchmove", move |ev: web::Event| {
        if let Some(tev) = ev.dyn_ref::<web::TouchEvent>() {
            let points = touch_points(tev);
            deliver(
                &w,
                InputStage::Move,
                &TouchSample { touches: &points },
                PressTarget::Body,
            );
        }
    })
}

pub fn wire_touchend(window: &web::EventTarget, w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    dom::listen(window, "touchend", move |_ev: web::Event| {
        deliver(&w, InputStage::Up, &TouchSample { touches: &[] }, PressTarget::Body);
    })
}

pub fn wire_touchcancel(window: &web::EventTarget, w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    dom::listen(window, "touchcancel", move |_ev: web::Event| {
        deliver(
            &w,
            InputStage::Cancel,
            &TouchSample { touches: &[] },
            PressTarget::Body,
        );
    })
}
