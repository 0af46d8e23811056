use super::{client_point, deliver, press_target, InputWiring};
use crate::dom::{self, ListenerGuard};
use kinetic_core::{InputStage, MouseSample, PressTarget};
use wasm_bindgen::JsCast;
use web_sys as web;

fn sample(ev: &web::MouseEvent) -> MouseSample {
    MouseSample {
        client: client_point(ev.client_x(), ev.client_y()),
    }
}

pub fn wire_mousedown(zone: &web::EventTarget, w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    dom::listen(zone, "mousedown", move |ev: web::Event| {
        let Some(mev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        // primary button only
        if mev.button() != 0 {
            return;
        }
        deliver(&w, InputStage::Down, &sample(mev), press_target(&ev));
    })
}

pub fn wire_mousemove(window: &web::EventTarget, w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    dom::listen(window, "mousemove", move |ev: web::Event| {
        if let Some(mev) = ev.dyn_ref::<web::MouseEvent>() {
            deliver(&w, InputStage::Move, &sample(mev), PressTarget::Body);
        }
    })
}

pub fn wire_mouseup(window: &web::EventTarget, w: &InputWiring) -> anyhow::Result<ListenerGuard> {
    let w = w.clone();
    dom::listen(window, "mouseup", move |ev: web::Event| {
        if let Some(mev) = ev.dyn_ref::<web::MouseEvent>() {
            deliver(&w, InputStage::Up, &sample(mev), PressTarget::Body);
        }
    })
}
