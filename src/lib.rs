#![cfg(target_arch = "wasm32")]
use crate::constants::{LAUNCHER_TAG, SLIDER_TAG};
use crate::mount::Kind;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod css;
mod dom;
mod events;
mod frame;
mod mount;
mod page;
mod render;

/// Handle returned to the page for a mounted widget.
#[wasm_bindgen]
pub struct MountHandle {
    id: u32,
    value: Rc<Cell<u32>>,
}

#[wasm_bindgen]
impl MountHandle {
    /// Last committed value.
    pub fn value(&self) -> u32 {
        self.value.get()
    }

    /// Stops the widget and removes its listeners. Returns false if it was
    /// already unmounted.
    pub fn unmount(&self) -> bool {
        mount::unregister(self.id)
    }
}

fn mount_as(host: &web::HtmlElement, kind: Kind) -> Result<MountHandle, JsValue> {
    let (id, value) =
        mount::register(host, kind).map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
    Ok(MountHandle { id, value })
}

#[wasm_bindgen]
pub fn mount_gravity_slider(host: web::HtmlElement) -> Result<MountHandle, JsValue> {
    mount_as(&host, Kind::Slider)
}

#[wasm_bindgen]
pub fn mount_number_launcher(host: web::HtmlElement) -> Result<MountHandle, JsValue> {
    mount_as(&host, Kind::Launcher)
}

#[wasm_bindgen]
pub fn unmount_all() {
    let n = mount::unregister_all();
    if n > 0 {
        log::info!("unmounted {} widget(s)", n);
    }
}

async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if !page::still_loading(&document.ready_state()) {
        return Ok(());
    }
    let doc = document.clone();
    let once = web::AddEventListenerOptions::new();
    once.set_once(true);
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            "DOMContentLoaded",
            &resolve,
            &once,
        );
    });
    JsFuture::from(ready)
        .await
        .map_err(|e| anyhow::anyhow!("waiting for DOMContentLoaded: {:?}", e))?;
    Ok(())
}

fn mount_all(document: &web::Document, tag: &str, kind: Kind) -> anyhow::Result<usize> {
    let nodes = document
        .query_selector_all(tag)
        .map_err(|e| anyhow::anyhow!("query {}: {:?}", tag, e))?;
    let mut mounted = 0;
    for i in 0..nodes.length() {
        let Some(host) = nodes.get(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        // One bad host shouldn't keep the rest of the page from mounting.
        match mount::register(&host, kind) {
            Ok(_) => mounted += 1,
            Err(e) => log::error!("mount <{}> #{}: {:?}", tag, i, e),
        }
    }
    Ok(mounted)
}

fn mount_tags(document: &web::Document) -> anyhow::Result<(usize, usize)> {
    let sliders = mount_all(document, SLIDER_TAG, Kind::Slider)?;
    let launchers = mount_all(document, LAUNCHER_TAG, Kind::Launcher)?;
    Ok((sliders, launchers))
}

fn remount_restored_page(ev: web::Event) {
    let persisted = ev
        .dyn_ref::<web::PageTransitionEvent>()
        .map(|e| e.persisted())
        .unwrap_or(false);
    if !page::needs_remount(persisted, mount::mounted_count()) {
        return;
    }
    let Some(document) = dom::window_document() else {
        return;
    };
    match mount_tags(&document) {
        Ok((sliders, launchers)) => log::info!(
            "restored from cache: remounted {} slider(s), {} launcher(s)",
            sliders,
            launchers
        ),
        Err(e) => log::error!("remount after pageshow: {:?}", e),
    }
}

// Widgets mounted through the exported functions are not remounted on
// pageshow; the page owns those handles.
fn wire_page_lifecycle() {
    let Some(window) = web::window() else {
        return;
    };
    let hide = Closure::wrap(Box::new(unmount_all) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", hide.as_ref().unchecked_ref());
    hide.forget();

    let show = Closure::wrap(Box::new(remount_restored_page) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback("pageshow", show.as_ref().unchecked_ref());
    show.forget();
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    let (sliders, launchers) = mount_tags(&document)?;
    wire_page_lifecycle();
    log::info!(
        "mounted {} slider(s), {} launcher(s); {} live",
        sliders,
        launchers,
        mount::mounted_count()
    );
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("kinetic-inputs starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}
