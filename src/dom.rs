use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// An event listener that unregisters itself when dropped.
pub struct ListenerGuard {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub fn listen(
    target: &web::EventTarget,
    kind: &'static str,
    handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<ListenerGuard> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("add {} listener: {:?}", kind, e))?;
    Ok(ListenerGuard {
        target: target.clone(),
        kind,
        closure,
    })
}

pub fn html_by_id(root: &web::ShadowRoot, id: &str) -> anyhow::Result<web::HtmlElement> {
    root.get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow!("#{} is not an HtmlElement: {:?}", id, e))
}

/// Reuses an existing open shadow root so a host can be remounted.
pub fn open_shadow(host: &web::HtmlElement) -> anyhow::Result<web::ShadowRoot> {
    if let Some(root) = host.shadow_root() {
        return Ok(root);
    }
    host.attach_shadow(&web::ShadowRootInit::new(web::ShadowRootMode::Open))
        .map_err(|e| anyhow!("attach shadow: {:?}", e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

#[inline]
pub fn has_class(target: Option<web::EventTarget>, class: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| el.class_list().contains(class))
        .unwrap_or(false)
}

/// Runs `f` once after `ms` milliseconds.
pub fn after(ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    let ms = i32::try_from(ms).unwrap_or(i32::MAX);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
}
