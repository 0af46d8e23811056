use crate::constants::{LAUNCHER_EVENT, SLIDER_EVENT};
use crate::dom::{self, ListenerGuard};
use crate::events::{self, InputWiring};
use crate::frame::IntervalScheduler;
use crate::render::DomSurface;
use fnv::FnvHashMap;
use kinetic_core::{
    GravitySlider, LauncherConfig, NumberLauncher, SliderConfig, ValueChange, Widget,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Slider,
    Launcher,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Kind::Slider => "slider",
            Kind::Launcher => "launcher",
        }
    }

    fn event_name(self) -> &'static str {
        match self {
            Kind::Slider => SLIDER_EVENT,
            Kind::Launcher => LAUNCHER_EVENT,
        }
    }
}

/// A live widget bound to a host element. Dropping it unmounts the widget and
/// removes its listeners.
pub struct Mounted {
    widget: Rc<RefCell<dyn Widget>>,
    value: Rc<Cell<u32>>,
    _listeners: Vec<ListenerGuard>,
}

impl Mounted {
    pub fn new(host: &web::HtmlElement, kind: Kind) -> anyhow::Result<Self> {
        let root = dom::open_shadow(host)?;
        let scheduler = Rc::new(IntervalScheduler::new());

        let (widget, zone): (Rc<RefCell<dyn Widget>>, web::HtmlElement) = match kind {
            Kind::Slider => {
                let config = SliderConfig::default();
                let surface = DomSurface::slider(&root, config.max_value)?;
                let zone = surface.press_zone();
                let w: Rc<RefCell<dyn Widget>> = Rc::new(RefCell::new(GravitySlider::new(
                    config,
                    scheduler.clone(),
                    Box::new(surface),
                )));
                (w, zone)
            }
            Kind::Launcher => {
                let config = LauncherConfig::default();
                let surface = DomSurface::launcher(&root, config.max_value)?;
                let zone = surface.press_zone();
                let w: Rc<RefCell<dyn Widget>> = Rc::new(RefCell::new(NumberLauncher::new(
                    config,
                    scheduler.clone(),
                    Box::new(surface),
                )));
                (w, zone)
            }
        };
        scheduler.bind(&widget);

        let value = Rc::new(Cell::new(0));
        {
            let mut w = widget.borrow_mut();
            value.set(w.value());
            let cell = Rc::clone(&value);
            let host = host.clone();
            let name = kind.event_name();
            w.subscribe(Box::new(move |change: ValueChange| {
                cell.set(change.value);
                notify(&host, name, change.value);
            }));
            w.mount();
        }

        let listeners = events::wire_input_handlers(&InputWiring {
            widget: Rc::clone(&widget),
            press_zone: zone.clone(),
            frame: zone,
            label: kind.label(),
        })?;
        log::info!("[{}] mounted, value {}", kind.label(), value.get());
        Ok(Self {
            widget,
            value,
            _listeners: listeners,
        })
    }

    pub fn value_cell(&self) -> Rc<Cell<u32>> {
        Rc::clone(&self.value)
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        match self.widget.try_borrow_mut() {
            Ok(mut w) => w.unmount(),
            Err(_) => log::warn!("unmount while widget busy; timer left to its guard"),
        };
    }
}

/// Dispatches the outward change notification: bubbling, composed, with
/// `detail = { value }`.
fn notify(host: &web::HtmlElement, name: &str, value: u32) {
    let detail = js_sys::Object::new();
    _ = js_sys::Reflect::set(&detail, &JsValue::from_str("value"), &JsValue::from(value));
    let init = web::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&detail);
    match web::CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(ev) => {
            _ = host.dispatch_event(&ev);
        }
        Err(e) => log::warn!("{} event not created: {:?}", name, e),
    }
}

thread_local! {
    static MOUNTS: RefCell<FnvHashMap<u32, Mounted>> = RefCell::new(FnvHashMap::default());
    static NEXT_ID: Cell<u32> = const { Cell::new(1) };
}

/// Mounts and registers; returns the registry id and the live value cell.
pub fn register(host: &web::HtmlElement, kind: Kind) -> anyhow::Result<(u32, Rc<Cell<u32>>)> {
    let mounted = Mounted::new(host, kind)?;
    let cell = mounted.value_cell();
    let id = NEXT_ID.with(|n| {
        let id = n.get();
        n.set(id.wrapping_add(1));
        id
    });
    MOUNTS.with(|m| m.borrow_mut().insert(id, mounted));
    Ok((id, cell))
}

pub fn unregister(id: u32) -> bool {
    let removed = MOUNTS.with(|m| m.borrow_mut().remove(&id));
    removed.is_some()
}

pub fn unregister_all() -> usize {
    let drained: Vec<Mounted> = MOUNTS.with(|m| m.borrow_mut().drain().map(|(_, v)| v).collect());
    drained.len()
}

pub fn mounted_count() -> usize {
    MOUNTS.with(|m| m.borrow().len())
}
