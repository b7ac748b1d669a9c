//! Intersection gating for decorative regions.
//!
//! Each region gets its own `IntersectionObserver` feeding a shared
//! [`RegionRegistry`]. When the observer API is missing the gate fails open:
//! the region is latched and mounted right away.

use folio_core::{GateOptions, LatchEvent, RegionRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type SharedRegistry = Rc<RefCell<RegionRegistry>>;

type Pending = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

thread_local! {
    // Observers stay alive for the page lifetime.
    static LIVE_OBSERVERS: RefCell<Vec<web::IntersectionObserver>> =
        const { RefCell::new(Vec::new()) };
}

pub fn observer_supported() -> bool {
    web::window()
        .map(|w| {
            js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Starts observing `element`. `on_first_visible` runs once, when the region
/// first comes within the margin of the viewport (or immediately on fail-open).
pub fn observe_region(
    registry: &SharedRegistry,
    element: &web::Element,
    region_id: &str,
    options: GateOptions,
    on_first_visible: impl FnOnce() + 'static,
) {
    let pending: Pending = Rc::new(RefCell::new(Some(Box::new(on_first_visible))));

    if !observer_supported() {
        log::warn!("[gate] IntersectionObserver unavailable; rendering {region_id} eagerly");
        fail_open(registry, region_id, &pending);
        return;
    }
    registry.borrow_mut().register(region_id);

    let registry_cb = registry.clone();
    let pending_cb = pending.clone();
    let id = region_id.to_string();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let event = registry_cb.borrow_mut().observe(&id, entry.is_intersecting());
                match event {
                    LatchEvent::Latched => {
                        log::info!("[gate] {id} latched, mounting");
                        run_pending(&pending_cb);
                    }
                    LatchEvent::Shown => log::debug!("[gate] {id} back in view"),
                    LatchEvent::Hidden => log::debug!("[gate] {id} out of view"),
                    LatchEvent::Unchanged => {}
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin_css());

    match web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            LIVE_OBSERVERS.with(|live| live.borrow_mut().push(observer));
            callback.forget();
        }
        Err(e) => {
            log::warn!("[gate] observer construction failed for {region_id}: {:?}", e);
            fail_open(registry, region_id, &pending);
        }
    }
}

fn fail_open(registry: &SharedRegistry, region_id: &str, pending: &Pending) {
    registry.borrow_mut().register_fail_open(region_id);
    run_pending(pending);
}

fn run_pending(pending: &Pending) {
    let f = pending.borrow_mut().take();
    if let Some(f) = f {
        f();
    }
}
