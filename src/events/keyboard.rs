use crate::dom;
use crate::overlay::{self, PerfMonitor};
use crate::visibility::SharedRegistry;
use folio_core::constants::HEAP_POLL_MS;
use folio_core::is_overlay_toggle;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    monitor: &Rc<RefCell<PerfMonitor>>,
    document: &web::Document,
) {
    if is_overlay_toggle(ev.ctrl_key(), ev.shift_key(), &ev.key()) {
        ev.prevent_default();
        let mut m = monitor.borrow_mut();
        m.toggle(document);
        log::info!("[perf] overlay {}", if m.visible { "shown" } else { "hidden" });
    }
}

/// Wires the Ctrl+Shift+P toggle, the FPS frame counter and the heap poll.
pub fn wire_perf_overlay(document: &web::Document, registry: SharedRegistry) {
    overlay::hide(document);
    let monitor = Rc::new(RefCell::new(PerfMonitor::new(registry)));
    let Some(window) = web::window() else {
        return;
    };

    {
        let monitor = monitor.clone();
        let doc = document.clone();
        dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &monitor, &doc);
        });
    }

    // Heap readings
    monitor.borrow_mut().heap = overlay::read_heap_usage();
    {
        let monitor = monitor.clone();
        let doc = document.clone();
        let poll = Closure::wrap(Box::new(move || {
            let mut m = monitor.borrow_mut();
            m.heap = overlay::read_heap_usage();
            m.update(&doc);
        }) as Box<dyn FnMut()>);
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            poll.as_ref().unchecked_ref(),
            HEAP_POLL_MS as i32,
        ) {
            log::warn!("[perf] heap poll not started: {:?}", e);
        }
        poll.forget();
    }

    // Frame counter
    let doc = document.clone();
    dom::start_raf_loop(move |ts| {
        let reading = monitor.borrow_mut().fps.tick(ts);
        if reading.is_some() {
            monitor.borrow().update(&doc);
        }
    });
}
