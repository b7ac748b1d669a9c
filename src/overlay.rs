//! Performance overlay: FPS, JS heap and backdrop counts. Hidden until
//! toggled with Ctrl+Shift+P.

use crate::constants::PERF_OVERLAY_ID;
use crate::visibility::SharedRegistry;
use folio_core::{FpsCounter, FpsGrade, HeapUsage};
use wasm_bindgen::JsValue;
use web_sys as web;

pub struct PerfMonitor {
    pub fps: FpsCounter,
    pub heap: Option<HeapUsage>,
    pub visible: bool,
    pub registry: SharedRegistry,
}

impl PerfMonitor {
    pub fn new(registry: SharedRegistry) -> Self {
        Self {
            fps: FpsCounter::new(),
            heap: None,
            visible: false,
            registry,
        }
    }

    pub fn toggle(&mut self, document: &web::Document) {
        self.visible = !self.visible;
        if self.visible {
            show(document);
            self.update(document);
        } else {
            hide(document);
        }
    }

    /// Re-renders the overlay if it is showing.
    pub fn update(&self, document: &web::Document) {
        if !self.visible {
            return;
        }
        let Some(el) = document.get_element_by_id(PERF_OVERLAY_ID) else {
            return;
        };
        let fps = self.fps.fps();
        let grade = FpsGrade::from_fps(fps);
        let (mounted, animating, total) = {
            let reg = self.registry.borrow();
            (reg.mounted_count(), reg.animating_count(), reg.len())
        };
        let mut html = format!(
            "<div class='perf-title'>Performance Monitor</div>\
             <div class='{}'>FPS: {}</div>\
             <div>Backdrops: {} mounted, {} animating of {}</div>",
            grade.css_class(),
            fps,
            mounted,
            animating,
            total
        );
        if let Some(heap) = &self.heap {
            for line in heap.lines() {
                html.push_str(&format!("<div>{line}</div>"));
            }
        }
        html.push_str("<div class='perf-hint'>Press Ctrl+Shift+P to toggle</div>");
        el.set_inner_html(&html);
    }
}

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PERF_OVERLAY_ID) {
        _ = el.remove_attribute("hidden");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PERF_OVERLAY_ID) {
        _ = el.set_attribute("hidden", "");
    }
}

/// Reads `performance.memory` where the browser exposes it.
pub fn read_heap_usage() -> Option<HeapUsage> {
    let performance = web::window()?.performance()?;
    let memory = js_sys::Reflect::get(&performance, &JsValue::from_str("memory")).ok()?;
    if memory.is_undefined() || memory.is_null() {
        return None;
    }
    let field = |name: &str| {
        js_sys::Reflect::get(&memory, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.as_f64())
    };
    Some(HeapUsage {
        used: field("usedJSHeapSize")?,
        total: field("totalJSHeapSize")?,
        limit: field("jsHeapSizeLimit")?,
    })
}
