//! Session device tier, probed from the browser once and cached.

use crate::constants::{DEBUG_RENDERER_EXT, UNMASKED_RENDERER_WEBGL};
use folio_core::{DeviceSignals, DeviceTier, QualityProfile, RendererInfo};
use std::cell::OnceCell;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

thread_local! {
    static SESSION_TIER: OnceCell<DeviceTier> = const { OnceCell::new() };
}

pub fn session_tier() -> DeviceTier {
    SESSION_TIER.with(|cell| {
        *cell.get_or_init(|| {
            let signals = probe_signals();
            let tier = DeviceTier::classify(&signals);
            log::info!(
                "[device] memory={:?}GB cores={:?} renderer={:?} -> tier={}",
                signals.memory_gb,
                signals.cores,
                signals.renderer,
                tier
            );
            tier
        })
    })
}

#[inline]
pub fn session_profile() -> &'static QualityProfile {
    QualityProfile::for_tier(session_tier())
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

fn probe_signals() -> DeviceSignals {
    let Some(window) = web::window() else {
        return DeviceSignals::default();
    };
    let navigator = window.navigator();
    let memory_gb = js_sys::Reflect::get(&navigator, &JsValue::from_str("deviceMemory"))
        .ok()
        .and_then(|v| v.as_f64());
    let cores = Some(navigator.hardware_concurrency())
        .filter(|c| c.is_finite() && *c >= 1.0)
        .map(|c| c as u32);
    let renderer = window
        .document()
        .map(|d| probe_renderer(&d))
        .unwrap_or(RendererInfo::NoContext);
    DeviceSignals {
        memory_gb,
        cores,
        renderer,
    }
}

fn probe_renderer(document: &web::Document) -> RendererInfo {
    let gl = document
        .create_element("canvas")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .and_then(|canvas| canvas.get_context("webgl").ok().flatten())
        .and_then(|ctx| ctx.dyn_into::<web::WebGlRenderingContext>().ok());
    let Some(gl) = gl else {
        return RendererInfo::NoContext;
    };
    if !matches!(gl.get_extension(DEBUG_RENDERER_EXT), Ok(Some(_))) {
        return RendererInfo::Unknown;
    }
    match gl.get_parameter(UNMASKED_RENDERER_WEBGL).ok().and_then(|v| v.as_string()) {
        Some(name) if !name.is_empty() => RendererInfo::Named(name),
        _ => RendererInfo::Unknown,
    }
}
