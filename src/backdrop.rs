//! Animated backdrop regions: mounting behind the visibility gate and the
//! throttled render loop.

use crate::constants::*;
use crate::device;
use crate::dom;
use crate::render::{BackdropUniforms, GpuState};
use crate::visibility::{observe_region, SharedRegistry};
use folio_core::constants::MAX_FRAME_DT_SEC;
use folio_core::{FrameSkipper, FrameThrottle, GateOptions, OrbField, QualityProfile, SiteConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct BackdropContext {
    pub region_id: String,
    pub canvas: web::HtmlCanvasElement,
    pub registry: SharedRegistry,
    pub profile: &'static QualityProfile,
    pub field: OrbField,
    pub gpu: GpuState,

    pub throttle: FrameThrottle,
    pub skipper: FrameSkipper,
    pub last_instant: Instant,
    pub time_accum: f32,
}

impl BackdropContext {
    pub fn frame(&mut self, now_ms: f64) {
        let animate = self
            .registry
            .borrow()
            .latch(&self.region_id)
            .map(|l| l.should_animate())
            .unwrap_or(true);
        if !animate {
            // Paused off-screen; keep the clock from jumping on resume.
            self.last_instant = Instant::now();
            self.throttle.reset();
            return;
        }
        if !self.throttle.ready(now_ms) || !self.skipper.should_render() {
            return;
        }

        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.time_accum += dt_sec;

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.gpu.resize_if_needed(w, h);
        let (w, h) = self.gpu.size();
        let uniforms = BackdropUniforms::build(&self.field, self.profile, self.time_accum, w, h);
        match self.gpu.render(&uniforms) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(e) => log::error!("[backdrop] {} render error: {:?}", self.region_id, e),
        }
    }
}

pub fn start_loop(ctx: Rc<RefCell<BackdropContext>>) {
    dom::start_raf_loop(move |ts| ctx.borrow_mut().frame(ts));
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, pixel_ratio: f64) {
    dom::sync_canvas_backing_size(canvas, pixel_ratio);
    let canvas_resize = canvas.clone();
    if let Some(window) = web::window() {
        dom::add_listener(&window, "resize", move |_: web::Event| {
            dom::sync_canvas_backing_size(&canvas_resize, pixel_ratio);
        });
    }
}

fn create_canvas(region: &web::Element) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_class_name(BACKDROP_CANVAS_CLASS);
    _ = canvas.set_attribute("aria-hidden", "true");
    _ = canvas.set_attribute(
        "style",
        "position:absolute;inset:0;width:100%;height:100%;pointer-events:none",
    );
    region
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Creates the canvas, initializes WebGPU and starts the loop. A region whose
/// GPU setup fails stays static.
fn mount(region: web::Element, region_id: String, seed: u64, registry: SharedRegistry, fps: f64) {
    let profile = device::session_profile();
    let canvas = match create_canvas(&region) {
        Ok(c) => c,
        Err(e) => {
            log::error!("[backdrop] {region_id}: canvas creation failed: {:?}", e);
            return;
        }
    };
    wire_canvas_resize(&canvas, profile.pixel_ratio(device::device_pixel_ratio()));

    spawn_local(async move {
        let gpu = match GpuState::new(&canvas).await {
            Ok(g) => g,
            Err(e) => {
                log::error!("[backdrop] {region_id}: WebGPU init error: {:?}", e);
                return;
            }
        };
        let field = OrbField::for_profile(profile, seed);
        log::info!(
            "[backdrop] {region_id}: {} orbs, {} lights, {} fps, skip {}",
            field.len(),
            profile.max_lights,
            fps,
            profile.frame_skip
        );
        let ctx = Rc::new(RefCell::new(BackdropContext {
            region_id,
            canvas,
            registry,
            profile,
            field,
            gpu,
            throttle: FrameThrottle::new(fps),
            skipper: FrameSkipper::new(profile.frame_skip),
            last_instant: Instant::now(),
            time_accum: 0.0,
        }));
        start_loop(ctx);
    });
}

pub fn wire_backdrops(document: &web::Document, registry: &SharedRegistry, config: &SiteConfig) {
    let regions = dom::query_all(document, BACKDROP_SELECTOR);
    log::info!("[backdrop] {} regions found", regions.len());
    for (i, region) in regions.into_iter().enumerate() {
        let region_id = match region.id() {
            id if id.is_empty() => format!("backdrop-{i}"),
            id => id,
        };
        let options = region
            .get_attribute(BACKDROP_ATTR)
            .map(|v| GateOptions::from_attr(&v))
            .unwrap_or_default();
        let seed = BACKDROP_SEED_BASE ^ i as u64;
        let registry_mount = registry.clone();
        let id_mount = region_id.clone();
        let region_mount = region.clone();
        let fps = config.backdrop_fps;
        observe_region(registry, &region, &region_id, options, move || {
            mount(region_mount, id_mount, seed, registry_mount, fps)
        });
    }
}
