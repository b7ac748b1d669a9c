#![cfg(target_arch = "wasm32")]
use folio_core::{RegionRegistry, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod backdrop;
mod constants;
mod contact;
mod device;
mod dom;
mod events;
mod navbar;
mod overlay;
mod render;
mod visibility;

use visibility::SharedRegistry;

fn load_config(document: &web::Document) -> SiteConfig {
    let json = document
        .get_element_by_id(constants::SITE_CONFIG_ID)
        .and_then(|el| el.text_content());
    let config = SiteConfig::load_or_default(json.as_deref());
    log::info!(
        "[config] endpoint={} fps={} reset={}ms",
        config.contact_endpoint,
        config.backdrop_fps,
        config.status_reset_ms
    );
    config
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let config = load_config(&document);
    let tier = device::session_tier();
    log::info!("[device] session tier: {tier}");

    navbar::wire_navbar(&document);
    navbar::wire_anchor_links(&document);
    navbar::wire_resume_link(&document, &config.resume_href);

    // Shared by the backdrop gates and the perf overlay
    let registry: SharedRegistry = Rc::new(RefCell::new(RegionRegistry::new()));
    backdrop::wire_backdrops(&document, &registry, &config);

    contact::wire_contact_form(&document, &config);
    events::wire_perf_overlay(&document, registry);

    Ok(())
}
