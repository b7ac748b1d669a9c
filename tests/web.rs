#![cfg(target_arch = "wasm32")]

use folio_core::{DeviceTier, FrameThrottle, GateOptions, QualityProfile};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn performance_clock_drives_throttle() {
    let perf = web_sys::window().unwrap().performance().unwrap();
    let mut throttle = FrameThrottle::new(30.0);
    let now = perf.now();
    assert!(throttle.ready(now));
    assert!(!throttle.ready(now + 1.0));
}

#[wasm_bindgen_test]
fn intersection_observer_accepts_gate_options() {
    let window = web_sys::window().unwrap();
    if !js_sys::Reflect::has(&window, &"IntersectionObserver".into()).unwrap_or(false) {
        return;
    }
    let cb = wasm_bindgen::closure::Closure::<dyn FnMut(js_sys::Array)>::new(|_: js_sys::Array| {});
    let opts = web_sys::IntersectionObserverInit::new();
    let gate = GateOptions::LAZY;
    opts.set_threshold(&gate.threshold.into());
    opts.set_root_margin(&gate.root_margin_css());
    let observer =
        web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts);
    assert!(observer.is_ok());
    observer.unwrap().disconnect();
}

#[wasm_bindgen_test]
fn data_backdrop_attribute_selects_gate_preset() {
    let document = web_sys::window().unwrap().document().unwrap();
    let region = document.create_element("section").unwrap();
    document.body().unwrap().append_child(&region).unwrap();

    region.set_attribute("data-backdrop", "lazy").unwrap();
    assert_eq!(
        GateOptions::from_attr(&region.get_attribute("data-backdrop").unwrap()),
        GateOptions::LAZY
    );
    region.set_attribute("data-backdrop", "eager").unwrap();
    assert_eq!(
        GateOptions::from_attr(&region.get_attribute("data-backdrop").unwrap()),
        GateOptions::EAGER
    );
    region.remove();
}

#[wasm_bindgen_test]
fn pixel_ratio_caps_the_real_device_ratio() {
    let dpr = web_sys::window().unwrap().device_pixel_ratio();
    for tier in DeviceTier::ALL {
        let profile = QualityProfile::for_tier(tier);
        let ratio = profile.pixel_ratio(dpr);
        assert!(ratio > 0.0 && ratio <= profile.pixel_ratio_cap, "{tier}: {ratio}");
        assert!(ratio <= dpr, "{tier}: {ratio} above device ratio {dpr}");
    }
}
