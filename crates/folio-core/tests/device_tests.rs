// Tests for the device tier classifier and quality lookup.

use folio_core::*;

fn signals(memory: Option<f64>, cores: Option<u32>, renderer: RendererInfo) -> DeviceSignals {
    DeviceSignals {
        memory_gb: memory,
        cores,
        renderer,
    }
}

fn named(s: &str) -> RendererInfo {
    RendererInfo::Named(s.to_string())
}

#[test]
fn strong_discrete_gpu_is_high() {
    let s = signals(Some(8.0), Some(8), named("ANGLE (NVIDIA GeForce RTX 3070)"));
    assert_eq!(DeviceTier::classify(&s), DeviceTier::High);
}

#[test]
fn integrated_intel_caps_at_medium() {
    let s = signals(Some(16.0), Some(12), named("ANGLE (Intel, Intel(R) UHD Graphics 620)"));
    assert_eq!(DeviceTier::classify(&s), DeviceTier::Medium);
}

#[test]
fn software_renderers_cap_at_medium() {
    for r in ["Google SwiftShader", "llvmpipe (LLVM 15.0.7, 256 bits)"] {
        let s = signals(Some(8.0), Some(8), named(r));
        assert_eq!(DeviceTier::classify(&s), DeviceTier::Medium, "renderer {r}");
    }
}

#[test]
fn masked_renderer_can_still_be_high() {
    let s = signals(Some(8.0), Some(16), RendererInfo::Unknown);
    assert_eq!(DeviceTier::classify(&s), DeviceTier::High);
}

#[test]
fn missing_signals_default_to_medium() {
    assert_eq!(DeviceTier::classify(&DeviceSignals::default()), DeviceTier::Medium);
    // Zero cores is treated as unknown, not as a weak device
    let s = signals(None, Some(0), RendererInfo::Unknown);
    assert_eq!(DeviceTier::classify(&s), DeviceTier::Medium);
}

#[test]
fn weak_device_is_low() {
    assert_eq!(
        DeviceTier::classify(&signals(Some(2.0), Some(8), RendererInfo::Unknown)),
        DeviceTier::Low
    );
    assert_eq!(
        DeviceTier::classify(&signals(Some(8.0), Some(2), RendererInfo::Unknown)),
        DeviceTier::Low
    );
}

#[test]
fn no_webgl_context_is_low() {
    let s = signals(Some(32.0), Some(32), RendererInfo::NoContext);
    assert_eq!(DeviceTier::classify(&s), DeviceTier::Low);
}

#[test]
fn memory_boundaries() {
    let at = |m: f64, c: u32| {
        DeviceTier::classify(&signals(Some(m), Some(c), RendererInfo::Unknown))
    };
    assert_eq!(at(7.99, 8), DeviceTier::Medium);
    assert_eq!(at(8.0, 7), DeviceTier::Medium);
    assert_eq!(at(4.0, 4), DeviceTier::Medium);
    assert_eq!(at(3.99, 4), DeviceTier::Low);
    assert_eq!(at(4.0, 3), DeviceTier::Low);
}

#[test]
fn classifier_is_deterministic_and_every_tier_reachable() {
    let inputs = [
        signals(Some(0.5), Some(1), RendererInfo::Unknown),
        signals(Some(4.0), Some(4), named("Apple M1")),
        signals(Some(8.0), Some(10), named("Apple M1")),
    ];
    let tiers: Vec<_> = inputs.iter().map(DeviceTier::classify).collect();
    assert_eq!(tiers, vec![DeviceTier::Low, DeviceTier::Medium, DeviceTier::High]);
    for s in &inputs {
        assert_eq!(DeviceTier::classify(s), DeviceTier::classify(&s.clone()));
    }
}

#[test]
fn quality_lookup_is_total_and_monotonic() {
    let mut prev: Option<&QualityProfile> = None;
    for tier in DeviceTier::ALL {
        let p = QualityProfile::for_tier(tier);
        assert!(p.pixel_ratio_cap >= 1.0);
        assert!(p.shadow_map_size.is_power_of_two());
        assert!(p.max_lights >= 2);
        if let Some(prev) = prev {
            assert!(p.pixel_ratio_cap > prev.pixel_ratio_cap, "{tier} dpr cap");
            assert!(p.shadow_map_size > prev.shadow_map_size, "{tier} shadows");
            assert!(p.max_lights > prev.max_lights, "{tier} lights");
            assert!(p.frame_skip < prev.frame_skip, "{tier} frame skip");
        }
        prev = Some(p);
    }
}

#[test]
fn quality_table_values() {
    let low = QualityProfile::for_tier(DeviceTier::Low);
    assert_eq!(low.shadow_map_size, 256);
    assert!(!low.antialias);
    assert_eq!(low.geometry_detail, GeometryDetail::Low);
    assert_eq!(low.frame_skip, 2);

    let high = QualityProfile::for_tier(DeviceTier::High);
    assert_eq!(high.shadow_map_size, 1024);
    assert!(high.antialias);
    assert_eq!(high.max_lights, 4);
    assert_eq!(high.frame_skip, 0);
}

#[test]
fn pixel_ratio_is_capped_per_tier() {
    let medium = QualityProfile::for_tier(DeviceTier::Medium);
    assert_eq!(medium.pixel_ratio(3.0), 1.5);
    assert_eq!(medium.pixel_ratio(1.25), 1.25);
    assert_eq!(medium.pixel_ratio(f64::NAN), 1.0);
    assert_eq!(medium.pixel_ratio(0.0), 1.0);
}

#[test]
fn frame_skipper_renders_one_in_skip_plus_one() {
    for skip in 0..4u32 {
        let mut skipper = FrameSkipper::new(skip);
        let rendered = (0..120).filter(|_| skipper.should_render()).count();
        assert_eq!(rendered, 120 / (skip as usize + 1), "skip={skip}");
    }
}

#[test]
fn tier_display_names() {
    assert_eq!(DeviceTier::Low.to_string(), "low");
    assert_eq!(DeviceTier::Medium.to_string(), "medium");
    assert_eq!(DeviceTier::High.to_string(), "high");
}
