// Tests for the intersection latch and the per-region registry.

use folio_core::*;

#[test]
fn latch_starts_unlatched_and_hidden() {
    let latch = VisibilityLatch::new();
    assert!(!latch.is_intersecting);
    assert!(!latch.has_ever_intersected);
    assert!(!latch.should_mount());
    assert!(!latch.should_animate());
}

#[test]
fn first_intersection_latches_exactly_once() {
    let mut latch = VisibilityLatch::new();
    assert_eq!(latch.observe(true), LatchEvent::Latched);
    assert_eq!(latch.observe(true), LatchEvent::Unchanged);
    assert_eq!(latch.observe(false), LatchEvent::Hidden);
    assert_eq!(latch.observe(true), LatchEvent::Shown);
    assert!(latch.has_ever_intersected);
}

#[test]
fn latch_never_reverts_after_any_sequence() {
    // Property: once latched, no sequence of observations un-latches.
    let sequences: [&[bool]; 4] = [
        &[true, false, false, false],
        &[false, true, false, true, false],
        &[true, true, false],
        &[false, false, true, false, false, false, false],
    ];
    for seq in sequences {
        let mut latch = VisibilityLatch::new();
        let mut latched = false;
        for &obs in seq {
            latch.observe(obs);
            latched |= obs;
            assert_eq!(
                latch.has_ever_intersected, latched,
                "sequence {seq:?} broke the latch"
            );
            assert_eq!(latch.is_intersecting, obs);
        }
    }
}

#[test]
fn hidden_region_keeps_content_mounted_but_paused() {
    let mut latch = VisibilityLatch::new();
    latch.observe(true);
    // Resized to zero area reports as not intersecting
    latch.observe(false);
    assert!(latch.should_mount());
    assert!(!latch.should_animate());
}

#[test]
fn region_that_never_enters_viewport_never_mounts() {
    let mut latch = VisibilityLatch::new();
    for _ in 0..100 {
        assert_eq!(latch.observe(false), LatchEvent::Unchanged);
    }
    assert!(!latch.has_ever_intersected);
    assert!(!latch.should_mount());
}

#[test]
fn fail_open_latch_is_always_visible() {
    let latch = VisibilityLatch::fail_open();
    assert!(latch.should_mount());
    assert!(latch.should_animate());
}

#[test]
fn gate_presets_and_margin_css() {
    assert_eq!(GateOptions::LAZY.threshold, 0.1);
    assert_eq!(GateOptions::LAZY.root_margin_css(), "50px");
    assert_eq!(GateOptions::EAGER.threshold, 0.05);
    assert_eq!(GateOptions::EAGER.root_margin_css(), "100px");
    assert_eq!(GateOptions::from_attr("lazy"), GateOptions::LAZY);
    assert_eq!(GateOptions::from_attr(""), GateOptions::EAGER);
    assert_eq!(GateOptions::from_attr("anything"), GateOptions::default());
}

#[test]
fn registry_regions_observe_independently() {
    let mut reg = RegionRegistry::new();
    reg.register("hero");
    reg.register("skills");
    reg.register("contact");

    assert_eq!(reg.observe("hero", true), LatchEvent::Latched);
    assert_eq!(reg.mounted_count(), 1);
    assert_eq!(reg.animating_count(), 1);
    assert!(!reg.latch("skills").unwrap().has_ever_intersected);

    assert_eq!(reg.observe("skills", true), LatchEvent::Latched);
    assert_eq!(reg.observe("hero", false), LatchEvent::Hidden);
    assert_eq!(reg.mounted_count(), 2);
    assert_eq!(reg.animating_count(), 1);
    assert_eq!(reg.latch("contact"), Some(VisibilityLatch::new()));
    assert_eq!(reg.len(), 3);
}

#[test]
fn registry_reregistering_keeps_latch() {
    let mut reg = RegionRegistry::new();
    reg.register("projects");
    reg.observe("projects", true);
    reg.register("projects");
    assert!(reg.latch("projects").unwrap().has_ever_intersected);
}

#[test]
fn registry_fail_open_region_counts_as_mounted() {
    let mut reg = RegionRegistry::new();
    reg.register_fail_open("about");
    assert_eq!(reg.mounted_count(), 1);
    assert_eq!(reg.animating_count(), 1);
    assert!(reg.latch("missing").is_none());
}
