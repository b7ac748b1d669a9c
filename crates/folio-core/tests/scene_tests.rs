// Tests for backdrop scene layout, projection and page sections.

use folio_core::*;
use glam::Vec3;

#[test]
fn orb_field_is_deterministic_per_seed() {
    let a = OrbField::generate(GeometryDetail::High, 7);
    let b = OrbField::generate(GeometryDetail::High, 7);
    let c = OrbField::generate(GeometryDetail::High, 8);
    assert_eq!(a.orbs(), b.orbs());
    assert_ne!(a.orbs(), c.orbs());
}

#[test]
fn orb_count_follows_geometry_detail() {
    for tier in DeviceTier::ALL {
        let profile = QualityProfile::for_tier(tier);
        let field = OrbField::for_profile(profile, 1);
        assert_eq!(field.len(), orb_count(profile.geometry_detail), "{tier}");
        assert!(field.len() <= MAX_ORBS);
        assert!(!field.is_empty());
    }
    assert!(orb_count(GeometryDetail::Low) < orb_count(GeometryDetail::High));
}

#[test]
fn orbs_stay_in_front_of_the_camera() {
    let field = OrbField::generate(GeometryDetail::High, 42);
    for orb in field.orbs() {
        assert!(orb.radius > 0.0);
        assert!((0.0..=1.0).contains(&orb.color.w));
        for t in [0.0, 1.5, 30.0, 600.0] {
            let p = orb.position_at(t);
            assert!(p.z < CAMERA_Z, "orb behind camera at t={t}");
            assert!(project(p, orb.radius, 16.0 / 9.0).is_some());
        }
    }
}

#[test]
fn projection_centers_origin() {
    let s = project(Vec3::ZERO, 1.0, 1.0).expect("in front of camera");
    assert!((s.center.x - 0.5).abs() < 1e-6);
    assert!((s.center.y - 0.5).abs() < 1e-6);
    assert_eq!(s.depth, CAMERA_Z);
}

#[test]
fn nearer_orbs_look_bigger_and_up_is_up() {
    let far = project(Vec3::new(0.0, 0.0, -2.0), 0.5, 1.0).expect("visible");
    let near = project(Vec3::new(0.0, 0.0, 2.0), 0.5, 1.0).expect("visible");
    assert!(near.radius > far.radius);
    let high = project(Vec3::new(0.0, 1.0, 0.0), 0.5, 1.0).expect("visible");
    assert!(high.center.y < 0.5, "uv origin is top-left");
}

#[test]
fn projection_rejects_degenerate_cases() {
    assert!(project(Vec3::new(0.0, 0.0, CAMERA_Z), 1.0, 1.0).is_none());
    assert!(project(Vec3::ZERO, 1.0, 0.0).is_none());
    assert!(project(Vec3::ZERO, 1.0, f32::NAN).is_none());
}

#[test]
fn light_count_is_bounded() {
    assert_eq!(lights_at(2, 0.0).len(), 2);
    assert_eq!(lights_at(4, 3.0).len(), 4);
    assert_eq!(lights_at(16, 3.0).len(), MAX_LIGHTS);
    assert!(lights_at(0, 1.0).is_empty());
}

#[test]
fn shadow_steps_scale_with_shadow_map() {
    assert_eq!(shadow_steps(256), 4);
    assert_eq!(shadow_steps(512), 8);
    assert_eq!(shadow_steps(1024), 16);
    assert_eq!(shadow_steps(8192), 16);
    assert_eq!(shadow_steps(0), 4);
}

#[test]
fn sections_resolve_from_links() {
    assert_eq!(Section::from_href("#projects"), Some(Section::Projects));
    assert_eq!(
        Section::from_href("https://example.com/#about"),
        Some(Section::About)
    );
    assert_eq!(Section::from_href("#nowhere"), None);
    assert_eq!(Section::from_href("projects"), None);
    for s in Section::ALL {
        assert_eq!(Section::from_href(&s.href()), Some(s));
    }
}

#[test]
fn nav_lists_every_section_but_experience() {
    assert_eq!(Section::NAV.len(), Section::ALL.len() - 1);
    assert!(!Section::NAV.contains(&Section::Experience));
    assert_eq!(Section::NAV[0].label(), "Home");
}

#[test]
fn fragment_targets() {
    assert_eq!(fragment_target("#contact"), Some("contact"));
    assert_eq!(fragment_target("#"), None);
    assert_eq!(fragment_target("/resume.pdf"), None);
}
