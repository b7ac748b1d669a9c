// Host-side tests for the DOM contract constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_unique_and_selector_safe() {
    let ids = [
        NAVBAR_ID,
        MOBILE_MENU_ID,
        MOBILE_MENU_TOGGLE_ID,
        CONTACT_FORM_ID,
        CONTACT_NAME_ID,
        CONTACT_EMAIL_ID,
        CONTACT_MESSAGE_ID,
        CONTACT_SUBMIT_ID,
        CONTACT_STATUS_ID,
        RESUME_LINK_ID,
        PERF_OVERLAY_ID,
        SITE_CONFIG_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(
            a.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
            "id {a} needs escaping in selectors"
        );
        for b in &ids[i + 1..] {
            assert_ne!(a, b, "duplicate element id");
        }
    }
}

#[test]
fn hero_is_the_home_section() {
    assert_eq!(HERO_SECTION_ID, folio_core::Section::Home.id());
}

#[test]
fn attribute_names_are_data_attributes() {
    for attr in [NAV_STATE_ATTR, BACKDROP_ATTR, CONTACT_STATUS_ATTR] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
    assert_eq!(BACKDROP_SELECTOR, format!("[{BACKDROP_ATTR}]"));
}

#[test]
fn nav_classes_are_distinct() {
    assert_ne!(NAV_OPAQUE_CLASS, NAV_HIDDEN_CLASS);
    assert_ne!(NAV_OPAQUE_CLASS, MENU_OPEN_CLASS);
}

#[test]
fn unmasked_renderer_enum_matches_webgl() {
    // WEBGL_debug_renderer_info.UNMASKED_RENDERER_WEBGL
    assert_eq!(UNMASKED_RENDERER_WEBGL, 37446);
}
