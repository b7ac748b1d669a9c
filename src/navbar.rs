//! Navbar wiring: scroll-driven visibility, in-page anchor scrolling and the
//! compact menu toggle.

use crate::constants::*;
use crate::dom;
use folio_core::{fragment_target, MobileMenu, NavbarState, NavbarTracker, Section};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_navbar(document: &web::Document) {
    let Some(nav) = document.get_element_by_id(NAVBAR_ID) else {
        log::warn!("[navbar] missing #{NAVBAR_ID}; skipping scroll tracking");
        return;
    };
    apply_state(&nav, NavbarState::ShownTransparent);

    let tracker = Rc::new(RefCell::new(NavbarTracker::new()));
    let frame_pending = Rc::new(Cell::new(false));

    // Evaluate once per animation frame, with the latest scroll position.
    let evaluate: Rc<Closure<dyn FnMut()>> = {
        let tracker = tracker.clone();
        let frame_pending = frame_pending.clone();
        let document = document.clone();
        Rc::new(Closure::wrap(Box::new(move || {
            frame_pending.set(false);
            let scroll_y = dom::scroll_y();
            let changed = tracker
                .borrow_mut()
                .on_scroll(scroll_y, || hero_bottom(&document, scroll_y));
            if let Some(state) = changed {
                apply_state(&nav, state);
            }
        }) as Box<dyn FnMut()>))
    };

    let Some(window) = web::window() else {
        return;
    };
    let request = {
        let evaluate = evaluate.clone();
        move || {
            if frame_pending.replace(true) {
                return;
            }
            let cb: &Closure<dyn FnMut()> = &evaluate;
            if let Some(w) = web::window() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    };
    request();
    dom::add_listener(&window, "scroll", move |_: web::Event| request());
}

/// Bottom edge of the hero banner in document coordinates.
fn hero_bottom(document: &web::Document, scroll_y: f64) -> Option<f64> {
    document
        .get_element_by_id(HERO_SECTION_ID)
        .map(|hero| hero.get_bounding_client_rect().bottom() + scroll_y)
}

fn apply_state(nav: &web::Element, state: NavbarState) {
    _ = nav.set_attribute(NAV_STATE_ATTR, state.as_str());
    dom::set_class(nav, NAV_OPAQUE_CLASS, state == NavbarState::ShownOpaque);
    dom::set_class(nav, NAV_HIDDEN_CLASS, !state.is_shown());
    log::debug!("[navbar] {}", state.as_str());
}

/// Smooth-scrolls to the element with `id`. Unknown ids are a no-op.
pub fn scroll_to_section(document: &web::Document, id: &str) -> bool {
    let Some(target) = document.get_element_by_id(id) else {
        log::debug!("[navbar] no section #{id}");
        return false;
    };
    match Section::from_id(id) {
        Some(section) => log::debug!("[navbar] scrolling to {}", section.label()),
        None => log::debug!("[navbar] scrolling to #{id}"),
    }
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

pub fn wire_anchor_links(document: &web::Document) {
    let menu = Rc::new(RefCell::new(MobileMenu::default()));
    wire_mobile_menu(document, &menu);

    for link in dom::query_all(document, SCROLL_LINK_SELECTOR) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        let Some(target) = fragment_target(&href).map(str::to_string) else {
            continue;
        };
        let document = document.clone();
        let menu = menu.clone();
        dom::add_listener(&link, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            scroll_to_section(&document, &target);
            if menu.borrow_mut().close() {
                render_menu(&document, false);
            }
        });
    }
}

fn wire_mobile_menu(document: &web::Document, menu: &Rc<RefCell<MobileMenu>>) {
    let menu = menu.clone();
    let doc = document.clone();
    dom::add_click_listener(document, MOBILE_MENU_TOGGLE_ID, move |_| {
        let open = menu.borrow_mut().toggle();
        render_menu(&doc, open);
    });
}

fn render_menu(document: &web::Document, open: bool) {
    if let Some(el) = document.get_element_by_id(MOBILE_MENU_ID) {
        dom::set_class(&el, MENU_OPEN_CLASS, open);
        _ = el.set_attribute("aria-hidden", if open { "false" } else { "true" });
    }
    if let Some(toggle) = document.get_element_by_id(MOBILE_MENU_TOGGLE_ID) {
        _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
        _ = toggle.set_attribute("aria-label", if open { "Close menu" } else { "Open menu" });
    }
}

/// Points the résumé link at the configured asset.
pub fn wire_resume_link(document: &web::Document, href: &str) {
    if let Some(link) = document.get_element_by_id(RESUME_LINK_ID) {
        _ = link.set_attribute("href", href);
        _ = link.set_attribute("download", "");
    }
}
