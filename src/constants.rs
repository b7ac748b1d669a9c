// DOM contract and browser-side tuning for the page runtime.
//
// Element ids and attribute names the static page shell must provide, plus
// the few constants that only make sense on the web side.

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const SCROLL_LINK_SELECTOR: &str = "a[data-scroll]";
pub const HERO_SECTION_ID: &str = "home";
pub const NAV_STATE_ATTR: &str = "data-nav-state";
pub const NAV_OPAQUE_CLASS: &str = "nav-opaque";
pub const NAV_HIDDEN_CLASS: &str = "nav-hidden";
pub const MENU_OPEN_CLASS: &str = "open";

// Backdrops
pub const BACKDROP_SELECTOR: &str = "[data-backdrop]";
pub const BACKDROP_ATTR: &str = "data-backdrop";
pub const BACKDROP_CANVAS_CLASS: &str = "backdrop-canvas";
pub const BACKDROP_SEED_BASE: u64 = 0x5EED_F011_0000_0000;

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const CONTACT_NAME_ID: &str = "contact-name";
pub const CONTACT_EMAIL_ID: &str = "contact-email";
pub const CONTACT_MESSAGE_ID: &str = "contact-message";
pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
pub const CONTACT_STATUS_ID: &str = "contact-status";
pub const CONTACT_STATUS_ATTR: &str = "data-status";

// Misc page elements
pub const RESUME_LINK_ID: &str = "resume-link";
pub const PERF_OVERLAY_ID: &str = "perf-overlay";
pub const SITE_CONFIG_ID: &str = "site-config";

// WebGL probe (WEBGL_debug_renderer_info)
pub const DEBUG_RENDERER_EXT: &str = "WEBGL_debug_renderer_info";
pub const UNMASKED_RENDERER_WEBGL: u32 = 0x9246;
