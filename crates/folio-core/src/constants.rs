// Shared tuning constants for the page runtime. Values in CSS pixels unless
// noted otherwise.

// Visibility gating presets
pub const LAZY_GATE_THRESHOLD: f64 = 0.1;
pub const LAZY_GATE_MARGIN_PX: f64 = 50.0;
pub const EAGER_GATE_THRESHOLD: f64 = 0.05;
pub const EAGER_GATE_MARGIN_PX: f64 = 100.0;

// Device classification
pub const DEFAULT_DEVICE_MEMORY_GB: f64 = 4.0; // navigator.deviceMemory fallback
pub const DEFAULT_LOGICAL_CORES: u32 = 4; // navigator.hardwareConcurrency fallback
pub const HIGH_TIER_MEMORY_GB: f64 = 8.0;
pub const HIGH_TIER_CORES: u32 = 8;
pub const MEDIUM_TIER_MEMORY_GB: f64 = 4.0;
pub const MEDIUM_TIER_CORES: u32 = 4;
// Lower-case substrings of renderer strings that rule out the high tier
pub const LOW_POWER_RENDERER_MARKERS: &[&str] = &["intel", "swiftshader", "llvmpipe"];

// Navbar
pub const NAVBAR_OPAQUE_THRESHOLD_PX: f64 = 50.0;
pub const SCROLL_NOISE_PX: f64 = 5.0;
pub const HERO_HIDE_BUFFER_PX: f64 = 64.0;

// Animation
pub const DEFAULT_BACKDROP_FPS: f64 = 30.0;
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // clamp after tab switches / long pauses

// Contact form
pub const STATUS_RESET_DELAY_MS: u32 = 5_000;
pub const DEFAULT_CONTACT_ENDPOINT: &str = "/api/contact";
pub const DEFAULT_RECIPIENT_NAME: &str = "Portfolio Owner";
pub const DEFAULT_RESUME_HREF: &str = "/resume.pdf";

// Performance monitor
pub const FPS_WINDOW_MS: f64 = 1_000.0;
pub const FPS_INITIAL: u32 = 60;
pub const FPS_GOOD: u32 = 55;
pub const FPS_FAIR: u32 = 30;
pub const HEAP_POLL_MS: u32 = 5_000;
