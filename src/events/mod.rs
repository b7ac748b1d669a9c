pub mod keyboard;

pub use keyboard::wire_perf_overlay;
