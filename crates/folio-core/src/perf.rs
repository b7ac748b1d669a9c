//! Frame-rate and heap readings for the performance overlay.

use crate::constants::*;

#[derive(Clone, Copy, Debug)]
pub struct FpsCounter {
    frames: u32,
    window_start_ms: Option<f64>,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frames: 0,
            window_start_ms: None,
            fps: FPS_INITIAL,
        }
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Counts one frame. Returns the new reading when a window closes.
    pub fn tick(&mut self, now_ms: f64) -> Option<u32> {
        let start = *self.window_start_ms.get_or_insert(now_ms);
        self.frames += 1;
        if now_ms - start >= FPS_WINDOW_MS {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start_ms = Some(now_ms);
            return Some(self.fps);
        }
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpsGrade {
    Good,
    Fair,
    Poor,
}

impl FpsGrade {
    pub fn from_fps(fps: u32) -> Self {
        if fps >= FPS_GOOD {
            FpsGrade::Good
        } else if fps >= FPS_FAIR {
            FpsGrade::Fair
        } else {
            FpsGrade::Poor
        }
    }

    /// CSS class used by the overlay.
    pub fn css_class(&self) -> &'static str {
        match self {
            FpsGrade::Good => "fps-good",
            FpsGrade::Fair => "fps-fair",
            FpsGrade::Poor => "fps-poor",
        }
    }
}

/// Snapshot of `performance.memory`, in bytes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeapUsage {
    pub used: f64,
    pub total: f64,
    pub limit: f64,
}

impl HeapUsage {
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Used JS Heap: {:.1} MB", to_mb(self.used)),
            format!("Total JS Heap: {:.1} MB", to_mb(self.total)),
            format!("Heap Limit: {:.1} MB", to_mb(self.limit)),
        ]
    }
}

#[inline]
fn to_mb(bytes: f64) -> f64 {
    bytes / 1024.0 / 1024.0
}

/// Ctrl+Shift+P toggles the overlay.
#[inline]
pub fn is_overlay_toggle(ctrl: bool, shift: bool, key: &str) -> bool {
    ctrl && shift && key.eq_ignore_ascii_case("p")
}
