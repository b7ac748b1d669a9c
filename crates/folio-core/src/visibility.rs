//! Intersection latch for decorative regions.
//!
//! A region mounts its expensive content once it has been near the viewport
//! at least once, and pauses per-frame work while it is off-screen. The latch
//! itself is platform-free; the web front-end feeds it intersection entries.

use crate::constants::*;
use fnv::FnvHashMap;

/// Observation parameters for one region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateOptions {
    /// Fraction of the region that must be visible to count as intersecting.
    pub threshold: f64,
    /// Distance around the viewport that already counts as "near".
    pub root_margin_px: f64,
}

impl GateOptions {
    pub const LAZY: GateOptions = GateOptions {
        threshold: LAZY_GATE_THRESHOLD,
        root_margin_px: LAZY_GATE_MARGIN_PX,
    };
    pub const EAGER: GateOptions = GateOptions {
        threshold: EAGER_GATE_THRESHOLD,
        root_margin_px: EAGER_GATE_MARGIN_PX,
    };

    /// Picks a preset from a `data-backdrop` attribute value.
    pub fn from_attr(value: &str) -> Self {
        match value.trim() {
            "lazy" => Self::LAZY,
            _ => Self::EAGER,
        }
    }

    /// Root margin in the form the observer API expects, e.g. `"50px"`.
    pub fn root_margin_css(&self) -> String {
        format!("{}px", self.root_margin_px.max(0.0))
    }
}

impl Default for GateOptions {
    fn default() -> Self {
        Self::EAGER
    }
}

/// What a single observation changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchEvent {
    /// First time the region became visible; mount now.
    Latched,
    /// Visible again after being hidden; resume animation.
    Shown,
    /// Left the viewport; pause animation but keep content.
    Hidden,
    Unchanged,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    pub is_intersecting: bool,
    pub has_ever_intersected: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch used when intersection observation is unavailable: content is
    /// treated as permanently visible.
    pub fn fail_open() -> Self {
        Self {
            is_intersecting: true,
            has_ever_intersected: true,
        }
    }

    pub fn observe(&mut self, intersecting: bool) -> LatchEvent {
        let was = self.is_intersecting;
        self.is_intersecting = intersecting;
        if intersecting && !self.has_ever_intersected {
            self.has_ever_intersected = true;
            return LatchEvent::Latched;
        }
        match (was, intersecting) {
            (false, true) => LatchEvent::Shown,
            (true, false) => LatchEvent::Hidden,
            _ => LatchEvent::Unchanged,
        }
    }

    #[inline]
    pub fn should_mount(&self) -> bool {
        self.has_ever_intersected
    }

    #[inline]
    pub fn should_animate(&self) -> bool {
        self.is_intersecting
    }
}

/// Independent latches keyed by region id.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    regions: FnvHashMap<String, VisibilityLatch>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a region with a fresh latch; re-registering keeps the
    /// existing latch so a remount can never un-latch it.
    pub fn register(&mut self, id: &str) {
        self.regions.entry(id.to_string()).or_default();
    }

    pub fn register_fail_open(&mut self, id: &str) {
        self.regions
            .insert(id.to_string(), VisibilityLatch::fail_open());
    }

    pub fn observe(&mut self, id: &str, intersecting: bool) -> LatchEvent {
        self.regions
            .entry(id.to_string())
            .or_default()
            .observe(intersecting)
    }

    pub fn latch(&self, id: &str) -> Option<VisibilityLatch> {
        self.regions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn mounted_count(&self) -> usize {
        self.regions.values().filter(|l| l.should_mount()).count()
    }

    pub fn animating_count(&self) -> usize {
        self.regions.values().filter(|l| l.should_animate()).count()
    }
}
