//! Rendering parameters per device tier.

use crate::device::DeviceTier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryDetail {
    Low,
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualityProfile {
    pub pixel_ratio_cap: f64,
    pub shadow_map_size: u32,
    pub antialias: bool,
    pub max_lights: u32,
    pub geometry_detail: GeometryDetail,
    /// Ticks skipped between two rendered frames.
    pub frame_skip: u32,
}

const LOW: QualityProfile = QualityProfile {
    pixel_ratio_cap: 1.0,
    shadow_map_size: 256,
    antialias: false,
    max_lights: 2,
    geometry_detail: GeometryDetail::Low,
    frame_skip: 2,
};

const MEDIUM: QualityProfile = QualityProfile {
    pixel_ratio_cap: 1.5,
    shadow_map_size: 512,
    antialias: true,
    max_lights: 3,
    geometry_detail: GeometryDetail::Medium,
    frame_skip: 1,
};

const HIGH: QualityProfile = QualityProfile {
    pixel_ratio_cap: 2.0,
    shadow_map_size: 1024,
    antialias: true,
    max_lights: 4,
    geometry_detail: GeometryDetail::High,
    frame_skip: 0,
};

impl QualityProfile {
    pub fn for_tier(tier: DeviceTier) -> &'static QualityProfile {
        match tier {
            DeviceTier::Low => &LOW,
            DeviceTier::Medium => &MEDIUM,
            DeviceTier::High => &HIGH,
        }
    }

    /// Effective device pixel ratio for a backdrop canvas.
    pub fn pixel_ratio(&self, device_dpr: f64) -> f64 {
        if !device_dpr.is_finite() || device_dpr <= 0.0 {
            return 1.0;
        }
        device_dpr.min(self.pixel_ratio_cap)
    }
}

/// Renders one tick out of `skip + 1`.
#[derive(Clone, Copy, Debug)]
pub struct FrameSkipper {
    skip: u32,
    counter: u32,
}

impl FrameSkipper {
    pub fn new(skip: u32) -> Self {
        Self { skip, counter: 0 }
    }

    pub fn should_render(&mut self) -> bool {
        let render = self.counter == 0;
        self.counter = if self.counter >= self.skip {
            0
        } else {
            self.counter + 1
        };
        render
    }
}
