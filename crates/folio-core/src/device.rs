//! Coarse device capability classification used to scale animation detail.

use crate::constants::*;
use std::fmt;

/// What could be learned about the graphics stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RendererInfo {
    /// No WebGL context could be created at all.
    NoContext,
    /// A context exists but the renderer string is masked.
    Unknown,
    Named(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeviceSignals {
    pub memory_gb: Option<f64>,
    pub cores: Option<u32>,
    pub renderer: RendererInfo,
}

impl Default for DeviceSignals {
    fn default() -> Self {
        Self {
            memory_gb: None,
            cores: None,
            renderer: RendererInfo::Unknown,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceTier {
    Low,
    Medium,
    High,
}

impl DeviceTier {
    pub const ALL: [DeviceTier; 3] = [DeviceTier::Low, DeviceTier::Medium, DeviceTier::High];

    pub fn classify(signals: &DeviceSignals) -> DeviceTier {
        let renderer_ok = match &signals.renderer {
            RendererInfo::NoContext => return DeviceTier::Low,
            RendererInfo::Unknown => true,
            RendererInfo::Named(name) => !is_low_power_renderer(name),
        };
        let memory = signals
            .memory_gb
            .filter(|m| m.is_finite() && *m > 0.0)
            .unwrap_or(DEFAULT_DEVICE_MEMORY_GB);
        let cores = signals
            .cores
            .filter(|c| *c > 0)
            .unwrap_or(DEFAULT_LOGICAL_CORES);

        if memory >= HIGH_TIER_MEMORY_GB && cores >= HIGH_TIER_CORES && renderer_ok {
            DeviceTier::High
        } else if memory >= MEDIUM_TIER_MEMORY_GB && cores >= MEDIUM_TIER_CORES {
            DeviceTier::Medium
        } else {
            DeviceTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceTier::Low => "low",
            DeviceTier::Medium => "medium",
            DeviceTier::High => "high",
        }
    }
}

impl fmt::Display for DeviceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// True when the renderer string names an integrated or software GPU.
pub fn is_low_power_renderer(renderer: &str) -> bool {
    let lower = renderer.to_ascii_lowercase();
    LOW_POWER_RENDERER_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}
