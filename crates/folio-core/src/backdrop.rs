//! Scene description for the decorative animated backdrops.
//!
//! The backdrop is a handful of softly distorted orbs floating in front of a
//! perspective camera, lit by a few moving point lights. Everything here is
//! plain math so layout and projection can be tested off the GPU.

use crate::quality::{GeometryDetail, QualityProfile};
use glam::{Vec2, Vec3, Vec4};
use rand::prelude::*;
use smallvec::SmallVec;

pub const MAX_ORBS: usize = 8;
pub const MAX_LIGHTS: usize = 4;

// Camera (matches the page's three-quarter framing: z = 5, 50° fov)
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;
const NEAR_PLANE: f32 = 0.1;

// Brand palette, linear-ish RGB
pub const PALETTE: [[f32; 3]; 4] = [
    [0.027, 0.059, 0.169], // #070F2B
    [0.106, 0.102, 0.333], // #1B1A55
    [0.325, 0.361, 0.569], // #535C91
    [0.573, 0.565, 0.765], // #9290C3
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orb {
    pub anchor: Vec3,
    pub radius: f32,
    pub color: Vec4,
    pub phase: f32,
    pub float_speed: f32,
    pub float_amp: f32,
    /// Surface wobble amount, 0..1
    pub distort: f32,
}

impl Orb {
    /// Bobbing motion around the anchor.
    pub fn position_at(&self, t: f32) -> Vec3 {
        let s = t * self.float_speed + self.phase;
        self.anchor
            + Vec3::new(
                (s * 0.5).cos() * self.float_amp * 0.4,
                s.sin() * self.float_amp,
                0.0,
            )
    }
}

pub fn orb_count(detail: GeometryDetail) -> usize {
    match detail {
        GeometryDetail::Low => 3,
        GeometryDetail::Medium => 5,
        GeometryDetail::High => MAX_ORBS,
    }
}

/// Soft-shadow blur taps derived from the profile's shadow resolution.
pub fn shadow_steps(shadow_map_size: u32) -> u32 {
    (shadow_map_size / 64).clamp(4, 16)
}

#[derive(Clone, Debug)]
pub struct OrbField {
    orbs: SmallVec<[Orb; MAX_ORBS]>,
}

impl OrbField {
    /// Same `detail` and `seed` always produce the same layout.
    pub fn generate(detail: GeometryDetail, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = orb_count(detail);
        let orbs = (0..n)
            .map(|i| {
                // Spread anchors across the frame, one horizontal slot each
                let slot = (i as f32 + 0.5) / n as f32;
                let x = (slot * 2.0 - 1.0) * 2.6 + rng.gen_range(-0.3..0.3);
                let y = rng.gen_range(-1.4..1.4);
                let z = rng.gen_range(-2.0..0.5);
                let rgb = PALETTE[rng.gen_range(1..PALETTE.len())];
                Orb {
                    anchor: Vec3::new(x, y, z),
                    radius: rng.gen_range(0.35..0.9),
                    color: Vec4::new(rgb[0], rgb[1], rgb[2], rng.gen_range(0.25..0.55)),
                    phase: rng.gen_range(0.0..std::f32::consts::TAU),
                    float_speed: rng.gen_range(0.4..1.1),
                    float_amp: rng.gen_range(0.1..0.3),
                    distort: rng.gen_range(0.1..0.4),
                }
            })
            .collect();
        Self { orbs }
    }

    pub fn for_profile(profile: &QualityProfile, seed: u64) -> Self {
        Self::generate(profile.geometry_detail, seed)
    }

    pub fn orbs(&self) -> &[Orb] {
        &self.orbs
    }

    pub fn len(&self) -> usize {
        self.orbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbs.is_empty()
    }
}

/// Point lights orbiting the scene; `w` holds the intensity.
pub fn lights_at(max_lights: u32, t: f32) -> SmallVec<[Vec4; MAX_LIGHTS]> {
    let n = (max_lights as usize).min(MAX_LIGHTS);
    (0..n)
        .map(|i| {
            let a = t * 0.3 + i as f32 * std::f32::consts::TAU / n.max(1) as f32;
            let intensity = if i == 0 { 1.0 } else { 0.6 / i as f32 };
            Vec4::new(a.cos() * 3.0, a.sin() * 2.0, 3.0, intensity)
        })
        .collect()
}

/// An orb projected to the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenOrb {
    /// Center in uv space, origin top-left.
    pub center: Vec2,
    /// Radius as a fraction of the canvas height.
    pub radius: f32,
    pub depth: f32,
}

/// Perspective projection from the fixed camera. `None` when the point is
/// behind the near plane or the aspect ratio is degenerate.
pub fn project(position: Vec3, radius: f32, aspect: f32) -> Option<ScreenOrb> {
    let depth = CAMERA_Z - position.z;
    if depth <= NEAR_PLANE || !aspect.is_finite() || aspect <= 0.0 {
        return None;
    }
    let focal = 1.0 / (CAMERA_FOV_DEG.to_radians() * 0.5).tan();
    let ndc_x = position.x * focal / depth / aspect;
    let ndc_y = position.y * focal / depth;
    Some(ScreenOrb {
        center: Vec2::new(ndc_x * 0.5 + 0.5, 0.5 - ndc_y * 0.5),
        radius: radius * focal / depth * 0.5,
        depth,
    })
}
