use super::helpers;
use folio_core::{
    lights_at, project, shadow_steps, OrbField, QualityProfile, MAX_LIGHTS, MAX_ORBS,
};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct OrbPacked {
    pub(crate) center_radius: [f32; 4],
    pub(crate) color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BackdropUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) orb_count: u32,
    pub(crate) light_count: u32,
    pub(crate) shadow_steps: u32,
    pub(crate) antialias: u32,
    pub(crate) _pad: u32,
    pub(crate) orbs: [OrbPacked; MAX_ORBS],
    pub(crate) lights: [[f32; 4]; MAX_LIGHTS],
}

// Light height above the orb plane, in height-normalized units
const LIGHT_HEIGHT: f32 = 0.6;

impl BackdropUniforms {
    /// Projects the scene at time `t` into shader-ready form. Orbs are sorted
    /// far to near so the shader can composite in order.
    pub(crate) fn build(
        field: &OrbField,
        profile: &QualityProfile,
        t: f32,
        width: u32,
        height: u32,
    ) -> Self {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        let mut projected: Vec<_> = field
            .orbs()
            .iter()
            .filter_map(|orb| project(orb.position_at(t), orb.radius, aspect).map(|s| (s, orb)))
            .take(MAX_ORBS)
            .collect();
        projected.sort_by(|a, b| b.0.depth.total_cmp(&a.0.depth));

        let mut orbs = [OrbPacked::default(); MAX_ORBS];
        for (slot, (screen, orb)) in orbs.iter_mut().zip(&projected) {
            *slot = OrbPacked {
                center_radius: [screen.center.x, screen.center.y, screen.radius, orb.distort],
                color: orb.color.to_array(),
            };
        }

        let mut lights = [[0.0; 4]; MAX_LIGHTS];
        let mut light_count = 0;
        for (slot, light) in lights.iter_mut().zip(lights_at(profile.max_lights, t)) {
            if let Some(screen) = project(light.truncate(), 0.0, aspect) {
                *slot = [screen.center.x, screen.center.y, LIGHT_HEIGHT, light.w];
                light_count += 1;
            }
        }

        Self {
            resolution: [width as f32, height as f32],
            time: t,
            orb_count: projected.len() as u32,
            light_count,
            shadow_steps: shadow_steps(profile.shadow_map_size),
            antialias: profile.antialias as u32,
            _pad: 0,
            orbs,
            lights,
        }
    }
}

pub(crate) struct OrbsResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

pub(crate) fn create_orbs_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> OrbsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("backdrop_shader"),
        source: wgpu::ShaderSource::Wgsl(super::BACKDROP_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("backdrop_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("backdrop_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    // Shader output is already premultiplied
    let pipeline = helpers::make_fullscreen_pipeline(
        device,
        &pl,
        &shader,
        "fs_backdrop",
        color_format,
        Some(wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING),
    );
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("backdrop_uniforms"),
        size: std::mem::size_of::<BackdropUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("backdrop_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });

    OrbsResources {
        pipeline,
        uniform_buffer,
        bind_group,
    }
}
