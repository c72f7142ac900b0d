//! Phong materials and their GPU bindings.
//!
//! [`PhongMaterial`] is the CPU description assembled by the catalog. Texture
//! slots hold the same `Arc<TextureAsset>` handles as the texture mapping, so a
//! material never owns a copy of its images. [`GpuMaterial`] packs the scalar
//! parameters into a [`MaterialUniform`] and binds the colour, emissive and
//! alpha maps according to [`phong_layout`].

use std::{collections::HashMap, sync::Arc};

use anyhow::*;
use wgpu::util::DeviceExt;

use crate::data_structures::{
    color::Color,
    texture::{Texture, TextureAsset},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blending {
    #[default]
    Normal,
    /// `src * alpha + dst`, used for glowing billboards and light cones.
    Additive,
}

impl Blending {
    pub fn blend_state(self) -> wgpu::BlendState {
        match self {
            Blending::Normal => wgpu::BlendState::ALPHA_BLENDING,
            Blending::Additive => wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
            },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

impl Side {
    /// Face to cull when drawing with counter-clockwise front faces.
    pub fn cull_mode(self) -> Option<wgpu::Face> {
        match self {
            Side::Front => Some(wgpu::Face::Back),
            Side::Back => Some(wgpu::Face::Front),
            Side::Double => None,
        }
    }
}

pub type TextureHandle = Arc<TextureAsset>;

#[derive(Clone, Debug)]
pub struct PhongMaterial {
    pub name: String,
    pub color: Color,
    pub map: Option<TextureHandle>,
    pub emissive: Color,
    pub emissive_map: Option<TextureHandle>,
    pub emissive_intensity: f32,
    pub specular: Color,
    pub specular_map: Option<TextureHandle>,
    pub shininess: f32,
    pub env_map: Option<TextureHandle>,
    pub bump_map: Option<TextureHandle>,
    pub bump_scale: f32,
    pub alpha_map: Option<TextureHandle>,
    pub blending: Blending,
    pub side: Side,
    pub fog: bool,
    pub depth_write: bool,
    pub transparent: bool,
}

impl PhongMaterial {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            color: Color::WHITE,
            map: None,
            emissive: Color::BLACK,
            emissive_map: None,
            emissive_intensity: 1.0,
            specular: Color::from_hex(0x111111),
            specular_map: None,
            shininess: 30.0,
            env_map: None,
            bump_map: None,
            bump_scale: 1.0,
            alpha_map: None,
            blending: Blending::Normal,
            side: Side::Front,
            fog: true,
            depth_write: true,
            transparent: false,
        }
    }

    /// Every texture this material samples, in slot order, without duplicates.
    pub fn textures(&self) -> Vec<&TextureHandle> {
        let slots = [
            &self.map,
            &self.emissive_map,
            &self.specular_map,
            &self.env_map,
            &self.bump_map,
            &self.alpha_map,
        ];
        let mut textures: Vec<&TextureHandle> = Vec::new();
        for texture in slots.into_iter().flatten() {
            if !textures.iter().any(|t| Arc::ptr_eq(t, texture)) {
                textures.push(texture);
            }
        }
        textures
    }

    pub fn uniform(&self) -> MaterialUniform {
        let flag = |slot: &Option<TextureHandle>| slot.is_some() as u32;
        MaterialUniform {
            color: self.color.to_array_with(1.0),
            emissive: self.emissive.to_array_with(self.emissive_intensity),
            specular: self.specular.to_array_with(self.shininess),
            params: [self.bump_scale, 0.0, 0.0, 0.0],
            flags: [
                flag(&self.map),
                flag(&self.emissive_map),
                flag(&self.alpha_map),
                self.fog as u32,
            ],
        }
    }
}

/// Scalar material parameters as laid out in the shader.
///
/// `emissive.w` is the emissive intensity, `specular.w` the shininess and
/// `params.x` the bump scale. `flags` marks bound maps (colour, emissive,
/// alpha) and whether fog applies.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub color: [f32; 4],
    pub emissive: [f32; 4],
    pub specular: [f32; 4],
    pub params: [f32; 4],
    pub flags: [u32; 4],
}

pub fn phong_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    let texture = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    };
    let sampler = |binding| wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    };
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            texture(0),
            sampler(1),
            texture(2),
            sampler(3),
            texture(4),
            sampler(5),
            wgpu::BindGroupLayoutEntry {
                binding: 6,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
        label: Some("Phong material bind group layout"),
    })
}

#[derive(Debug)]
pub struct GpuMaterial {
    pub name: String,
    pub uniform: MaterialUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub blend_state: wgpu::BlendState,
    pub cull_mode: Option<wgpu::Face>,
    pub depth_write: bool,
}

impl GpuMaterial {
    /// Bind a material against already uploaded textures.
    ///
    /// `textures` is keyed by texture name; `fallback` is bound to every empty
    /// slot. A slot whose texture was never uploaded is an error.
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        material: &PhongMaterial,
        textures: &HashMap<String, Texture>,
        fallback: &Texture,
    ) -> Result<Self> {
        let resolve = |slot: &Option<TextureHandle>| {
            match slot {
                Some(handle) => textures.get(&handle.name).with_context(|| {
                    format!(
                        "Material {} samples texture {} which was not uploaded",
                        material.name, handle.name
                    )
                }),
                None => Ok(fallback),
            }
        };
        let map = resolve(&material.map)?;
        let emissive_map = resolve(&material.emissive_map)?;
        let alpha_map = resolve(&material.alpha_map)?;

        let uniform = material.uniform();
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} material uniform", material.name)),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&map.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&map.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&emissive_map.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&emissive_map.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::TextureView(&alpha_map.view),
                },
                wgpu::BindGroupEntry {
                    binding: 5,
                    resource: wgpu::BindingResource::Sampler(&alpha_map.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 6,
                    resource: buffer.as_entire_binding(),
                },
            ],
            label: Some(&material.name),
        });

        Ok(Self {
            name: material.name.clone(),
            uniform,
            buffer,
            bind_group,
            blend_state: material.blending.blend_state(),
            cull_mode: material.side.cull_mode(),
            depth_write: material.depth_write,
        })
    }
}
