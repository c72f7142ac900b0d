//! Textures: sampling settings, decoded CPU images and their GPU counterpart.
//!
//! A [`TextureAsset`] is what the loader produces. It holds the decoded RGBA8
//! pixels together with the [`TextureSettings`] the catalog asked for, and is
//! shared through an `Arc` between the texture mapping and every material that
//! samples it. [`Texture`] is the uploaded form: a WGPU texture, a view and a
//! sampler configured from those settings.

use anyhow::*;

/// How a texture is projected onto geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mapping {
    /// Regular UV mapping.
    #[default]
    Uv,
    /// Latitude/longitude panorama sampled by reflection direction (sky, env maps).
    EquirectangularReflection,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    Nearest,
    #[default]
    Linear,
}

impl From<Filter> for wgpu::FilterMode {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::Nearest => wgpu::FilterMode::Nearest,
            Filter::Linear => wgpu::FilterMode::Linear,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Wrap {
    #[default]
    ClampToEdge,
    Repeat,
    MirroredRepeat,
}

impl From<Wrap> for wgpu::AddressMode {
    fn from(wrap: Wrap) -> Self {
        match wrap {
            Wrap::ClampToEdge => wgpu::AddressMode::ClampToEdge,
            Wrap::Repeat => wgpu::AddressMode::Repeat,
            Wrap::MirroredRepeat => wgpu::AddressMode::MirrorRepeat,
        }
    }
}

/// Sampling parameters attached to a texture at load time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureSettings {
    pub mapping: Mapping,
    pub mag_filter: Filter,
    pub min_filter: Filter,
    pub wrap_s: Wrap,
    pub wrap_t: Wrap,
    pub anisotropy: u16,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            mapping: Mapping::Uv,
            mag_filter: Filter::Linear,
            min_filter: Filter::Linear,
            wrap_s: Wrap::ClampToEdge,
            wrap_t: Wrap::ClampToEdge,
            anisotropy: 1,
        }
    }
}

impl TextureSettings {
    /// Panorama used as sky dome or environment reflection.
    pub fn equirectangular() -> Self {
        Self {
            mapping: Mapping::EquirectangularReflection,
            mag_filter: Filter::Linear,
            ..Default::default()
        }
    }

    /// Tiled facade texture with anisotropic filtering.
    pub fn repeating(anisotropy: u16) -> Self {
        Self {
            wrap_s: Wrap::Repeat,
            wrap_t: Wrap::Repeat,
            anisotropy: anisotropy.max(1),
            ..Default::default()
        }
    }

    /// WGPU only accepts anisotropy together with linear filtering.
    fn effective_anisotropy(&self) -> u16 {
        if self.mag_filter == Filter::Linear && self.min_filter == Filter::Linear {
            self.anisotropy.max(1)
        } else {
            1
        }
    }

    pub fn sampler_descriptor<'a>(&self, label: Option<&'a str>) -> wgpu::SamplerDescriptor<'a> {
        wgpu::SamplerDescriptor {
            label,
            address_mode_u: self.wrap_s.into(),
            address_mode_v: self.wrap_t.into(),
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: self.mag_filter.into(),
            min_filter: self.min_filter.into(),
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            anisotropy_clamp: self.effective_anisotropy(),
            ..Default::default()
        }
    }
}

/// A decoded texture waiting to be uploaded.
#[derive(Clone, Debug)]
pub struct TextureAsset {
    pub name: String,
    pub image: image::RgbaImage,
    pub settings: TextureSettings,
}

impl TextureAsset {
    pub fn new(name: &str, image: image::RgbaImage, settings: TextureSettings) -> Self {
        Self {
            name: name.to_string(),
            image,
            settings,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// A GPU texture with its view and sampler.
#[derive(Clone, Debug)]
pub struct Texture {
    #[allow(unused)]
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Upload a decoded texture.
    ///
    /// Colour maps are stored as sRGB. Maps that carry data rather than colour
    /// (alpha, specular, bump) look the same either way for the scene's
    /// greyscale masks, so the distinction is not tracked per texture.
    pub fn from_asset(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        asset: &TextureAsset,
    ) -> Result<Self> {
        let (width, height) = asset.image.dimensions();
        if width == 0 || height == 0 {
            bail!("Texture {} has no pixels", asset.name);
        }
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(asset.name.as_str()),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            &asset.image,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&asset.settings.sampler_descriptor(Some(asset.name.as_str())));

        Ok(Self {
            texture,
            view,
            sampler,
        })
    }

    /// A 1x1 texture of a single colour, bound wherever a material has no map.
    pub fn create_solid(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        rgba: [u8; 4],
        label: &str,
    ) -> Texture {
        let size = wgpu::Extent3d {
            width: 1,
            height: 1,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            &rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&TextureSettings::default().sampler_descriptor(Some(label)));
        Texture {
            texture,
            view,
            sampler,
        }
    }
}
