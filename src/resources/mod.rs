use std::collections::HashMap;

use anyhow::Context;

use crate::data_structures::{
    geometry::Geometry,
    texture::{TextureAsset, TextureSettings},
};

/**
 * This module contains all logic for fetching textures and meshes from an
 * asset source and decoding them into CPU-side data structures.
 */
pub mod mesh;
pub mod texture;

/// Where asset bytes come from.
///
/// Paths are the full strings built by the catalog (base path included).
/// [`FileSource`] reads from disk on native targets, [`HttpSource`] fetches
/// relative to the page origin in the browser and [`MemorySource`] serves an
/// in-memory bundle.
pub trait AssetSource {
    fn fetch(&self, path: &str) -> impl Future<Output = anyhow::Result<Vec<u8>>>;
}

/// Reads assets from the local file system, relative to `root`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct FileSource {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AssetSource for FileSource {
    async fn fetch(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        let full_path = self.root.join(path);
        tokio::fs::read(&full_path)
            .await
            .with_context(|| format!("Could not read {}", full_path.display()))
    }
}

/// Fetches assets over HTTP relative to the origin of the hosting page.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct HttpSource;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().context("No window available to resolve asset urls")?;
    let origin = window
        .location()
        .origin()
        .map_err(|e| anyhow::anyhow!("Could not read page origin: {e:?}"))?;
    let base = reqwest::Url::parse(&format!("{}/", origin))?;
    Ok(base.join(file_name)?)
}

#[cfg(target_arch = "wasm32")]
impl AssetSource for HttpSource {
    async fn fetch(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        let url = format_url(path)?;
        let response = reqwest::get(url.clone())
            .await?
            .error_for_status()
            .with_context(|| format!("Request for {url} failed"))?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// The source matching the compilation target.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformSource = FileSource;
#[cfg(target_arch = "wasm32")]
pub type PlatformSource = HttpSource;

/// Serves assets from memory, e.g. bytes pulled in with `include_bytes!`.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), bytes.into());
    }

    pub fn with(mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl AssetSource for MemorySource {
    async fn fetch(&self, path: &str) -> anyhow::Result<Vec<u8>> {
        self.files
            .get(path)
            .cloned()
            .with_context(|| format!("No asset registered at {path}"))
    }
}

pub async fn load_binary<S: AssetSource>(source: &S, file_name: &str) -> anyhow::Result<Vec<u8>> {
    source.fetch(file_name).await
}

pub async fn load_string<S: AssetSource>(source: &S, file_name: &str) -> anyhow::Result<String> {
    let data = source.fetch(file_name).await?;
    String::from_utf8(data).with_context(|| format!("{file_name} is not valid UTF-8"))
}

/// Fetch and decode a texture, attaching the sampling settings it was requested with.
pub async fn load_texture<S: AssetSource>(
    source: &S,
    name: &str,
    file_name: &str,
    settings: TextureSettings,
) -> anyhow::Result<TextureAsset> {
    let data = load_binary(source, file_name).await?;
    let image = texture::decode_image(&data, file_name)?;
    Ok(TextureAsset::new(name, image.to_rgba8(), settings))
}

/// Fetch an OBJ file and keep the geometry of its first object.
pub async fn load_obj_geometry<S: AssetSource>(
    source: &S,
    name: &str,
    file_name: &str,
) -> anyhow::Result<Geometry> {
    let obj_text = load_string(source, file_name).await?;
    let models = mesh::parse_obj(&obj_text)
        .await
        .with_context(|| format!("Could not parse {file_name}"))?;
    let first = match models.first() {
        Some(model) => model,
        None => anyhow::bail!("{file_name} contains no object"),
    };
    if models.len() > 1 {
        log::debug!(
            "{file_name} contains {} objects, only {} is used",
            models.len(),
            first.name
        );
    }
    mesh::geometry_from_obj(name, first).with_context(|| format!("Invalid mesh in {file_name}"))
}
