//! Loader configuration.
//!
//! [`AssetConfig`] is a plain struct with public fields. Construct it with
//! [`AssetConfig::default`] or [`AssetConfig::from_env`] and tweak the fields in
//! code before handing it to [`crate::assets::AssetManager::new`].

use std::env;

/// Environment variable that overrides the asset root at runtime.
pub const ASSET_PATH_ENV: &str = "CITY_ASSETS_PATH";

const FALLBACK_BASE_PATH: &str = "assets/";

#[derive(Clone, Debug, PartialEq)]
pub struct AssetConfig {
    /// Prefix prepended to every `textures/...` and `models/...` path.
    pub base_path: String,
    /// Anisotropic filtering level of the repeating facade textures.
    pub texture_anisotropy: u16,
    pub building_windows_emissive_intensity: f32,
    pub ads_emissive_intensity: f32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            base_path: normalize_base_path(default_base_path()),
            texture_anisotropy: 8,
            building_windows_emissive_intensity: 1.5,
            ads_emissive_intensity: 0.2,
        }
    }
}

impl AssetConfig {
    /// Default configuration with `CITY_ASSETS_PATH` applied when it is set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match env::var(ASSET_PATH_ENV) {
            Ok(path) => {
                log::info!("Using asset path {path} from {ASSET_PATH_ENV}");
                config.with_base_path(&path)
            }
            Err(_) => config,
        }
    }

    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = normalize_base_path(base_path);
        self
    }

    /// Full path of a file below the base path, e.g. `resolve("textures/ground.jpg")`.
    pub fn resolve(&self, relative: &str) -> String {
        format!("{}{}", self.base_path, relative)
    }
}

/// The bundle copied by `build.rs` is a path on the build machine, so only
/// native builds can read from it. The browser fetches relative to the page.
#[cfg(not(target_arch = "wasm32"))]
fn default_base_path() -> &'static str {
    option_env!("CITY_ASSETS_BUNDLE").unwrap_or(FALLBACK_BASE_PATH)
}

#[cfg(target_arch = "wasm32")]
fn default_base_path() -> &'static str {
    FALLBACK_BASE_PATH
}

fn normalize_base_path(base_path: &str) -> String {
    if base_path.is_empty() || base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    }
}
