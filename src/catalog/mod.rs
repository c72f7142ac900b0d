//! The fixed list of assets the city scene needs.
//!
//! - `textures` enumerates every texture file and its sampling settings
//! - `models` enumerates every OBJ file plus the procedurally built geometry
//! - `materials` assembles the material recipes from loaded textures

pub mod materials;
pub mod models;
pub mod textures;

pub use materials::build_materials;
pub use models::{ModelRequest, model_requests, procedural_models};
pub use textures::{TextureRequest, texture_requests};

/// Zero-pad an asset index to two digits, `1` becomes `"01"`.
pub fn pad_number(num: usize) -> String {
    format!("{num:02}")
}

/// `"{prefix}01"` to `"{prefix}{count:02}"`.
pub(crate) fn numbered(prefix: &str, count: usize) -> impl Iterator<Item = String> + '_ {
    (1..=count).map(move |i| format!("{prefix}{}", pad_number(i)))
}
