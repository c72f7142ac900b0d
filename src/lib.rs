//! city-assets
//!
//! Start-up asset loading for a night-time city driving scene. The crate
//! fetches a fixed catalog of textures and OBJ meshes, reports progress while
//! they arrive and assembles the Phong materials the scene renders with. It runs
//! natively (files via tokio) and in the browser (HTTP via reqwest).
//!
//! High-level modules
//! - `assets`: the `AssetManager` holding the texture, model and material mappings
//! - `catalog`: the hand-enumerated list of assets and material recipes
//! - `config`: paths and tunables of the loader
//! - `context`: GPU device/queue used to upload loaded assets
//! - `data_structures`: colours, textures, geometry and materials
//! - `loading`: the `LoadingManager` tracking progress and completion
//! - `resources`: asset sources and the texture/OBJ loaders
//!

pub mod assets;
pub mod catalog;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod loading;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use assets::{AssetManager, GpuAssets, LoadReport, spawn_load};
pub use config::AssetConfig;
pub use loading::LoadingManager;
pub use resources::{AssetSource, MemorySource, PlatformSource};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Install the platform logger: `env_logger` natively, the browser console on wasm.
///
/// Calling it more than once is harmless.
pub fn init_logger() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        // A logger is already installed if this fails, so it can report itself.
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            log::warn!("Could not initialize logger: {e}");
        }
    }
}

/// Browser entry point: load the catalog from the page origin and log the outcome.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn preload_city_assets() {
    init_logger();
    let manager = AssetManager::new(AssetConfig::default());
    let result = spawn_load(
        manager,
        PlatformSource::default(),
        LoadingManager::new(),
        |manager, report| {
            log::info!(
                "{} materials ready, {} assets failed",
                manager.materials().len(),
                report.failed.len()
            );
        },
    );
    if let Err(e) = result {
        log::error!("{e:#}");
    }
}
