//! Loads the city catalog from disk and prints what arrived.
//!
//! Run from a directory containing `assets/textures` and `assets/models`, or
//! point `CITY_ASSETS_PATH` at them.

use city_assets::{AssetConfig, AssetManager, LoadingManager, PlatformSource, spawn_load};

fn main() -> anyhow::Result<()> {
    city_assets::init_logger();

    let config = AssetConfig::from_env();
    log::info!("Loading city assets from {}", config.base_path);

    let loading = LoadingManager::new()
        .on_progress(|url, loaded, total| log::debug!("[{loaded}/{total}] {url}"))
        .on_load(|| log::info!("Scene can start"));

    spawn_load(
        AssetManager::new(config),
        PlatformSource::default(),
        loading,
        |manager, report| {
            println!(
                "{} textures, {} models, {} materials in {:?}",
                manager.textures().len(),
                manager.models().len(),
                manager.materials().len(),
                report.elapsed
            );
            for path in &report.failed {
                println!("missing: {path}");
            }
        },
    )
}
