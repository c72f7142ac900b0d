use anyhow::*;
use fs_extra::copy_items;
use fs_extra::dir::CopyOptions;
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Rerun whenever the bundled textures or models change.
    println!("cargo:rerun-if-changed=assets/textures");
    println!("cargo:rerun-if-changed=assets/models");
    println!("cargo:rerun-if-env-changed=CITY_ASSETS_PATH");

    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let assets_src = manifest_dir.join("assets");
    if !assets_src.exists() {
        return Ok(());
    }

    let mut copy_options = CopyOptions::new();
    copy_options.overwrite = true;
    let paths_to_copy = vec![assets_src];
    copy_items(&paths_to_copy, &out_dir, &copy_options)?;

    // `AssetConfig::default` falls back to this bundle when no runtime path is given.
    let bundle = out_dir.join("assets");
    println!("cargo:rustc-env=CITY_ASSETS_BUNDLE={}/", bundle.display());

    Ok(())
}
