#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_upload_loaded_assets() {
    use city_assets::{AssetConfig, AssetManager, LoadingManager, context::Context};
    use futures::executor::block_on;

    use crate::common::test_utils::{complete_source, seeded_rng};

    let config = AssetConfig::default().with_base_path("city/");
    let source = complete_source(&config);
    let mut manager = AssetManager::new(config);
    block_on(manager.load_with_rng(&source, &mut LoadingManager::new(), &mut seeded_rng()));

    let ctx = block_on(Context::new_headless()).expect("a GPU adapter is required for this test");
    let gpu = manager.upload(&ctx).expect("upload should succeed");

    assert_eq!(gpu.textures.len(), manager.textures().len());
    assert_eq!(gpu.meshes.len(), manager.models().len());
    assert_eq!(gpu.materials.len(), manager.materials().len());
    assert_eq!(gpu.meshes["smoke"].num_elements, 6);

    let ad = &gpu.materials["ads_01"];
    assert!(ad.cull_mode.is_none());
    assert_eq!(ad.uniform.flags[3], 0);
    assert!(!gpu.materials["smoke_02"].depth_write);
}
