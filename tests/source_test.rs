use city_assets::{
    MemorySource,
    resources::{FileSource, load_binary, load_obj_geometry, load_string},
};
use futures::executor::block_on;

use crate::common::test_utils::TRIANGLE_OBJ;

mod common;

#[tokio::test]
async fn should_read_models_from_disk() {
    city_assets::init_logger();
    let root = std::env::temp_dir().join(format!("city-assets-{}", std::process::id()));
    tokio::fs::create_dir_all(root.join("models")).await.unwrap();
    tokio::fs::write(root.join("models/triangle.obj"), TRIANGLE_OBJ)
        .await
        .unwrap();

    let source = FileSource::new(&root);
    let text = load_string(&source, "models/triangle.obj").await.unwrap();
    assert_eq!(text, TRIANGLE_OBJ);
    let geometry = load_obj_geometry(&source, "triangle", "models/triangle.obj")
        .await
        .unwrap();
    assert_eq!(geometry.triangle_count(), 1);

    let missing = load_binary(&source, "models/missing.obj").await.unwrap_err();
    assert!(format!("{missing:#}").contains("missing.obj"));

    tokio::fs::remove_dir_all(&root).await.unwrap();
}

#[test]
fn should_reject_non_utf8_text() {
    let source = MemorySource::new().with("models/broken.obj", vec![0xff, 0xfe, 0x00]);
    assert_eq!(block_on(load_binary(&source, "models/broken.obj")).unwrap(), vec![0xff, 0xfe, 0x00]);
    let err = block_on(load_string(&source, "models/broken.obj")).unwrap_err();
    assert!(err.to_string().contains("models/broken.obj"));
}
