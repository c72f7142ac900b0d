use city_assets::{
    MemorySource,
    data_structures::geometry::{Geometry, ModelVertex, compute_tangents},
    resources::{load_obj_geometry, mesh::parse_obj},
};
use futures::executor::block_on;

use crate::common::test_utils::{QUAD_OBJ, TRIANGLE_OBJ};

mod common;

#[test]
fn should_build_plane_facing_up_z() {
    let plane = Geometry::plane("smoke", 64.0, 32.0);
    assert_eq!(plane.vertices.len(), 4);
    assert_eq!(plane.indices, vec![0, 2, 1, 2, 3, 1]);
    assert_eq!(plane.bounds(), Some(([-32.0, -16.0, 0.0], [32.0, 16.0, 0.0])));
    for vertex in &plane.vertices {
        assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
        // Tangents follow +U, which runs along +X.
        assert!(vertex.tangent[0] > 0.0);
        assert_eq!(vertex.tangent[1], 0.0);
    }
}

#[test]
fn should_flip_v_and_fill_tangents_from_obj() {
    let source = MemorySource::new().with("models/triangle.obj", TRIANGLE_OBJ);
    let geometry = block_on(load_obj_geometry(&source, "triangle", "models/triangle.obj"))
        .expect("triangle should load");

    assert_eq!(geometry.name, "triangle");
    assert_eq!(geometry.vertices.len(), 3);
    assert_eq!(geometry.indices.len(), 3);
    assert_eq!(geometry.vertices[0].tex_coords, [0.0, 1.0]);
    assert_eq!(geometry.vertices[2].tex_coords, [0.0, 0.0]);
    for vertex in &geometry.vertices {
        assert_eq!(vertex.normal, [0.0, 0.0, 1.0]);
        assert!(vertex.tangent.iter().all(|c| c.is_finite()));
        assert!(vertex.tangent != [0.0; 3]);
    }
}

#[test]
fn should_triangulate_polygons() {
    let models = block_on(parse_obj(QUAD_OBJ)).expect("quad should parse");
    assert_eq!(models.len(), 1);
    assert_eq!(models[0].mesh.indices.len(), 6);
}

#[test]
fn should_reject_obj_without_objects() {
    let source = MemorySource::new().with("models/empty.obj", "# exported empty\n");
    let err = block_on(load_obj_geometry(&source, "empty", "models/empty.obj"))
        .expect_err("an empty obj is an error");
    assert!(format!("{err:#}").contains("models/empty.obj"));
}

#[test]
fn should_report_missing_files_with_their_path() {
    let err = block_on(load_obj_geometry(&MemorySource::new(), "car", "models/car_01.obj"))
        .expect_err("missing file");
    assert!(format!("{err:#}").contains("models/car_01.obj"));
}

#[test]
fn should_skip_degenerate_uv_triangles() {
    let mut vertices = vec![
        ModelVertex {
            position: [0.0, 0.0, 0.0],
            ..Default::default()
        },
        ModelVertex {
            position: [1.0, 0.0, 0.0],
            ..Default::default()
        },
        ModelVertex {
            position: [0.0, 1.0, 0.0],
            ..Default::default()
        },
    ];
    compute_tangents(&mut vertices, &[0, 1, 2]);
    for vertex in &vertices {
        assert_eq!(vertex.tangent, [0.0; 3]);
        assert_eq!(vertex.bitangent, [0.0; 3]);
    }
}

#[test]
fn should_report_empty_bounds() {
    assert_eq!(Geometry::default().bounds(), None);
    assert_eq!(Geometry::default().triangle_count(), 0);
}
