use std::io::{BufReader, Cursor};

use crate::data_structures::geometry::{Geometry, ModelVertex};

/// Parse OBJ text into triangulated, single-index models.
///
/// Material libraries referenced with `mtllib` are not fetched: the scene
/// assigns its own materials by name.
pub async fn parse_obj(obj_text: &str) -> anyhow::Result<Vec<tobj::Model>> {
    let mut obj_reader = BufReader::new(Cursor::new(obj_text));

    let (models, _materials) = tobj::load_obj_buf_async(
        &mut obj_reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |p| async move {
            log::debug!("Ignoring material library {p}");
            let skipped: tobj::MTLLoadResult = Err(tobj::LoadError::OpenFileFailed);
            skipped
        },
    )
    .await?;

    Ok(models)
}

/**
 * Obj files don't come with tangents and bitangents so they are calculated
 * here for the bump-mapped facades.
 */
pub fn geometry_from_obj(name: &str, model: &tobj::Model) -> anyhow::Result<Geometry> {
    let m = &model.mesh;
    if m.positions.is_empty() || m.indices.is_empty() {
        anyhow::bail!("Object {} has no triangles", model.name);
    }

    let vertices = (0..m.positions.len() / 3)
        .map(|i| ModelVertex {
            position: [
                m.positions[i * 3],
                m.positions[i * 3 + 1],
                m.positions[i * 3 + 2],
            ],
            tex_coords: [
                m.texcoords.get(i * 2).map_or(0.0, |f| *f),
                1.0 - m.texcoords.get(i * 2 + 1).map_or(0.0, |f| *f),
            ],
            normal: [
                m.normals.get(i * 3).map_or(0.0, |f| *f),
                m.normals.get(i * 3 + 1).map_or(0.0, |f| *f),
                m.normals.get(i * 3 + 2).map_or(0.0, |f| *f),
            ],
            // Filled in by Geometry::new
            tangent: [0.0; 3],
            bitangent: [0.0; 3],
        })
        .collect::<Vec<_>>();

    if let Some(index) = m.indices.iter().find(|&&i| i as usize >= vertices.len()) {
        anyhow::bail!(
            "Object {} references vertex {} but only has {}",
            model.name,
            index,
            vertices.len()
        );
    }

    Ok(Geometry::new(name, vertices, m.indices.clone()))
}
