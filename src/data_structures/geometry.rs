//! Mesh geometry on the CPU and on the GPU.

use cgmath::{InnerSpace, Vector2, Vector3};
use wgpu::util::DeviceExt;

/// Vertex layout shared by every mesh the loader produces.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
    pub tangent: [f32; 3],
    pub bitangent: [f32; 3],
}

impl ModelVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x2,
        2 => Float32x3,
        3 => Float32x3,
        4 => Float32x3
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ModelVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Indexed triangle list, ready for upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub name: String,
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    pub fn new(name: &str, mut vertices: Vec<ModelVertex>, indices: Vec<u32>) -> Self {
        compute_tangents(&mut vertices, &indices);
        Self {
            name: name.to_string(),
            vertices,
            indices,
        }
    }

    /// Single-segment plane of `width` x `height` centered on the origin, facing +Z.
    pub fn plane(name: &str, width: f32, height: f32) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        let corner = |x: f32, y: f32, u: f32, v: f32| ModelVertex {
            position: [x, y, 0.0],
            tex_coords: [u, v],
            normal: [0.0, 0.0, 1.0],
            ..Default::default()
        };
        let vertices = vec![
            corner(-hw, hh, 0.0, 0.0),
            corner(hw, hh, 1.0, 0.0),
            corner(-hw, -hh, 0.0, 1.0),
            corner(hw, -hh, 1.0, 1.0),
        ];
        Self::new(name, vertices, vec![0, 2, 1, 2, 3, 1])
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`, `None` for an empty geometry.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.vertices.first()?.position;
        Some(self.vertices.iter().fold((first, first), |(mut min, mut max), v| {
            for axis in 0..3 {
                min[axis] = min[axis].min(v.position[axis]);
                max[axis] = max[axis].max(v.position[axis]);
            }
            (min, max)
        }))
    }
}

/// Fill in per-vertex tangents and bitangents for normal/bump mapping.
///
/// Each triangle solves
///     delta_pos1 = delta_uv1.x * T + delta_uv1.y * B
///     delta_pos2 = delta_uv2.x * T + delta_uv2.y * B
/// and the results are averaged over the triangles sharing a vertex. Triangles
/// with degenerate UVs are skipped.
pub fn compute_tangents(vertices: &mut [ModelVertex], indices: &[u32]) {
    let mut tangents = vec![Vector3::new(0.0f32, 0.0, 0.0); vertices.len()];
    let mut bitangents = tangents.clone();
    let mut triangles_included = vec![0u32; vertices.len()];

    for c in indices.chunks_exact(3) {
        let [i0, i1, i2] = [c[0] as usize, c[1] as usize, c[2] as usize];
        if i0 >= vertices.len() || i1 >= vertices.len() || i2 >= vertices.len() {
            continue;
        }
        let (v0, v1, v2) = (vertices[i0], vertices[i1], vertices[i2]);

        let pos0: Vector3<_> = v0.position.into();
        let uv0: Vector2<_> = v0.tex_coords.into();

        let delta_pos1 = Vector3::from(v1.position) - pos0;
        let delta_pos2 = Vector3::from(v2.position) - pos0;
        let delta_uv1 = Vector2::from(v1.tex_coords) - uv0;
        let delta_uv2 = Vector2::from(v2.tex_coords) - uv0;

        let det = delta_uv1.x * delta_uv2.y - delta_uv1.y * delta_uv2.x;
        if det.abs() < f32::EPSILON {
            continue;
        }
        let r = 1.0 / det;
        let tangent = (delta_pos1 * delta_uv2.y - delta_pos2 * delta_uv1.y) * r;
        // Flipped for right-handed normal maps in wgpu's texture coordinate system.
        let bitangent = (delta_pos2 * delta_uv1.x - delta_pos1 * delta_uv2.x) * -r;
        if !tangent.magnitude2().is_finite() || !bitangent.magnitude2().is_finite() {
            continue;
        }

        for i in [i0, i1, i2] {
            tangents[i] += tangent;
            bitangents[i] += bitangent;
            triangles_included[i] += 1;
        }
    }

    for (i, n) in triangles_included.into_iter().enumerate() {
        if n == 0 {
            continue;
        }
        let denom = 1.0 / n as f32;
        vertices[i].tangent = (tangents[i] * denom).into();
        vertices[i].bitangent = (bitangents[i] * denom).into();
    }
}

/// A geometry uploaded to vertex and index buffers.
#[derive(Debug)]
pub struct Mesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

impl Mesh {
    pub fn from_geometry(device: &wgpu::Device, geometry: &Geometry) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Vertex Buffer", geometry.name)),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{:?} Index Buffer", geometry.name)),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            name: geometry.name.clone(),
            vertex_buffer,
            index_buffer,
            num_elements: geometry.indices.len() as u32,
        }
    }
}
