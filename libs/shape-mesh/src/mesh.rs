//! # Mesh Buffer
//!
//! Per-element output of the tesselator: positions, atlas UVs, a texture
//! index per vertex and buffer-local triangle indices.

use config::constants::{INDICES_PER_FACE, VERTICES_PER_FACE};
use glam::{DMat4, DVec2, DVec3};

/// Geometry of one element.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens through the `*_f32` helpers for GPU upload.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use shape_mesh::MeshBuffer;
///
/// let mut mesh = MeshBuffer::new();
/// mesh.add_vertex(DVec3::ZERO, DVec2::ZERO, 0);
/// mesh.add_vertex(DVec3::X, DVec2::X, 0);
/// mesh.add_vertex(DVec3::Y, DVec2::Y, 0);
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions in model space
    vertices: Vec<DVec3>,
    /// Atlas-normalized texture coordinates, one per vertex
    uvs: Vec<DVec2>,
    /// Texture index, one per vertex
    texture_indices: Vec<u32>,
    /// Triangle indices into this buffer (3 per triangle)
    indices: Vec<u32>,
}

impl MeshBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer pre-sized for the given number of face quads.
    pub fn with_face_capacity(faces: usize) -> Self {
        let vertices = faces * VERTICES_PER_FACE;
        Self {
            vertices: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            texture_indices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(faces * INDICES_PER_FACE),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the buffer holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex with its UV and texture index, returning its index.
    pub fn add_vertex(&mut self, position: DVec3, uv: DVec2, texture: u32) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.uvs.push(uv);
        self.texture_indices.push(texture);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Returns the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Returns the per-vertex texture indices.
    #[inline]
    pub fn texture_indices(&self) -> &[u32] {
        &self.texture_indices
    }

    /// Returns the flat triangle index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Transforms all vertex positions by a 4x4 matrix.
    ///
    /// UVs, texture indices and triangle indices are left untouched.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; both zero for an empty buffer.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the buffer layout.
    ///
    /// Checks:
    /// - Per-vertex attribute lists have equal length
    /// - Index count is a multiple of 3
    /// - All indices reference a vertex of this buffer
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();
        if self.uvs.len() != vertex_count || self.texture_indices.len() != vertex_count {
            return false;
        }
        if self.indices.len() % 3 != 0 {
            return false;
        }
        self.indices.iter().all(|&i| (i as usize) < vertex_count)
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.extend_from_slice(&[v.x as f32, v.y as f32, v.z as f32]);
        }
        result
    }

    /// Exports UVs as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.uvs.len() * 2);
        for uv in &self.uvs {
            result.extend_from_slice(&[uv.x as f32, uv.y as f32]);
        }
        result
    }

    /// Exports triangle indices for GPU.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.indices.clone()
    }
}
