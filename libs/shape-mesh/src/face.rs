//! # Face Emission
//!
//! Appends one textured quad per element face. Corner positions and UV
//! corners come from constant tables indexed by [`FaceDirection`]; the UV
//! rotation only changes which UV corner lands on which vertex, never the
//! vertex order or winding.

use config::constants::{FACE_COUNT, TEXTURE_GRID_SIZE, VERTICES_PER_FACE};
use glam::{DVec2, DVec3};
use shape_ir::{Face, FaceDirection, TextureSizeTable};

use crate::error::MeshError;
use crate::mesh::MeshBuffer;

/// Cube corner offsets per face, relative to the box center in half sizes.
pub const FACE_VERTICES: [[[f64; 3]; VERTICES_PER_FACE]; FACE_COUNT] = [
    // North
    [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
    // East
    [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
    // South
    [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
    // West
    [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
    // Up
    [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
    // Down
    [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
];

/// UV rectangle corners per face, as fractions of the UV extent.
pub const FACE_UVS: [[[f64; 2]; VERTICES_PER_FACE]; FACE_COUNT] = [
    // North
    [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]],
    // East
    [[1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]],
    // South
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    // West
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
    // Up
    [[0.0, 1.0], [0.0, 0.0], [1.0, 0.0], [1.0, 1.0]],
    // Down
    [[1.0, 1.0], [0.0, 1.0], [0.0, 0.0], [1.0, 0.0]],
];

/// UV placement of one face quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceUv {
    /// Start corner in texture units.
    pub start: DVec2,
    /// Signed extent in texture units.
    pub size: DVec2,
    /// Quarter turns, `0..4`.
    pub rotation_step: usize,
    /// Texture index into the size table.
    pub texture: u32,
}

impl From<&Face> for FaceUv {
    fn from(face: &Face) -> Self {
        Self {
            start: face.uv_start(),
            size: face.uv_size(),
            rotation_step: face.rotation.step(),
            texture: face.texture,
        }
    }
}

/// Appends the quad for one face of a box.
///
/// `relative_center` and `size` are in the element's pivot space. Adds 4
/// vertices, 4 UVs, 4 texture indices and the fan `(n, n+1, n+2), (n, n+2, n+3)`
/// where `n` is the buffer's vertex count on entry.
///
/// Fails without touching the buffer when the texture index is not in
/// `textures`. The error carries no element name; the element tesselator
/// attaches it.
///
/// # Example
///
/// ```rust
/// use glam::{DVec2, DVec3};
/// use shape_ir::{FaceDirection, TextureSize, TextureSizeTable};
/// use shape_mesh::face::{emit_face, FaceUv};
/// use shape_mesh::MeshBuffer;
///
/// let textures: TextureSizeTable = vec![TextureSize::new(16, 16)].into();
/// let uv = FaceUv { start: DVec2::ZERO, size: DVec2::splat(16.0), rotation_step: 0, texture: 0 };
///
/// let mut mesh = MeshBuffer::new();
/// emit_face(&mut mesh, FaceDirection::Up, DVec3::splat(0.5), DVec3::ONE, &uv, &textures).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
/// ```
pub fn emit_face(
    buffer: &mut MeshBuffer,
    direction: FaceDirection,
    relative_center: DVec3,
    size: DVec3,
    uv: &FaceUv,
    textures: &TextureSizeTable,
) -> Result<(), MeshError> {
    let multiplier = textures
        .size_multiplier(uv.texture)
        .ok_or_else(|| MeshError::unknown_texture("", uv.texture, textures.len()))?;
    let uv_scale = TEXTURE_GRID_SIZE * multiplier;

    let half_size = size / 2.0;
    let corners = &FACE_VERTICES[direction.index()];
    let uv_corners = &FACE_UVS[direction.index()];
    let base = buffer.vertex_count() as u32;

    for (i, corner) in corners.iter().enumerate() {
        let position = relative_center + half_size * DVec3::from_array(*corner);
        let uv_corner = DVec2::from_array(uv_corners[(uv.rotation_step + i) % VERTICES_PER_FACE]);
        let tex_coord = (uv.start + uv.size * uv_corner) / uv_scale;
        buffer.add_vertex(position, tex_coord, uv.texture);
    }

    buffer.add_triangle(base, base + 1, base + 2);
    buffer.add_triangle(base, base + 2, base + 3);
    Ok(())
}
