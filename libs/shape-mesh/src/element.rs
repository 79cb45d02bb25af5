//! # Element Tesselation
//!
//! Builds the geometry of a single element in its pivot space, then bakes
//! in the element's resolved model-space transform. Children are left to
//! the assembler.

use config::constants::GRID_UNITS_PER_BLOCK;
use glam::DMat4;
use shape_ir::{Element, TextureSizeTable};

use crate::error::MeshError;
use crate::face::{emit_face, FaceUv};
use crate::mesh::MeshBuffer;

/// Tesselates one element's own faces.
///
/// A zero-extent element yields an empty buffer. Absent faces are skipped.
///
/// # Example
///
/// ```rust
/// use glam::{DMat4, DVec3};
/// use shape_ir::{Element, Face, TextureSize, TextureSizeTable};
/// use shape_mesh::element::tesselate_element;
///
/// let textures: TextureSizeTable = vec![TextureSize::new(16, 16)].into();
/// let element = Element::new("cube", DVec3::ZERO, DVec3::splat(16.0))
///     .with_all_faces(Face::new([0.0, 0.0, 16.0, 16.0], 0));
///
/// let mesh = tesselate_element(&element, &DMat4::IDENTITY, &textures).unwrap();
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn tesselate_element(
    element: &Element,
    transform: &DMat4,
    textures: &TextureSizeTable,
) -> Result<MeshBuffer, MeshError> {
    if element.is_degenerate() {
        return Ok(MeshBuffer::new());
    }

    let size = element.extent() / GRID_UNITS_PER_BLOCK;
    let relative_center = size / 2.0;
    let mut buffer = MeshBuffer::with_face_capacity(element.faces.len());

    for (direction, face) in element.faces.iter() {
        emit_face(
            &mut buffer,
            direction,
            relative_center,
            size,
            &FaceUv::from(face),
            textures,
        )
        .map_err(|err| err.in_element(&element.name))?;
    }

    buffer.transform(transform);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::DVec3;
    use shape_ir::{Face, FaceDirection, TextureSize};

    fn textures() -> TextureSizeTable {
        vec![TextureSize::new(16, 16)].into()
    }

    fn face() -> Face {
        Face::new([0.0, 0.0, 16.0, 16.0], 0)
    }

    #[test]
    fn test_vertex_count_tracks_present_faces() {
        let mut element = Element::new("box", DVec3::ZERO, DVec3::new(16.0, 8.0, 4.0));
        for (present, direction) in FaceDirection::ALL.into_iter().enumerate() {
            let mesh = tesselate_element(&element, &DMat4::IDENTITY, &textures()).unwrap();
            assert_eq!(mesh.vertex_count(), 4 * present);
            assert_eq!(mesh.indices().len(), 6 * present);
            element.faces.set(direction, Some(face()));
        }
        let mesh = tesselate_element(&element, &DMat4::IDENTITY, &textures()).unwrap();
        assert_eq!(mesh.vertex_count(), 24);
        assert!(mesh.validate());
    }

    #[test]
    fn test_each_face_indexes_its_own_quad() {
        let element = Element::new("box", DVec3::ZERO, DVec3::splat(16.0)).with_all_faces(face());
        let mesh = tesselate_element(&element, &DMat4::IDENTITY, &textures()).unwrap();

        for (quad, indices) in mesh.indices().chunks(6).enumerate() {
            let n = 4 * quad as u32;
            assert_eq!(indices, &[n, n + 1, n + 2, n, n + 2, n + 3]);
        }
    }

    #[test]
    fn test_degenerate_element_is_empty() {
        let element = Element::new("point", DVec3::splat(8.0), DVec3::splat(8.0)).with_all_faces(face());
        let mesh = tesselate_element(&element, &DMat4::IDENTITY, &textures()).unwrap();
        assert!(mesh.is_empty());
        assert!(mesh.indices().is_empty());
    }

    #[test]
    fn test_flat_element_still_emits() {
        let element = Element::new("plane", DVec3::ZERO, DVec3::new(16.0, 0.0, 16.0))
            .with_face(FaceDirection::Up, face());
        let mesh = tesselate_element(&element, &DMat4::IDENTITY, &textures()).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn test_local_box_spans_zero_to_size_before_transform() {
        let element = Element::new("box", DVec3::splat(4.0), DVec3::new(12.0, 8.0, 20.0)).with_all_faces(face());
        let mesh = tesselate_element(&element, &DMat4::IDENTITY, &textures()).unwrap();

        let (min, max) = mesh.bounding_box();
        assert_abs_diff_eq!(min, DVec3::ZERO, epsilon = 1e-12);
        assert_abs_diff_eq!(max, DVec3::new(0.5, 0.25, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn test_transform_moves_positions_not_uvs() {
        let element = Element::new("box", DVec3::ZERO, DVec3::splat(16.0)).with_face(FaceDirection::North, face());
        let local = tesselate_element(&element, &DMat4::IDENTITY, &textures()).unwrap();
        let moved = tesselate_element(
            &element,
            &DMat4::from_translation(DVec3::new(2.0, 0.0, 0.0)),
            &textures(),
        )
        .unwrap();

        assert_eq!(local.uvs(), moved.uvs());
        assert_eq!(local.indices(), moved.indices());
        for (a, b) in local.vertices().iter().zip(moved.vertices()) {
            assert_abs_diff_eq!(*b - *a, DVec3::new(2.0, 0.0, 0.0), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_unknown_texture_fails() {
        let element = Element::new("box", DVec3::ZERO, DVec3::splat(16.0))
            .with_face(FaceDirection::Up, Face::new([0.0, 0.0, 16.0, 16.0], 3));
        let result = tesselate_element(&element, &DMat4::IDENTITY, &textures());
        assert_eq!(result, Err(MeshError::unknown_texture("box", 3, 1)));
    }
}
