//! # Shape Assembly Tests
//!
//! End-to-end tesselation of element forests.

use super::*;
use approx::assert_abs_diff_eq;
use config::constants::MAX_ELEMENT_DEPTH;
use glam::{DVec2, DVec3};
use shape_ir::{Face, FaceDirection, FaceRotation, TextureSize};

fn textures() -> TextureSizeTable {
    vec![TextureSize::new(16, 16), TextureSize::new(64, 32)].into()
}

fn full_face() -> Face {
    Face::new([0.0, 0.0, 16.0, 16.0], 0)
}

fn boxed(name: &str, from: DVec3, to: DVec3) -> Element {
    Element::new(name, from, to).with_all_faces(full_face())
}

/// A small creature: body with a head and two legs, the head carries a hat.
fn creature() -> Shape {
    let hat = boxed("hat", DVec3::new(1.0, 8.0, 1.0), DVec3::new(7.0, 10.0, 7.0))
        .with_rotation_origin(DVec3::new(4.0, 8.0, 4.0))
        .with_rotation(DVec3::new(0.0, 0.0, 15.0));
    let head = boxed("head", DVec3::new(4.0, 12.0, 4.0), DVec3::new(12.0, 20.0, 12.0))
        .with_rotation_origin(DVec3::new(8.0, 12.0, 8.0))
        .with_rotation(DVec3::new(0.0, 30.0, 0.0))
        .with_child(hat);
    let leg = |name: &str, x: f64| {
        boxed(name, DVec3::new(x, -6.0, 6.0), DVec3::new(x + 2.0, 0.0, 8.0))
            .with_scale(DVec3::new(1.0, 1.5, 1.0))
    };
    let body = boxed("body", DVec3::new(2.0, 6.0, 2.0), DVec3::new(14.0, 12.0, 14.0))
        .with_child(head)
        .with_child(leg("leg_left", 2.0))
        .with_child(leg("leg_right", 10.0));
    let tail = Element::new("tail", DVec3::new(7.0, 8.0, 14.0), DVec3::new(9.0, 10.0, 20.0))
        .with_face(FaceDirection::Up, Face::new([0.0, 0.0, 4.0, 12.0], 1).with_rotation(FaceRotation::Deg90));

    Shape::new(vec![body, tail], textures())
}

// =============================================================================
// END-TO-END
// =============================================================================

#[test]
fn test_single_north_face_unit_cube() {
    let element = Element::new("cube", DVec3::ZERO, DVec3::splat(16.0))
        .with_face(FaceDirection::North, full_face());
    let shape = Shape::new(vec![element], vec![TextureSize::new(16, 16)].into());

    let buffers = tesselate_shape(&shape).unwrap();
    assert_eq!(buffers.len(), 1);
    let mesh = &buffers[0];

    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);

    // Unit square on the z = 0 plane, centered on (0.5, 0.5)
    let expected = [
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(1.0, 1.0, 0.0),
        DVec3::new(1.0, 0.0, 0.0),
    ];
    for (got, want) in mesh.vertices().iter().zip(expected) {
        assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
    }

    let (min, max) = mesh.uvs().iter().fold(
        (DVec2::splat(f64::MAX), DVec2::splat(f64::MIN)),
        |(min, max), uv| (min.min(*uv), max.max(*uv)),
    );
    assert_eq!(min, DVec2::ZERO);
    assert_eq!(max, DVec2::ONE);
}

#[test]
fn test_buffers_follow_preorder() {
    let shape = creature();
    let buffers = tesselate_shape(&shape).unwrap();

    // body, head, hat, leg_left, leg_right, tail
    assert_eq!(buffers.len(), 6);
    assert_eq!(buffers.len(), shape.element_count());
    let counts: Vec<_> = buffers.iter().map(MeshBuffer::vertex_count).collect();
    assert_eq!(counts, vec![24, 24, 24, 24, 24, 4]);
    assert!(buffers.iter().all(MeshBuffer::validate));
}

#[test]
fn test_zero_size_parent_still_tesselates_children() {
    let pivot = Element::new("pivot", DVec3::splat(8.0), DVec3::splat(8.0))
        .with_child(boxed("arm", DVec3::ZERO, DVec3::new(16.0, 2.0, 2.0)));
    let shape = Shape::new(vec![pivot], textures());

    let buffers = tesselate_shape(&shape).unwrap();
    assert_eq!(buffers.len(), 2);
    assert_eq!(buffers[0].vertex_count(), 0);
    assert!(buffers[0].indices().is_empty());
    assert_eq!(buffers[1].vertex_count(), 24);

    // The arm starts at the pivot's offset (8/16 on every axis)
    let (min, _) = buffers[1].bounding_box();
    assert_abs_diff_eq!(min, DVec3::splat(0.5), epsilon = 1e-12);
}

#[test]
fn test_idempotent() {
    let shape = creature();
    let first = tesselate_shape(&shape).unwrap();
    let second = tesselate_shape(&shape).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_centered_half_turn_reflects_x_and_z() {
    let element = boxed("spin", DVec3::new(4.0, 0.0, 2.0), DVec3::new(12.0, 8.0, 6.0))
        .with_rotation_origin(DVec3::new(8.0, 4.0, 4.0))
        .with_rotation(DVec3::new(0.0, 180.0, 0.0));
    let plain = boxed("plain", DVec3::new(4.0, 0.0, 2.0), DVec3::new(12.0, 8.0, 6.0));
    let shape = Shape::new(vec![element, plain], textures());

    let buffers = tesselate_shape(&shape).unwrap();
    let center = DVec3::new(8.0, 4.0, 4.0) / 16.0;
    for (rotated, plain) in buffers[0].vertices().iter().zip(buffers[1].vertices()) {
        let offset = *plain - center;
        let expected = center + DVec3::new(-offset.x, offset.y, -offset.z);
        assert_abs_diff_eq!(*rotated, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_siblings_share_only_parent_transform() {
    let parent = Element::new("parent", DVec3::new(16.0, 0.0, 0.0), DVec3::new(16.0, 0.0, 0.0))
        .with_child(
            boxed("first", DVec3::ZERO, DVec3::splat(16.0))
                .with_rotation(DVec3::new(45.0, 0.0, 0.0))
                .with_scale(DVec3::splat(3.0)),
        )
        .with_child(boxed("second", DVec3::ZERO, DVec3::splat(16.0)));
    let buffers = tesselate_shape(&Shape::new(vec![parent], textures())).unwrap();

    let (min, max) = buffers[2].bounding_box();
    assert_abs_diff_eq!(min, DVec3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    assert_abs_diff_eq!(max, DVec3::new(2.0, 1.0, 1.0), epsilon = 1e-12);
}

#[test]
fn test_uvs_use_their_own_texture_size() {
    let buffers = tesselate_shape(&creature()).unwrap();
    let tail = &buffers[5];

    assert_eq!(tail.texture_indices(), &[1, 1, 1, 1]);
    // 4x12 texture units on a 64x32 texture
    for uv in tail.uvs() {
        assert!(uv.x >= 0.0 && uv.x <= 4.0 / 64.0);
        assert!(uv.y >= 0.0 && uv.y <= 12.0 / 32.0);
    }
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_unknown_texture_fails_whole_shape() {
    let mut shape = creature();
    shape.elements[1]
        .faces
        .set(FaceDirection::Down, Some(Face::new([0.0, 0.0, 1.0, 1.0], 5)));

    let err = tesselate_shape(&shape).unwrap_err();
    assert_eq!(err, MeshError::unknown_texture("tail", 5, 2));
    assert!(err.to_string().contains("'tail'"));
}

#[test]
fn test_unknown_texture_names_nested_element() {
    let wing = boxed("wing", DVec3::ZERO, DVec3::splat(4.0))
        .with_face(FaceDirection::Up, Face::new([0.0, 0.0, 4.0, 4.0], 7));
    let body = boxed("body", DVec3::ZERO, DVec3::splat(8.0)).with_child(wing);

    let err = tesselate_shape(&Shape::new(vec![body], textures())).unwrap_err();
    assert!(matches!(
        &err,
        MeshError::UnknownTexture { element, index: 7, available: 2 } if element == "wing"
    ));
    assert!(err.to_string().contains("wing"));
}

#[test]
fn test_too_deep_tree_fails() {
    let mut element = boxed("leaf", DVec3::ZERO, DVec3::ONE);
    for i in 0..MAX_ELEMENT_DEPTH {
        element = Element::new(format!("joint{i}"), DVec3::ZERO, DVec3::ZERO).with_child(element);
    }
    let result = tesselate_shape(&Shape::new(vec![element], textures()));
    assert!(matches!(result, Err(MeshError::DepthLimitExceeded { .. })));
}

#[test]
fn test_empty_shape() {
    let buffers = tesselate_shape(&Shape::default()).unwrap();
    assert!(buffers.is_empty());
    assert_eq!(ShapeStats::from_buffers(&buffers), ShapeStats::default());
}

// =============================================================================
// BATCH AND STATS
// =============================================================================

#[test]
fn test_batch_matches_sequential() {
    let mut broken = creature();
    broken.texture_sizes = TextureSizeTable::new();
    let shapes = vec![creature(), broken, Shape::default(), creature()];

    let results = tesselate_shapes(&shapes);
    assert_eq!(results.len(), 4);
    for (shape, result) in shapes.iter().zip(&results) {
        assert_eq!(result, &tesselate_shape(shape));
    }
    assert!(results[1].is_err());
}

#[test]
fn test_stats() {
    let buffers = tesselate_shape(&creature()).unwrap();
    let stats = ShapeStats::from_buffers(&buffers);
    assert_eq!(
        stats,
        ShapeStats {
            elements: 6,
            vertices: 5 * 24 + 4,
            triangles: 5 * 12 + 2,
        }
    );
}
