//! # Shape Assembly
//!
//! Top-level driver. Resolves every element transform in one pass, then
//! tesselates the forest in pre-order, producing one [`MeshBuffer`] per
//! element. Buffers are never merged here.
//!
//! ## Phases
//!
//! ```text
//! resolve_transforms (pre-order matrices)
//!       ↓
//! tesselate_element per element (pre-order, same indexing)
//!       ↓
//! Vec<MeshBuffer>
//! ```

use std::time::Instant;

use log::{debug, log_enabled, trace, Level};
use rayon::prelude::*;
use shape_ir::{Element, Shape, TextureSizeTable};

use crate::element::tesselate_element;
use crate::error::MeshError;
use crate::mesh::MeshBuffer;
use crate::transform::{resolve_transforms, ResolvedTransforms};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Tesselates a shape into one buffer per element, in pre-order.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use shape_ir::{Element, Face, Shape, TextureSize};
/// use shape_mesh::tesselate_shape;
///
/// let root = Element::new("root", DVec3::ZERO, DVec3::splat(16.0))
///     .with_all_faces(Face::new([0.0, 0.0, 16.0, 16.0], 0))
///     .with_child(Element::new("empty", DVec3::ZERO, DVec3::ZERO));
/// let shape = Shape::new(vec![root], vec![TextureSize::new(16, 16)].into());
///
/// let buffers = tesselate_shape(&shape).unwrap();
/// assert_eq!(buffers.len(), 2);
/// assert_eq!(buffers[0].vertex_count(), 24);
/// assert!(buffers[1].is_empty());
/// ```
pub fn tesselate_shape(shape: &Shape) -> Result<Vec<MeshBuffer>, MeshError> {
    tesselate_elements(&shape.elements, &shape.texture_sizes)
}

/// Tesselates an element forest against a texture size table.
pub fn tesselate_elements(
    elements: &[Element],
    textures: &TextureSizeTable,
) -> Result<Vec<MeshBuffer>, MeshError> {
    let start = Instant::now();
    let transforms = resolve_transforms(elements)?;
    debug!(
        "Resolved {} element transforms in {:?}",
        transforms.len(),
        start.elapsed()
    );

    let start = Instant::now();
    let mut buffers = Vec::with_capacity(transforms.len());
    collect_buffers(elements, &transforms, textures, &mut buffers)?;
    debug!(
        "Tesselated {} elements in {:?}",
        buffers.len(),
        start.elapsed()
    );

    if log_enabled!(Level::Debug) {
        let stats = ShapeStats::from_buffers(&buffers);
        debug!(
            "Shape mesh: {} elements, {} vertices, {} triangles",
            stats.elements, stats.vertices, stats.triangles
        );
    }
    Ok(buffers)
}

/// Tesselates independent shapes on the rayon pool.
///
/// Results keep the input order; each shape succeeds or fails on its own.
pub fn tesselate_shapes(shapes: &[Shape]) -> Vec<Result<Vec<MeshBuffer>, MeshError>> {
    shapes.par_iter().map(tesselate_shape).collect()
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Element, vertex and triangle totals over a buffer list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeStats {
    /// Number of buffers, one per element.
    pub elements: usize,
    /// Sum of vertex counts.
    pub vertices: usize,
    /// Sum of triangle counts.
    pub triangles: usize,
}

impl ShapeStats {
    /// Sums the counts of every buffer.
    pub fn from_buffers(buffers: &[MeshBuffer]) -> Self {
        buffers.iter().fold(
            Self {
                elements: buffers.len(),
                ..Self::default()
            },
            |stats, buffer| Self {
                vertices: stats.vertices + buffer.vertex_count(),
                triangles: stats.triangles + buffer.triangle_count(),
                ..stats
            },
        )
    }
}

// =============================================================================
// TRAVERSAL
// =============================================================================

fn collect_buffers(
    elements: &[Element],
    transforms: &ResolvedTransforms,
    textures: &TextureSizeTable,
    buffers: &mut Vec<MeshBuffer>,
) -> Result<(), MeshError> {
    for element in elements {
        // Pre-order position equals the number of buffers emitted so far
        let index = buffers.len();
        let transform = transforms
            .get(index)
            .ok_or(MeshError::UnresolvedElement { index })?;

        let buffer = tesselate_element(element, transform, textures)?;
        trace!(
            "Element #{index} '{}': {} vertices",
            element.name,
            buffer.vertex_count()
        );
        buffers.push(buffer);

        collect_buffers(&element.children, transforms, textures, buffers)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
