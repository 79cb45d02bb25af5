//! # Transform Resolution
//!
//! Walks an element forest with a [`MatrixStack`] and produces one
//! model-space matrix per element, in pre-order.
//!
//! Per element, on top of the parent's matrix:
//!
//! ```text
//! translate(origin / 16) · rotate(x, y, z) · scale · translate((from - origin) / 16)
//! ```
//!
//! The translation to the origin is skipped when the origin is zero.

use config::constants::{GRID_UNITS_PER_BLOCK, MAX_ELEMENT_DEPTH};
use glam::{DMat4, DVec3};
use shape_ir::Element;

use crate::error::MeshError;
use crate::matrix_stack::MatrixStack;

/// Model-space matrices indexed by pre-order element position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTransforms(Vec<DMat4>);

impl ResolvedTransforms {
    /// Returns the matrix of the element at a pre-order position.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&DMat4> {
        self.0.get(index)
    }

    /// Returns the number of resolved elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no element was resolved.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns all matrices in pre-order.
    pub fn as_slice(&self) -> &[DMat4] {
        &self.0
    }
}

/// Resolves the model-space transform of every element.
///
/// Fails with [`MeshError::DepthLimitExceeded`] when the forest nests deeper
/// than `MAX_ELEMENT_DEPTH`.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use shape_ir::Element;
/// use shape_mesh::transform::resolve_transforms;
///
/// let root = Element::new("root", DVec3::new(16.0, 0.0, 0.0), DVec3::splat(32.0))
///     .with_child(Element::new("child", DVec3::new(0.0, 16.0, 0.0), DVec3::splat(32.0)));
/// let transforms = resolve_transforms(&[root]).unwrap();
///
/// let child_origin = transforms.get(1).unwrap().transform_point3(DVec3::ZERO);
/// assert_eq!(child_origin, DVec3::new(1.0, 1.0, 0.0));
/// ```
pub fn resolve_transforms(elements: &[Element]) -> Result<ResolvedTransforms, MeshError> {
    let mut stack = MatrixStack::new(MAX_ELEMENT_DEPTH);
    let mut transforms = Vec::new();
    resolve_into(elements, &mut stack, &mut transforms)?;
    Ok(ResolvedTransforms(transforms))
}

fn resolve_into(
    elements: &[Element],
    stack: &mut MatrixStack,
    transforms: &mut Vec<DMat4>,
) -> Result<(), MeshError> {
    for element in elements {
        stack
            .push()
            .map_err(|_| MeshError::depth_limit(&element.name, stack.capacity()))?;

        apply_element(stack, element);
        transforms.push(stack.top());

        resolve_into(&element.children, stack, transforms)?;
        stack.pop()?;
    }
    Ok(())
}

/// Applies one element's pivot, rotation, scale and offset to the top frame.
fn apply_element(stack: &mut MatrixStack, element: &Element) {
    let origin = element.origin();
    if origin != DVec3::ZERO {
        stack.translate(origin / GRID_UNITS_PER_BLOCK);
    }

    stack.rotate_degrees(element.rotation);
    stack.scale(element.scale);
    stack.translate((element.from - origin) / GRID_UNITS_PER_BLOCK);
}
