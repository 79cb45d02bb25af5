//! # Elements
//!
//! A shape is a forest of cuboid elements. Each element owns its children
//! exclusively; transforms are relative to the parent element.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::face::{Face, FaceDirection, FaceSet};

/// One cuboid of a shape.
///
/// Extents and the rotation origin are in grid units (16 per model unit).
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use shape_ir::{Element, Face, FaceDirection};
///
/// let element = Element::new("base", DVec3::ZERO, DVec3::splat(16.0))
///     .with_face(FaceDirection::Up, Face::new([0.0, 0.0, 16.0, 16.0], 0));
/// assert_eq!(element.faces.len(), 1);
/// assert!(!element.is_degenerate());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Label used in diagnostics.
    #[serde(default)]
    pub name: String,
    /// Minimum box corner.
    pub from: DVec3,
    /// Maximum box corner.
    pub to: DVec3,
    /// Pivot for rotation and scale; zero when absent.
    #[serde(default)]
    pub rotation_origin: Option<DVec3>,
    /// Euler angles in degrees, applied X then Y then Z.
    #[serde(default)]
    pub rotation: DVec3,
    /// Per-axis scale about the pivot.
    #[serde(default = "unit_scale")]
    pub scale: DVec3,
    /// Texture assignment per side.
    #[serde(default)]
    pub faces: FaceSet,
    /// Nested elements, transformed relative to this one.
    #[serde(default)]
    pub children: Vec<Element>,
}

fn unit_scale() -> DVec3 {
    DVec3::ONE
}

impl Element {
    /// Creates an unrotated, unscaled element with no faces or children.
    pub fn new(name: impl Into<String>, from: DVec3, to: DVec3) -> Self {
        Self {
            name: name.into(),
            from,
            to,
            rotation_origin: None,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
            faces: FaceSet::new(),
            children: Vec::new(),
        }
    }

    /// Sets the rotation origin.
    pub fn with_rotation_origin(mut self, origin: DVec3) -> Self {
        self.rotation_origin = Some(origin);
        self
    }

    /// Sets the Euler rotation in degrees.
    pub fn with_rotation(mut self, degrees: DVec3) -> Self {
        self.rotation = degrees;
        self
    }

    /// Sets the per-axis scale.
    pub fn with_scale(mut self, scale: DVec3) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the face on one side.
    pub fn with_face(mut self, direction: FaceDirection, face: Face) -> Self {
        self.faces.set(direction, Some(face));
        self
    }

    /// Sets the same face on all six sides.
    pub fn with_all_faces(mut self, face: Face) -> Self {
        self.faces = FaceSet::uniform(face);
        self
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the rotation origin, defaulting to zero.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.rotation_origin.unwrap_or(DVec3::ZERO)
    }

    /// Returns the box extent in grid units.
    #[inline]
    pub fn extent(&self) -> DVec3 {
        self.to - self.from
    }

    /// Returns true when the box has zero extent on every axis.
    ///
    /// Degenerate elements emit no geometry but their children still do.
    pub fn is_degenerate(&self) -> bool {
        self.extent() == DVec3::ZERO
    }

    /// Counts this element and all descendants.
    ///
    /// Iterative, so trees of any depth can be measured.
    pub fn subtree_len(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;
        while let Some(element) = pending.pop() {
            count += 1;
            pending.extend(&element.children);
        }
        count
    }

    /// Returns the nesting depth of this subtree; a leaf has depth 1.
    ///
    /// Iterative like [`Element::subtree_len`].
    pub fn depth(&self) -> usize {
        let mut pending = vec![(self, 1)];
        let mut deepest = 0;
        while let Some((element, level)) = pending.pop() {
            deepest = deepest.max(level);
            pending.extend(element.children.iter().map(|child| (child, level + 1)));
        }
        deepest
    }
}
