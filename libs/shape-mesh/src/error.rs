//! # Mesh Errors
//!
//! Error types for shape tesselation. Any error aborts the whole call; no
//! partial buffers are returned.

use thiserror::Error;

/// Errors that can occur during tesselation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Element tree nests deeper than the configured limit
    #[error("Element '{element}' exceeds maximum tree depth of {max}")]
    DepthLimitExceeded {
        /// Name of the first element past the limit.
        element: String,
        /// Configured maximum depth.
        max: usize,
    },

    /// Face references a texture missing from the size table
    #[error("Element '{element}' uses unknown texture index {index} (table has {available} entries)")]
    UnknownTexture {
        /// Name of the element owning the face.
        element: String,
        /// Requested texture index.
        index: u32,
        /// Number of textures in the table.
        available: usize,
    },

    /// Element has no resolved transform at its pre-order position
    #[error("No resolved transform for element #{index}")]
    UnresolvedElement {
        /// Pre-order position of the element.
        index: usize,
    },

    /// Matrix stack pushed beyond its capacity
    #[error("Matrix stack overflow (capacity {capacity})")]
    StackOverflow {
        /// Maximum number of pushed frames.
        capacity: usize,
    },

    /// Matrix stack popped past its identity base
    #[error("Matrix stack underflow")]
    StackUnderflow,
}

impl MeshError {
    /// Creates a depth limit error.
    pub fn depth_limit(element: impl Into<String>, max: usize) -> Self {
        Self::DepthLimitExceeded {
            element: element.into(),
            max,
        }
    }

    /// Creates an unknown texture error.
    pub fn unknown_texture(element: impl Into<String>, index: u32, available: usize) -> Self {
        Self::UnknownTexture {
            element: element.into(),
            index,
            available,
        }
    }

    /// Attaches the owning element's name to a face-level error.
    pub fn in_element(self, name: &str) -> Self {
        match self {
            Self::UnknownTexture {
                index, available, ..
            } => Self::unknown_texture(name, index, available),
            other => other,
        }
    }
}
