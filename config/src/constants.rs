//! # Configuration Constants
//!
//! Centralized constants for the shape tesselation pipeline.
//!
//! ## Categories
//!
//! - **Units**: Grid and texture unit systems used by shape descriptions
//! - **Limits**: Maximum values for safety bounds
//! - **Buffer Layout**: Per-face vertex and index counts

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Number of grid units spanning one model-space unit.
///
/// Element extents and rotation origins are authored on a 0–16 grid; dividing
/// by this value converts them into model space.
///
/// # Example
///
/// ```rust
/// use config::constants::GRID_UNITS_PER_BLOCK;
///
/// let from = 4.0;
/// assert_eq!(from / GRID_UNITS_PER_BLOCK, 0.25);
/// ```
pub const GRID_UNITS_PER_BLOCK: f64 = 16.0;

/// Size of the texture grid UV rectangles are authored in.
///
/// Face UVs use 0–16 texture-space units. A texture's size multiplier is its
/// pixel size divided by this value, and normalized UVs divide by
/// `TEXTURE_GRID_SIZE * multiplier`.
///
/// # Example
///
/// ```rust
/// use config::constants::TEXTURE_GRID_SIZE;
///
/// let multiplier = 32.0 / TEXTURE_GRID_SIZE;
/// assert_eq!(8.0 / (TEXTURE_GRID_SIZE * multiplier), 0.25);
/// ```
pub const TEXTURE_GRID_SIZE: f64 = 16.0;

/// Degrees per quantized face UV rotation step.
pub const FACE_ROTATION_STEP_DEGREES: f64 = 90.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum nesting depth of an element tree.
///
/// Root elements are at depth 1. Trees deeper than this fail fast instead
/// of exhausting the stack.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_ELEMENT_DEPTH;
///
/// let current_depth = 10;
/// assert!(current_depth <= MAX_ELEMENT_DEPTH);
/// ```
pub const MAX_ELEMENT_DEPTH: usize = 64;

// =============================================================================
// BUFFER LAYOUT CONSTANTS
// =============================================================================

/// Number of axis-aligned faces on an element box.
pub const FACE_COUNT: usize = 6;

/// Vertices emitted per face quad.
pub const VERTICES_PER_FACE: usize = 4;

/// Triangle indices emitted per face quad (two triangles).
///
/// # Example
///
/// ```rust
/// use config::constants::{FACE_COUNT, INDICES_PER_FACE, VERTICES_PER_FACE};
///
/// // A fully faced element
/// assert_eq!(FACE_COUNT * VERTICES_PER_FACE, 24);
/// assert_eq!(FACE_COUNT * INDICES_PER_FACE, 36);
/// ```
pub const INDICES_PER_FACE: usize = 6;
