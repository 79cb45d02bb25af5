//! # Face Descriptors
//!
//! Face directions, quantized UV rotations and the per-direction face table
//! carried by every element.

use config::constants::{FACE_COUNT, FACE_ROTATION_STEP_DEGREES};
use glam::DVec2;
use serde::{Deserialize, Serialize};

// =============================================================================
// FACE DIRECTION
// =============================================================================

/// One of the six axis-aligned sides of an element box.
///
/// The discriminant order is fixed and doubles as the index into
/// [`FaceSet`] and the mesh crate's face templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceDirection {
    /// Facing -Z.
    North = 0,
    /// Facing +X.
    East = 1,
    /// Facing +Z.
    South = 2,
    /// Facing -X.
    West = 3,
    /// Facing +Y.
    Up = 4,
    /// Facing -Y.
    Down = 5,
}

impl FaceDirection {
    /// All directions in emission order.
    pub const ALL: [FaceDirection; FACE_COUNT] = [
        FaceDirection::North,
        FaceDirection::East,
        FaceDirection::South,
        FaceDirection::West,
        FaceDirection::Up,
        FaceDirection::Down,
    ];

    /// Returns the fixed table index of this direction.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// =============================================================================
// FACE ROTATION
// =============================================================================

/// UV rotation of a face, quantized to quarter turns.
///
/// # Examples
/// ```
/// use shape_ir::FaceRotation;
///
/// assert_eq!(FaceRotation::from_degrees(180.0), FaceRotation::Deg180);
/// assert_eq!(FaceRotation::from_degrees(-90.0), FaceRotation::Deg270);
/// assert_eq!(FaceRotation::from_degrees(450.0).step(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub enum FaceRotation {
    /// No rotation.
    #[default]
    Deg0,
    /// Quarter turn.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three quarter turn.
    Deg270,
}

impl FaceRotation {
    /// Quantizes an angle in degrees.
    ///
    /// Truncates towards zero to whole quarter turns, then wraps into
    /// `0..4`. Non-finite angles quantize to [`FaceRotation::Deg0`].
    pub fn from_degrees(degrees: f64) -> Self {
        let steps = (degrees / FACE_ROTATION_STEP_DEGREES).trunc();
        if !steps.is_finite() {
            return Self::Deg0;
        }
        Self::from_step(steps.rem_euclid(4.0) as u8)
    }

    /// Builds a rotation from a step count, wrapping modulo 4.
    pub const fn from_step(step: u8) -> Self {
        match step % 4 {
            0 => Self::Deg0,
            1 => Self::Deg90,
            2 => Self::Deg180,
            _ => Self::Deg270,
        }
    }

    /// Returns the quarter-turn count in `0..4`.
    #[inline]
    pub const fn step(self) -> usize {
        self as usize
    }

    /// Returns the rotation in degrees.
    pub fn degrees(self) -> f64 {
        self.step() as f64 * FACE_ROTATION_STEP_DEGREES
    }
}

impl From<f64> for FaceRotation {
    fn from(degrees: f64) -> Self {
        Self::from_degrees(degrees)
    }
}

impl From<FaceRotation> for f64 {
    fn from(rotation: FaceRotation) -> Self {
        rotation.degrees()
    }
}

// =============================================================================
// FACE
// =============================================================================

/// Texture assignment for one side of an element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// UV rectangle `[u0, v0, u1, v1]` in 0–16 texture units.
    pub uv: [f64; 4],
    /// Quantized UV rotation.
    #[serde(default)]
    pub rotation: FaceRotation,
    /// Index into the shape's texture size table.
    #[serde(default)]
    pub texture: u32,
}

impl Face {
    /// Creates an unrotated face.
    pub fn new(uv: [f64; 4], texture: u32) -> Self {
        Self {
            uv,
            rotation: FaceRotation::Deg0,
            texture,
        }
    }

    /// Sets the UV rotation.
    pub fn with_rotation(mut self, rotation: FaceRotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns the UV start corner `(u0, v1)`.
    ///
    /// The V axis is flipped: emitted faces grow V upwards from the bottom
    /// edge of the authored rectangle.
    pub fn uv_start(&self) -> DVec2 {
        DVec2::new(self.uv[0], self.uv[3])
    }

    /// Returns the signed UV extent measured from [`Face::uv_start`].
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use shape_ir::Face;
    ///
    /// let face = Face::new([0.0, 0.0, 16.0, 8.0], 0);
    /// assert_eq!(face.uv_start(), DVec2::new(0.0, 8.0));
    /// assert_eq!(face.uv_size(), DVec2::new(16.0, -8.0));
    /// ```
    pub fn uv_size(&self) -> DVec2 {
        DVec2::new(self.uv[2], self.uv[1]) - self.uv_start()
    }
}

// =============================================================================
// FACE SET
// =============================================================================

/// Optional face per direction, indexed by [`FaceDirection`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceSet([Option<Face>; FACE_COUNT]);

impl FaceSet {
    /// Creates a set with no faces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set with the same face on every side.
    pub fn uniform(face: Face) -> Self {
        Self([Some(face); FACE_COUNT])
    }

    /// Returns the face for a direction, if present.
    #[inline]
    pub fn get(&self, direction: FaceDirection) -> Option<&Face> {
        self.0[direction.index()].as_ref()
    }

    /// Sets or clears the face for a direction.
    pub fn set(&mut self, direction: FaceDirection, face: Option<Face>) {
        self.0[direction.index()] = face;
    }

    /// Iterates present faces in direction order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceDirection, &Face)> {
        FaceDirection::ALL
            .iter()
            .zip(self.0.iter())
            .filter_map(|(direction, face)| face.as_ref().map(|face| (*direction, face)))
    }

    /// Returns the number of present faces.
    pub fn len(&self) -> usize {
        self.0.iter().filter(|face| face.is_some()).count()
    }

    /// Returns true when no face is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
