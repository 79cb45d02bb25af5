//! # Matrix Stack
//!
//! Fixed-capacity stack of affine matrices used while walking an element
//! tree. Operations post-multiply onto the top frame, so each call applies
//! in the local space left by the previous one.

use glam::{DMat4, DVec3};

use crate::error::MeshError;

/// Stack of 4x4 matrices with an identity base frame.
///
/// # Example
///
/// ```rust
/// use glam::{DMat4, DVec3};
/// use shape_mesh::MatrixStack;
///
/// let mut stack = MatrixStack::new(4);
/// stack.push().unwrap();
/// stack.translate(DVec3::X);
/// assert_eq!(stack.top().transform_point3(DVec3::ZERO), DVec3::X);
/// stack.pop().unwrap();
/// assert_eq!(stack.top(), DMat4::IDENTITY);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixStack {
    frames: Vec<DMat4>,
    capacity: usize,
}

impl MatrixStack {
    /// Creates a stack holding only the identity base frame.
    ///
    /// `capacity` bounds the number of frames pushed on top of the base.
    pub fn new(capacity: usize) -> Self {
        let mut frames = Vec::with_capacity(capacity + 1);
        frames.push(DMat4::IDENTITY);
        Self { frames, capacity }
    }

    /// Returns the number of frames pushed on top of the base.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Returns the maximum push depth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a copy of the top frame.
    #[inline]
    pub fn top(&self) -> DMat4 {
        self.frames.last().copied().unwrap_or(DMat4::IDENTITY)
    }

    /// Pushes a copy of the top frame.
    pub fn push(&mut self) -> Result<(), MeshError> {
        if self.depth() >= self.capacity {
            return Err(MeshError::StackOverflow {
                capacity: self.capacity,
            });
        }
        let top = self.top();
        self.frames.push(top);
        Ok(())
    }

    /// Pops and returns the top frame; the base frame cannot be popped.
    pub fn pop(&mut self) -> Result<DMat4, MeshError> {
        if self.depth() == 0 {
            return Err(MeshError::StackUnderflow);
        }
        self.frames.pop().ok_or(MeshError::StackUnderflow)
    }

    /// Post-multiplies the top frame by `matrix`.
    pub fn multiply(&mut self, matrix: DMat4) {
        if let Some(top) = self.frames.last_mut() {
            *top *= matrix;
        }
    }

    /// Translates the top frame.
    pub fn translate(&mut self, offset: DVec3) {
        self.multiply(DMat4::from_translation(offset));
    }

    /// Rotates the top frame by Euler angles in degrees, X then Y then Z.
    pub fn rotate_degrees(&mut self, degrees: DVec3) {
        self.multiply(
            DMat4::from_rotation_x(degrees.x.to_radians())
                * DMat4::from_rotation_y(degrees.y.to_radians())
                * DMat4::from_rotation_z(degrees.z.to_radians()),
        );
    }

    /// Scales the top frame per axis.
    pub fn scale(&mut self, factors: DVec3) {
        self.multiply(DMat4::from_scale(factors));
    }

    /// Drops every pushed frame and resets the base to identity.
    pub fn clear(&mut self) {
        self.frames.clear();
        self.frames.push(DMat4::IDENTITY);
    }
}
