//! # Shape IR
//!
//! Already-parsed shape descriptions: a forest of cuboid [`Element`]s with
//! per-face UV assignments, plus the [`TextureSizeTable`] those faces index.
//!
//! ## Architecture
//!
//! ```text
//! document loader → shape-ir (Shape) → shape-mesh (MeshBuffer list)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use shape_ir::{Element, Face, Shape, TextureSize, TextureSizeTable};
//!
//! let mut textures = TextureSizeTable::new();
//! let stone = textures.push(TextureSize::new(16, 16));
//!
//! let cube = Element::new("cube", DVec3::ZERO, DVec3::splat(16.0))
//!     .with_all_faces(Face::new([0.0, 0.0, 16.0, 16.0], stone));
//! let shape = Shape::new(vec![cube], textures);
//! assert_eq!(shape.element_count(), 1);
//! ```

pub mod element;
pub mod face;
pub mod shape;
pub mod texture;

pub use element::Element;
pub use face::{Face, FaceDirection, FaceRotation, FaceSet};
pub use shape::Shape;
pub use texture::{TextureSize, TextureSizeTable};
