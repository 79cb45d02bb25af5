//! # Shape Mesh
//!
//! Tesselates cuboid element trees into flat, renderable mesh buffers.
//!
//! ## Architecture
//!
//! ```text
//! shape-ir (Shape) → shape-mesh (Vec<MeshBuffer>, one per element)
//! ```
//!
//! ## Pipeline
//!
//! - **Transform resolution**: matrix stack walk, one model-space matrix per element
//! - **Element tesselation**: one quad per present face, baked into model space
//! - **Assembly**: pre-order buffer list; merging is left to the renderer
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use shape_ir::{Element, Face, Shape, TextureSize};
//! use shape_mesh::{tesselate_shape, ShapeStats};
//!
//! let cube = Element::new("cube", DVec3::ZERO, DVec3::splat(16.0))
//!     .with_all_faces(Face::new([0.0, 0.0, 16.0, 16.0], 0));
//! let shape = Shape::new(vec![cube], vec![TextureSize::new(16, 16)].into());
//!
//! let buffers = tesselate_shape(&shape)?;
//! assert_eq!(ShapeStats::from_buffers(&buffers).triangles, 12);
//! # Ok::<(), shape_mesh::MeshError>(())
//! ```

pub mod assembler;
pub mod element;
pub mod error;
pub mod face;
pub mod matrix_stack;
pub mod mesh;
pub mod transform;

pub use assembler::{tesselate_elements, tesselate_shape, tesselate_shapes, ShapeStats};
pub use error::MeshError;
pub use matrix_stack::MatrixStack;
pub use mesh::MeshBuffer;
pub use transform::{resolve_transforms, ResolvedTransforms};
