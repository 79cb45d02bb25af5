//! # Config Crate
//!
//! Centralized configuration constants for the shape tesselation pipeline.
//! Grid units, texture grid size, tree depth limits and per-face buffer
//! counts are defined here so the IR and mesh crates never disagree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{GRID_UNITS_PER_BLOCK, MAX_ELEMENT_DEPTH};
//!
//! // A 16-unit element spans exactly one model-space unit.
//! let extent = 16.0 / GRID_UNITS_PER_BLOCK;
//! assert_eq!(extent, 1.0);
//!
//! let depth = 12;
//! assert!(depth < MAX_ELEMENT_DEPTH);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Pure**: No dependencies, no runtime configuration files

pub mod constants;
