//! # Texture Sizes
//!
//! Per-texture pixel dimensions used to normalize face UVs into 0–1 atlas
//! coordinates.

use config::constants::TEXTURE_GRID_SIZE;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of one texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl TextureSize {
    /// Creates a texture size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the size relative to the 16-unit texture grid.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use shape_ir::TextureSize;
    ///
    /// assert_eq!(TextureSize::new(32, 16).multiplier(), DVec2::new(2.0, 1.0));
    /// ```
    pub fn multiplier(&self) -> DVec2 {
        DVec2::new(self.width as f64, self.height as f64) / TEXTURE_GRID_SIZE
    }
}

/// Texture index → pixel size table.
///
/// Indices are dense: texture `i` is the `i`th entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextureSizeTable(Vec<TextureSize>);

impl TextureSizeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a texture and returns its index.
    pub fn push(&mut self, size: TextureSize) -> u32 {
        let index = self.0.len() as u32;
        self.0.push(size);
        index
    }

    /// Returns the size of a texture, if the index is known.
    #[inline]
    pub fn get(&self, index: u32) -> Option<TextureSize> {
        self.0.get(index as usize).copied()
    }

    /// Returns the grid multiplier of a texture, if the index is known.
    pub fn size_multiplier(&self, index: u32) -> Option<DVec2> {
        self.get(index).map(|size| size.multiplier())
    }

    /// Returns the number of textures.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the table holds no textures.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<TextureSize>> for TextureSizeTable {
    fn from(sizes: Vec<TextureSize>) -> Self {
        Self(sizes)
    }
}

impl FromIterator<TextureSize> for TextureSizeTable {
    fn from_iter<I: IntoIterator<Item = TextureSize>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
