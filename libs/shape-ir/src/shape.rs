//! # Shape
//!
//! Root container handed to the tesselator: the element forest plus the
//! texture size table its faces reference.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::texture::TextureSizeTable;

/// A complete model description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    /// Root elements in document order.
    #[serde(default)]
    pub elements: Vec<Element>,
    /// Pixel size of every texture referenced by faces.
    #[serde(default)]
    pub texture_sizes: TextureSizeTable,
}

impl Shape {
    /// Creates a shape from its root elements and texture table.
    pub fn new(elements: Vec<Element>, texture_sizes: TextureSizeTable) -> Self {
        Self {
            elements,
            texture_sizes,
        }
    }

    /// Counts every element in the forest.
    pub fn element_count(&self) -> usize {
        self.elements.iter().map(Element::subtree_len).sum()
    }

    /// Returns the deepest nesting level; zero for an empty shape.
    pub fn depth(&self) -> usize {
        self.elements.iter().map(Element::depth).max().unwrap_or(0)
    }
}
