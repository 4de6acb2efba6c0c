//! Bounding polygons in pixel and normalized coordinate space.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A polygon vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InterpretedVertex {
    pub x: i32,
    pub y: i32,
}

impl InterpretedVertex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A polygon vertex in normalized coordinates (0.0 = left/top, 1.0 = right/bottom).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InterpretedNormalizedVertex {
    pub x: f64,
    pub y: f64,
}

impl InterpretedNormalizedVertex {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The spatial region of an annotation.
///
/// Both vertex lists describe the same polygon; annotation kinds populate
/// one or both coordinate spaces, so either list may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InterpretedBoundingPolygon {
    /// Ordered vertices in pixel coordinates.
    pub vertices: Vec<InterpretedVertex>,
    /// Ordered vertices in normalized coordinates.
    pub normalized_vertices: Vec<InterpretedNormalizedVertex>,
}

impl InterpretedBoundingPolygon {
    pub fn new(
        vertices: Vec<InterpretedVertex>,
        normalized_vertices: Vec<InterpretedNormalizedVertex>,
    ) -> Self {
        Self {
            vertices,
            normalized_vertices,
        }
    }

    /// Check that the two coordinate spaces agree on the vertex count.
    ///
    /// Only meaningful when both lists are populated; a polygon with a
    /// single populated space is always coherent.
    pub fn is_coherent(&self) -> bool {
        self.vertices.is_empty()
            || self.normalized_vertices.is_empty()
            || self.vertices.len() == self.normalized_vertices.len()
    }

    /// True when neither coordinate space has vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.normalized_vertices.is_empty()
    }
}
