//! Shared data models for the iris image pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - The `ImageInterpretation` aggregate produced per image
//! - Interpreted annotation parts (objects, texts, dominant colors)
//! - Bounding polygons in pixel and normalized coordinate space
//! - Language/region tags

pub mod interpretation;
pub mod locale;
pub mod polygon;

// Re-export common types
pub use interpretation::{
    ImageInterpretation, InterpretedDominantColor, InterpretedObject, InterpretedText,
};
pub use locale::{Locale, LocaleParseError};
pub use polygon::{InterpretedBoundingPolygon, InterpretedNormalizedVertex, InterpretedVertex};
