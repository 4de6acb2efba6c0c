//! The interpretation aggregate produced for each analyzed image.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::polygon::InterpretedBoundingPolygon;

/// A detected object with its spatial region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InterpretedObject {
    /// Object name (e.g. "Bicycle").
    pub name: String,
    /// Region of the image the object occupies.
    pub bounding_polygon: InterpretedBoundingPolygon,
}

impl InterpretedObject {
    pub fn new(name: impl Into<String>, bounding_polygon: InterpretedBoundingPolygon) -> Self {
        Self {
            name: name.into(),
            bounding_polygon,
        }
    }
}

/// A recognized text block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InterpretedText {
    /// The recognized text.
    pub text: String,
    /// Language the text was detected in, when determined.
    pub locale: Option<Locale>,
    /// Region of the image the text occupies.
    pub bounding_polygon: InterpretedBoundingPolygon,
}

impl InterpretedText {
    pub fn new(
        text: impl Into<String>,
        locale: Option<Locale>,
        bounding_polygon: InterpretedBoundingPolygon,
    ) -> Self {
        Self {
            text: text.into(),
            locale,
            bounding_polygon,
        }
    }
}

/// A dominant color of the image.
///
/// Channel values are in the 0-255 range; alpha is the color's weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InterpretedDominantColor {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl InterpretedDominantColor {
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

/// The normalized result of interpreting one image.
///
/// Constructed exactly once per interpretation call and not mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImageInterpretation {
    /// Locale the interpretation was produced in.
    pub locale: Locale,
    /// Locale the caller asked to interpret towards, when given.
    pub target_locale: Option<Locale>,
    /// Detected label descriptions.
    pub labels: Vec<String>,
    /// Detected localized objects.
    pub objects: Vec<InterpretedObject>,
    /// Recognized text blocks.
    pub texts: Vec<InterpretedText>,
    /// Dominant image colors.
    pub dominant_colors: Vec<InterpretedDominantColor>,
    /// Suggested crop regions.
    pub crop_hints: Vec<InterpretedBoundingPolygon>,
}

impl ImageInterpretation {
    pub fn new(
        locale: Locale,
        target_locale: Option<Locale>,
        labels: Vec<String>,
        objects: Vec<InterpretedObject>,
        texts: Vec<InterpretedText>,
        dominant_colors: Vec<InterpretedDominantColor>,
        crop_hints: Vec<InterpretedBoundingPolygon>,
    ) -> Self {
        Self {
            locale,
            target_locale,
            labels,
            objects,
            texts,
            dominant_colors,
            crop_hints,
        }
    }
}
