//! Translation from the annotation response into the domain model.
//!
//! Pure functions; everything here is testable without a network.

use iris_models::{
    ImageInterpretation, InterpretedBoundingPolygon, InterpretedDominantColor,
    InterpretedNormalizedVertex, InterpretedObject, InterpretedText, InterpretedVertex, Locale,
};
use iris_vision::types::{AnnotateImageResponse, BoundingPoly};

use crate::filter::filter_by_confidence;

/// Weight assumed when the wire omits a color's alpha value.
const OPAQUE_ALPHA: f32 = 1.0;

/// Translate a wire polygon into the domain representation.
///
/// Both vertex lists are mapped 1:1 in order; either may be empty, and
/// vertices are never confidence-filtered.
pub fn translate_bounding_polygon(polygon: &BoundingPoly) -> InterpretedBoundingPolygon {
    InterpretedBoundingPolygon::new(
        polygon
            .vertices
            .iter()
            .map(|vertex| InterpretedVertex::new(vertex.x, vertex.y))
            .collect(),
        polygon
            .normalized_vertices
            .iter()
            .map(|vertex| InterpretedNormalizedVertex::new(vertex.x, vertex.y))
            .collect(),
    )
}

fn polygon_or_empty(polygon: Option<&BoundingPoly>) -> InterpretedBoundingPolygon {
    polygon
        .map(translate_bounding_polygon)
        .unwrap_or_else(|| InterpretedBoundingPolygon::new(vec![], vec![]))
}

/// Build the interpretation aggregate from one annotation response.
///
/// Every surfaced collection passes through the strict greater-than
/// confidence filter; the five surfaced kinds are labels, objects, texts,
/// dominant colors and crop hints, regardless of what was requested.
pub fn build_interpretation(
    response: AnnotateImageResponse,
    minimum_score: f32,
    target_locale: Option<Locale>,
) -> ImageInterpretation {
    let labels = filter_by_confidence(response.label_annotations, minimum_score)
        .into_iter()
        .map(|annotation| annotation.description)
        .collect();

    let objects = filter_by_confidence(response.localized_object_annotations, minimum_score)
        .into_iter()
        .map(|annotation| {
            let polygon = polygon_or_empty(annotation.bounding_poly.as_ref());
            InterpretedObject::new(annotation.name, polygon)
        })
        .collect();

    let texts = filter_by_confidence(response.text_annotations, minimum_score)
        .into_iter()
        .map(|annotation| {
            let polygon = polygon_or_empty(annotation.bounding_poly.as_ref());
            let locale = Locale::from_annotation_tag(&annotation.locale);
            InterpretedText::new(annotation.description, locale, polygon)
        })
        .collect();

    let colors = response
        .image_properties_annotation
        .and_then(|properties| properties.dominant_colors)
        .map(|dominant| dominant.colors)
        .unwrap_or_default();
    let dominant_colors = filter_by_confidence(colors, minimum_score)
        .into_iter()
        .map(|info| {
            InterpretedDominantColor::new(
                info.color.red,
                info.color.green,
                info.color.blue,
                info.color.alpha.unwrap_or(OPAQUE_ALPHA),
            )
        })
        .collect();

    let hints = response
        .crop_hints_annotation
        .map(|annotation| annotation.crop_hints)
        .unwrap_or_default();
    let crop_hints = filter_by_confidence(hints, minimum_score)
        .into_iter()
        .map(|hint| polygon_or_empty(hint.bounding_poly.as_ref()))
        .collect();

    // TODO: derive the aggregate locale from the per-annotation locales
    // instead of the fixed English tag.
    ImageInterpretation::new(
        Locale::english(),
        target_locale,
        labels,
        objects,
        texts,
        dominant_colors,
        crop_hints,
    )
}
