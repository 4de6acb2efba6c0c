//! Vision REST API wire types.
//!
//! Mirrors the `images:annotate` v1 schema for the consumed subset. The
//! wire omits zero-valued numeric fields, so every numeric carries a serde
//! default; collections absent from a response deserialize as empty.

use serde::{Deserialize, Serialize};

/// Detection kinds that can be requested per image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureType {
    FaceDetection,
    LandmarkDetection,
    LogoDetection,
    LabelDetection,
    TextDetection,
    DocumentTextDetection,
    SafeSearchDetection,
    ImageProperties,
    CropHints,
    WebDetection,
    ProductSearch,
    ObjectLocalization,
}

/// A requested detection feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: FeatureType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl Feature {
    /// A feature request with the service-side default result limit.
    pub fn new(feature_type: FeatureType) -> Self {
        Self {
            feature_type,
            max_results: None,
        }
    }
}

/// Image payload, inlined as base64 content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub content: String,
}

/// One annotation request within a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageRequest {
    pub image: Image,
    pub features: Vec<Feature>,
}

/// The `images:annotate` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnnotateImagesRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

/// The `images:annotate` response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnnotateImagesResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

/// Annotation results for one image.
///
/// Only the collections the pipeline consumes are modeled; other requested
/// kinds (faces, landmarks, logos, safe search, web detection, product
/// search) are tolerated and dropped during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_annotations: Vec<EntityAnnotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_annotations: Vec<EntityAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_text_annotation: Option<TextAnnotation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub localized_object_annotations: Vec<LocalizedObjectAnnotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_properties_annotation: Option<ImageProperties>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_hints_annotation: Option<CropHintsAnnotation>,
    /// Per-image error; set when this image's annotation failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
}

/// A detected entity (label or OCR text block).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityAnnotation {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<BoundingPoly>,
}

/// A detected object with a normalized bounding polygon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedObjectAnnotation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<BoundingPoly>,
}

/// Structured OCR output for document text detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnnotation {
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(default)]
    pub text: String,
}

/// One page of structured OCR output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub width: i32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub confidence: f32,
}

/// Bounding polygon in pixel and/or normalized coordinates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingPoly {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<Vertex>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub normalized_vertices: Vec<NormalizedVertex>,
}

/// A vertex in pixel coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

/// A vertex in normalized (0-1) coordinates.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct NormalizedVertex {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Image properties annotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dominant_colors: Option<DominantColorsAnnotation>,
}

/// Dominant colors of an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantColorsAnnotation {
    #[serde(default)]
    pub colors: Vec<ColorInfo>,
}

/// A dominant color with its share of the image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub pixel_fraction: f32,
}

/// RGBA color; channels are 0-255, alpha is a wrapped 0-1 float the wire
/// omits when unset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Color {
    #[serde(default)]
    pub red: f32,
    #[serde(default)]
    pub green: f32,
    #[serde(default)]
    pub blue: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
}

/// A suggested crop region.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropHint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<BoundingPoly>,
    #[serde(default)]
    pub confidence: f32,
}

/// Crop hints annotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropHintsAnnotation {
    #[serde(default)]
    pub crop_hints: Vec<CropHint>,
}

/// `google.rpc.Status` as returned per failed image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Status {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&FeatureType::LabelDetection).unwrap(),
            "\"LABEL_DETECTION\""
        );
        assert_eq!(
            serde_json::to_string(&FeatureType::DocumentTextDetection).unwrap(),
            "\"DOCUMENT_TEXT_DETECTION\""
        );
        assert_eq!(
            serde_json::to_string(&FeatureType::ObjectLocalization).unwrap(),
            "\"OBJECT_LOCALIZATION\""
        );
    }

    #[test]
    fn test_request_shape() {
        let request = BatchAnnotateImagesRequest {
            requests: vec![AnnotateImageRequest {
                image: Image {
                    content: "aW1hZ2U=".to_string(),
                },
                features: vec![Feature::new(FeatureType::CropHints)],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["requests"][0]["image"]["content"], "aW1hZ2U=");
        assert_eq!(json["requests"][0]["features"][0]["type"], "CROP_HINTS");
        assert!(json["requests"][0]["features"][0].get("maxResults").is_none());
    }

    #[test]
    fn test_response_deserializes_gcv_fixture() {
        // Trimmed from a real images:annotate response; note the omitted
        // zero-valued vertex coordinates.
        let body = r#"{
            "responses": [{
                "labelAnnotations": [
                    {"mid": "/m/01bqvp", "description": "Sky", "score": 0.98, "topicality": 0.98}
                ],
                "textAnnotations": [
                    {"locale": "en", "description": "STOP", "score": 0.91,
                     "boundingPoly": {"vertices": [{"x": 10, "y": 4}, {"x": 60, "y": 4}, {"x": 60, "y": 20}, {"y": 20}]}}
                ],
                "localizedObjectAnnotations": [
                    {"mid": "/m/0199g", "name": "Bicycle", "score": 0.89,
                     "boundingPoly": {"normalizedVertices": [{"x": 0.1, "y": 0.2}, {"x": 0.9}, {"x": 0.9, "y": 0.8}, {"y": 0.8}]}}
                ],
                "imagePropertiesAnnotation": {
                    "dominantColors": {"colors": [
                        {"color": {"red": 10, "green": 20, "blue": 30}, "score": 0.42, "pixelFraction": 0.11}
                    ]}
                },
                "cropHintsAnnotation": {"cropHints": [
                    {"boundingPoly": {"vertices": [{}, {"x": 100}, {"x": 100, "y": 100}, {"y": 100}]},
                     "confidence": 0.7, "importanceFraction": 0.6}
                ]}
            }]
        }"#;

        let parsed: BatchAnnotateImagesResponse = serde_json::from_str(body).unwrap();
        let response = &parsed.responses[0];

        assert_eq!(response.label_annotations[0].description, "Sky");
        assert_eq!(response.label_annotations[0].locale, "");

        let text = &response.text_annotations[0];
        assert_eq!(text.locale, "en");
        let vertices = &text.bounding_poly.as_ref().unwrap().vertices;
        assert_eq!(vertices.len(), 4);
        assert_eq!((vertices[3].x, vertices[3].y), (0, 20));

        let object = &response.localized_object_annotations[0];
        assert_eq!(object.name, "Bicycle");
        let normalized = &object.bounding_poly.as_ref().unwrap().normalized_vertices;
        assert_eq!(normalized[1].y, 0.0);

        let colors = &response
            .image_properties_annotation
            .as_ref()
            .unwrap()
            .dominant_colors
            .as_ref()
            .unwrap()
            .colors;
        assert_eq!(colors[0].color.red, 10.0);
        assert_eq!(colors[0].color.alpha, None);

        let hints = &response.crop_hints_annotation.as_ref().unwrap().crop_hints;
        assert_eq!(hints[0].confidence, 0.7);
        assert!(response.error.is_none());
    }

    #[test]
    fn test_response_with_error_status() {
        let body = r#"{"responses": [{"error": {"code": 3, "message": "Bad image data."}}]}"#;
        let parsed: BatchAnnotateImagesResponse = serde_json::from_str(body).unwrap();
        let error = parsed.responses[0].error.as_ref().unwrap();
        assert_eq!(error.code, 3);
        assert_eq!(error.message, "Bad image data.");
    }

    #[test]
    fn test_empty_response_collections_default() {
        let parsed: BatchAnnotateImagesResponse = serde_json::from_str(r#"{"responses": [{}]}"#).unwrap();
        let response = &parsed.responses[0];
        assert!(response.label_annotations.is_empty());
        assert!(response.text_annotations.is_empty());
        assert!(response.localized_object_annotations.is_empty());
        assert!(response.image_properties_annotation.is_none());
        assert!(response.crop_hints_annotation.is_none());
    }
}
