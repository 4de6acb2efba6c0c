//! The image interpreter.

use iris_models::{ImageInterpretation, Locale};
use iris_vision::{Feature, FeatureType, VisionClient};
use tracing::debug;

use crate::error::InterpreterResult;
use crate::translate::build_interpretation;

/// Detection kinds requested on every interpretation call.
///
/// Deliberately broader than the five surfaced kinds: the remaining
/// detections are requested for cost/latency parity with the previous
/// provider integration and dropped during mapping. Callers must not
/// assume symmetry between requested and surfaced kinds.
pub const REQUESTED_FEATURES: [FeatureType; 12] = [
    FeatureType::FaceDetection,
    FeatureType::LandmarkDetection,
    FeatureType::LogoDetection,
    FeatureType::LabelDetection,
    FeatureType::TextDetection,
    FeatureType::DocumentTextDetection,
    FeatureType::SafeSearchDetection,
    FeatureType::ImageProperties,
    FeatureType::CropHints,
    FeatureType::WebDetection,
    FeatureType::ProductSearch,
    FeatureType::ObjectLocalization,
];

/// Interprets images through the Vision API.
///
/// Stateless apart from its two immutable fields; a single instance can be
/// shared across tasks.
#[derive(Clone)]
pub struct ImageInterpreter {
    client: VisionClient,
    minimum_score: f32,
}

impl ImageInterpreter {
    /// Create an interpreter over an existing client.
    pub fn new(client: VisionClient, minimum_score: f32) -> Self {
        Self {
            client,
            minimum_score,
        }
    }

    /// The configured confidence threshold.
    pub fn minimum_score(&self) -> f32 {
        self.minimum_score
    }

    /// Interpret one image.
    ///
    /// Performs exactly one remote annotation call; a transport or auth
    /// failure propagates unchanged and no partial result is returned.
    pub async fn interpret_image(
        &self,
        image: &[u8],
        target_locale: Option<Locale>,
    ) -> InterpreterResult<ImageInterpretation> {
        let features: Vec<Feature> = REQUESTED_FEATURES.into_iter().map(Feature::new).collect();

        debug!(
            minimum_score = self.minimum_score,
            image_bytes = image.len(),
            "Interpreting image"
        );

        let response = self.client.annotate(image, &features).await?;
        Ok(build_interpretation(
            response,
            self.minimum_score,
            target_locale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_features_cover_all_kinds_once() {
        assert_eq!(REQUESTED_FEATURES.len(), 12);
        for (i, feature) in REQUESTED_FEATURES.iter().enumerate() {
            assert!(
                !REQUESTED_FEATURES[..i].contains(feature),
                "duplicate feature {:?}",
                feature
            );
        }
    }

    #[test]
    fn test_requested_set_is_broader_than_surfaced_set() {
        assert!(REQUESTED_FEATURES.contains(&FeatureType::FaceDetection));
        assert!(REQUESTED_FEATURES.contains(&FeatureType::WebDetection));
        assert!(REQUESTED_FEATURES.contains(&FeatureType::ProductSearch));
    }
}
