//! Confidence normalization and threshold filtering.
//!
//! The upstream schema does not unify its certainty field: entity, object
//! and color annotations carry `score`, while crop hints and OCR pages
//! carry `confidence`. `Scored` normalizes both names into one accessor at
//! the boundary so a single generic filter serves every kind.

use iris_vision::types::{ColorInfo, CropHint, EntityAnnotation, LocalizedObjectAnnotation, Page};

/// Uniform confidence accessor over annotation kinds.
pub trait Scored {
    /// The service's certainty in this annotation, in [0, 1].
    fn confidence(&self) -> f32;
}

impl Scored for EntityAnnotation {
    fn confidence(&self) -> f32 {
        self.score
    }
}

impl Scored for LocalizedObjectAnnotation {
    fn confidence(&self) -> f32 {
        self.score
    }
}

impl Scored for ColorInfo {
    fn confidence(&self) -> f32 {
        self.score
    }
}

impl Scored for CropHint {
    fn confidence(&self) -> f32 {
        self.confidence
    }
}

impl Scored for Page {
    fn confidence(&self) -> f32 {
        self.confidence
    }
}

/// Keep the annotations whose confidence strictly exceeds `minimum_score`,
/// preserving order.
///
/// A confidence equal to the threshold is excluded. Pure and idempotent;
/// no annotation kind is exempt.
pub fn filter_by_confidence<T: Scored>(annotations: Vec<T>, minimum_score: f32) -> Vec<T> {
    annotations
        .into_iter()
        .filter(|annotation| annotation.confidence() > minimum_score)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(description: &str, score: f32) -> EntityAnnotation {
        EntityAnnotation {
            description: description.to_string(),
            score,
            ..Default::default()
        }
    }

    #[test]
    fn test_filter_keeps_order_and_strictly_greater() {
        let labels = vec![label("a", 0.9), label("b", 0.5), label("c", 0.7)];
        let kept = filter_by_confidence(labels, 0.5);
        let names: Vec<_> = kept.iter().map(|l| l.description.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let labels = vec![label("a", 0.9), label("b", 0.4), label("c", 0.7)];
        let once = filter_by_confidence(labels, 0.5);
        let first: Vec<_> = once.iter().map(|l| l.description.clone()).collect();
        let twice = filter_by_confidence(once, 0.5);
        let second: Vec<_> = twice.iter().map(|l| l.description.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_threshold_zero_admits_any_positive_confidence() {
        let labels = vec![label("a", 0.001), label("b", 0.0)];
        let kept = filter_by_confidence(labels, 0.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].description, "a");
    }

    #[test]
    fn test_threshold_one_admits_none() {
        let labels = vec![label("a", 1.0), label("b", 0.99)];
        assert!(filter_by_confidence(labels, 1.0).is_empty());
    }

    #[test]
    fn test_crop_hint_resolves_confidence_field() {
        let hints = vec![
            CropHint {
                confidence: 0.8,
                ..Default::default()
            },
            CropHint {
                confidence: 0.3,
                ..Default::default()
            },
        ];
        let kept = filter_by_confidence(hints, 0.5);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].confidence, 0.8);
    }

    #[test]
    fn test_page_resolves_confidence_field() {
        let pages = vec![
            Page {
                confidence: 0.6,
                ..Default::default()
            },
            Page {
                confidence: 0.6,
                ..Default::default()
            },
        ];
        // Equal to the threshold means excluded.
        assert!(filter_by_confidence(pages, 0.6).is_empty());
    }

    #[test]
    fn test_color_resolves_score_field() {
        let colors = vec![
            ColorInfo {
                score: 0.7,
                ..Default::default()
            },
            ColorInfo {
                score: 0.2,
                ..Default::default()
            },
        ];
        let kept = filter_by_confidence(colors, 0.5);
        assert_eq!(kept.len(), 1);
    }
}
