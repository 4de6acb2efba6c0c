//! Construction-time wiring for the interpreter.

use iris_vision::{Credentials, VisionClient, VisionConfig};

use crate::error::{InterpreterError, InterpreterResult};
use crate::interpreter::ImageInterpreter;

/// Threshold applied when none is configured.
pub const DEFAULT_MINIMUM_SCORE: f32 = 0.5;

/// Immutable interpreter configuration.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    /// Vision client configuration, including the credentials reference.
    pub vision: VisionConfig,
    /// Confidence threshold in [0, 1]; annotations at or below it are
    /// dropped from every surfaced kind.
    pub minimum_score: f32,
}

impl InterpreterConfig {
    /// Create config from environment variables.
    pub fn from_env() -> InterpreterResult<Self> {
        let minimum_score: f32 = std::env::var("VISION_MIN_SCORE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MINIMUM_SCORE);

        Ok(Self {
            vision: VisionConfig::from_env()?,
            minimum_score,
        })
    }
}

/// Builds configured interpreters.
///
/// Pure construction: no I/O happens until the first interpretation call.
pub struct InterpreterFactory;

impl InterpreterFactory {
    /// Create an interpreter from a credentials reference and a threshold,
    /// using default endpoint and timeouts.
    pub fn create(
        credentials: Credentials,
        minimum_score: f32,
    ) -> InterpreterResult<ImageInterpreter> {
        Self::with_config(InterpreterConfig {
            vision: VisionConfig::new(credentials),
            minimum_score,
        })
    }

    /// Create an interpreter from full configuration.
    pub fn with_config(config: InterpreterConfig) -> InterpreterResult<ImageInterpreter> {
        if !(0.0..=1.0).contains(&config.minimum_score) {
            return Err(InterpreterError::InvalidThreshold(config.minimum_score));
        }

        let client = VisionClient::new(config.vision)?;
        Ok(ImageInterpreter::new(client, config.minimum_score))
    }

    /// Create an interpreter from environment variables.
    pub fn from_env() -> InterpreterResult<ImageInterpreter> {
        Self::with_config(InterpreterConfig::from_env()?)
    }
}
