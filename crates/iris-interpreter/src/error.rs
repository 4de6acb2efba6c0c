//! Interpreter error types.

use thiserror::Error;

/// Result type for interpretation operations.
pub type InterpreterResult<T> = Result<T, InterpreterError>;

#[derive(Debug, Error)]
pub enum InterpreterError {
    /// The remote annotation call failed; propagated unchanged, no partial
    /// interpretation is produced.
    #[error("Vision API error: {0}")]
    Vision(#[from] iris_vision::VisionError),

    #[error("Minimum score must be within [0, 1], got {0}")]
    InvalidThreshold(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vision_error_conversion() {
        let err: InterpreterError = iris_vision::VisionError::request_failed("boom").into();
        assert!(matches!(err, InterpreterError::Vision(_)));
    }
}
