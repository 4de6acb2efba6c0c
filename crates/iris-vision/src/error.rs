//! Vision client error types.

use thiserror::Error;

/// Result type for Vision API operations.
pub type VisionResult<T> = Result<T, VisionError>;

/// Errors that can occur while calling the Vision API.
///
/// Every variant is a single fatal outcome for the call that produced it;
/// the client performs no retries.
#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Annotation failed with status {code}: {message}")]
    Annotation { code: i32, message: String },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Server error {0}: {1}")]
    ServerError(u16, String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl VisionError {
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::RequestFailed(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Self::InvalidResponse(msg.into())
    }

    /// Map an HTTP status to an error variant.
    pub fn from_http_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Auth(message),
            429 => Self::RateLimited(message),
            500..=599 => Self::ServerError(status, message),
            _ => Self::RequestFailed(message),
        }
    }

    /// HTTP status associated with this error, where one exists.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Auth(_) => Some(401),
            Self::RateLimited(_) => Some(429),
            Self::ServerError(status, _) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_http_status_401() {
        let err = VisionError::from_http_status(401, "unauthenticated");
        assert!(matches!(err, VisionError::Auth(_)));
    }

    #[test]
    fn test_from_http_status_403() {
        let err = VisionError::from_http_status(403, "permission denied");
        assert!(matches!(err, VisionError::Auth(_)));
    }

    #[test]
    fn test_from_http_status_429() {
        let err = VisionError::from_http_status(429, "quota exceeded");
        assert!(matches!(err, VisionError::RateLimited(_)));
        assert_eq!(err.http_status(), Some(429));
    }

    #[test]
    fn test_from_http_status_500() {
        let err = VisionError::from_http_status(500, "internal error");
        assert!(matches!(err, VisionError::ServerError(500, _)));
        assert_eq!(err.http_status(), Some(500));
    }

    #[test]
    fn test_from_http_status_400() {
        let err = VisionError::from_http_status(400, "bad image payload");
        assert!(matches!(err, VisionError::RequestFailed(_)));
        assert_eq!(err.http_status(), None);
    }
}
