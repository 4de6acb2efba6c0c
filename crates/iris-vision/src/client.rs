//! Vision REST API client.
//!
//! One public operation: `annotate`, a single `images:annotate` POST per
//! invocation. There is no retry and no response caching; any transport,
//! auth, or per-image failure is returned as-is to the caller.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::{Client, RequestBuilder, StatusCode};
use tracing::{debug, info_span, Instrument};

use crate::error::{VisionError, VisionResult};
use crate::metrics::record_request;
use crate::token_cache::TokenCache;
use crate::types::{
    AnnotateImageRequest, AnnotateImageResponse, BatchAnnotateImagesRequest,
    BatchAnnotateImagesResponse, Feature, Image,
};

// =============================================================================
// Configuration
// =============================================================================

/// Default Vision API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://vision.googleapis.com";

/// How the client authenticates against the Vision API.
///
/// Opaque to callers above this crate; the interpreter passes it through
/// unopened.
#[derive(Clone)]
pub enum Credentials {
    /// Path to a service account JSON file, exchanged for OAuth tokens.
    ServiceAccount(PathBuf),
    /// API key sent as the `key` query parameter.
    ApiKey(String),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ServiceAccount(path) => f.debug_tuple("ServiceAccount").field(path).finish(),
            Self::ApiKey(_) => f.write_str("ApiKey(..)"),
        }
    }
}

/// Vision client configuration.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// API endpoint base URL
    pub endpoint: String,
    /// Credentials reference
    pub credentials: Credentials,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl VisionConfig {
    /// Configuration with default endpoint and timeouts.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credentials,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Create config from environment variables.
    ///
    /// `VISION_API_KEY` takes precedence; otherwise
    /// `GOOGLE_APPLICATION_CREDENTIALS` must point to a service account
    /// JSON file.
    pub fn from_env() -> VisionResult<Self> {
        let credentials = if let Ok(key) = std::env::var("VISION_API_KEY") {
            if key.is_empty() {
                return Err(VisionError::auth("VISION_API_KEY cannot be empty"));
            }
            Credentials::ApiKey(key)
        } else {
            let path = std::env::var("GOOGLE_APPLICATION_CREDENTIALS").map_err(|_| {
                VisionError::auth(
                    "VISION_API_KEY or GOOGLE_APPLICATION_CREDENTIALS must be set to access the Vision API",
                )
            })?;
            Credentials::ServiceAccount(PathBuf::from(path))
        };

        let timeout_secs: u64 = std::env::var("VISION_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let connect_timeout_secs: u64 = std::env::var("VISION_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        Ok(Self {
            endpoint: std::env::var("VISION_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            credentials,
            timeout: Duration::from_secs(timeout_secs),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }
}

// =============================================================================
// Client
// =============================================================================

enum Auth {
    Bearer(Arc<TokenCache>),
    ApiKey(String),
}

/// Vision REST API client.
///
/// Construction performs no I/O; service account credentials are loaded on
/// the first request. The client is cheap to clone and safe to share.
pub struct VisionClient {
    http: Client,
    endpoint: String,
    auth: Arc<Auth>,
}

impl Clone for VisionClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            endpoint: self.endpoint.clone(),
            auth: Arc::clone(&self.auth),
        }
    }
}

impl VisionClient {
    /// Create a new Vision client.
    pub fn new(config: VisionConfig) -> VisionResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .user_agent(concat!("iris-vision/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(VisionError::Network)?;

        let auth = match config.credentials {
            Credentials::ServiceAccount(path) => Auth::Bearer(Arc::new(TokenCache::new(path))),
            Credentials::ApiKey(key) => Auth::ApiKey(key),
        };

        Ok(Self {
            http,
            endpoint: config.endpoint,
            auth: Arc::new(auth),
        })
    }

    /// Create from environment variables.
    pub fn from_env() -> VisionResult<Self> {
        Self::new(VisionConfig::from_env()?)
    }

    /// Annotate one image with the given features.
    ///
    /// Issues exactly one `images:annotate` call and returns the single
    /// per-image result, or the first error encountered.
    pub async fn annotate(
        &self,
        image: &[u8],
        features: &[Feature],
    ) -> VisionResult<AnnotateImageResponse> {
        let url = format!("{}/v1/images:annotate", self.endpoint);
        let body = BatchAnnotateImagesRequest {
            requests: vec![AnnotateImageRequest {
                image: Image {
                    content: BASE64.encode(image),
                },
                features: features.to_vec(),
            }],
        };

        debug!(image_bytes = image.len(), "Sending annotation request to {}", url);

        self.execute_request("annotate", async {
            let request = self.apply_auth(self.http.post(&url).json(&body)).await?;
            let response = request.send().await?;
            let status = response.status();

            if !status.is_success() {
                return Err(Self::handle_error_response(status, &url, response).await);
            }

            let batch: BatchAnnotateImagesResponse = response.json().await?;
            let annotation = batch
                .responses
                .into_iter()
                .next()
                .ok_or_else(|| VisionError::invalid_response("empty responses array"))?;

            if let Some(error) = annotation.error {
                return Err(VisionError::Annotation {
                    code: error.code,
                    message: error.message,
                });
            }

            Ok(annotation)
        })
        .await
    }

    async fn apply_auth(&self, request: RequestBuilder) -> VisionResult<RequestBuilder> {
        match self.auth.as_ref() {
            Auth::ApiKey(key) => Ok(request.query(&[("key", key.as_str())])),
            Auth::Bearer(cache) => {
                let token = cache.get_token().await?;
                Ok(request.bearer_auth(token))
            }
        }
    }

    /// Wrap a request future with a tracing span and request metrics.
    async fn execute_request<T, F>(&self, operation: &str, fut: F) -> VisionResult<T>
    where
        F: Future<Output = VisionResult<T>>,
    {
        let span = info_span!("vision_request", operation = %operation);

        let start = Instant::now();
        let result = fut.instrument(span).await;
        let latency_ms = start.elapsed().as_millis() as f64;

        let status = match &result {
            Ok(_) => 200,
            Err(e) => e.http_status().unwrap_or(500),
        };
        record_request(operation, status, latency_ms);

        result
    }

    async fn handle_error_response(
        status: StatusCode,
        url: &str,
        response: reqwest::Response,
    ) -> VisionError {
        let body = response.text().await.unwrap_or_default();
        VisionError::from_http_status(status.as_u16(), format!("{} failed: {}", url, body))
    }
}

// =============================================================================
// Tests
// =============================================================================
