//! Google Cloud Vision REST API client.
//!
//! This crate provides:
//! - Typed wire structs for the `images:annotate` endpoint
//! - Service account authentication via gcp_auth with token caching,
//!   or API key authentication
//! - A typed error taxonomy mapped from HTTP and per-image statuses

pub mod client;
pub mod error;
pub mod metrics;
pub mod token_cache;
pub mod types;

pub use client::{Credentials, VisionClient, VisionConfig};
pub use error::{VisionError, VisionResult};
pub use types::{AnnotateImageResponse, Feature, FeatureType};
