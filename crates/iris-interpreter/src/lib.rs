//! Image interpretation on top of the Vision API client.
//!
//! This crate is the translation layer between the raw annotation response
//! and the pipeline's `ImageInterpretation` model:
//! - One uniform confidence accessor over the heterogeneous annotation kinds
//! - A strict greater-than threshold filter applied to every surfaced kind
//! - Bounding polygon translation into the domain representation
//! - The `ImageInterpreter` orchestration and its construction-time factory

pub mod error;
pub mod factory;
pub mod filter;
pub mod interpreter;
pub mod translate;

pub use error::{InterpreterError, InterpreterResult};
pub use factory::{InterpreterConfig, InterpreterFactory, DEFAULT_MINIMUM_SCORE};
pub use filter::{filter_by_confidence, Scored};
pub use interpreter::{ImageInterpreter, REQUESTED_FEATURES};
