//! Error types for the cardex-core library.
//!
//! The public `extract` entry point absorbs all failures into an
//! `ExtractionOutcome`; these types circulate internally and are available to
//! callers that want the underlying cause.

use thiserror::Error;

use cardex_model::ModelError;

/// Main error type for the cardex library.
#[derive(Error, Debug)]
pub enum CardexError {
    /// Model adapter error.
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl CardexError {
    /// Whether this failure means the model never became available, as
    /// opposed to failing during a call.
    pub fn is_model_unavailable(&self) -> bool {
        matches!(
            self,
            CardexError::Model(ModelError::NotReady(_)) | CardexError::Model(ModelError::Init(_))
        )
    }
}

/// Result type for the cardex library.
pub type Result<T> = std::result::Result<T, CardexError>;
