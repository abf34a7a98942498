//! Error types for the model adapter layer.

use thiserror::Error;

/// Errors that can occur when talking to the NER model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The model has not finished (or failed) its one-time initialization.
    #[error("model is not ready: {0}")]
    NotReady(String),

    /// One-time initialization failed.
    #[error("model initialization failed: {0}")]
    Init(String),

    /// A prediction request failed in transport.
    #[error("model request failed: {0}")]
    Request(String),

    /// The model returned a response the adapter could not decode.
    #[error("invalid model response: {0}")]
    InvalidResponse(String),
}
