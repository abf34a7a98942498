//! NER model adapter boundary for cardex.
//!
//! The extraction engine treats the named-entity model as an opaque function:
//! text in, an ordered list of labeled sub-word tokens out. This crate owns
//! that contract:
//! - `NerToken` - the wire shape of one model emission
//! - `NerModel` - the async adapter trait
//! - `ModelHandle` - initialize-once, reuse-thereafter access to a model
//! - `HttpModel` - adapter for a hosted model endpoint

mod error;
mod handle;
mod http;
mod token;

pub use error::ModelError;
pub use handle::{ModelHandle, ModelLoader};
pub use http::{HttpModel, HttpModelLoader};
pub use token::NerToken;

use async_trait::async_trait;

/// Result type for model adapter operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Trait for NER model adapters.
///
/// Implementations wrap whatever actually runs the model (a hosted endpoint,
/// an in-process runtime, a fixture in tests). The engine only consumes the
/// token stream.
#[async_trait]
pub trait NerModel: Send + Sync {
    /// Run the model on `text` and return its sub-word tokens in order.
    ///
    /// An empty token list is a valid output, not an error.
    async fn predict(&self, text: &str) -> Result<Vec<NerToken>>;
}
