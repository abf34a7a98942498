//! Contact field extraction module.

mod classify;
mod parser;
mod residual;
pub mod rules;

pub use classify::{NameFields, classify};
pub use parser::{ContactParser, ExtractionOutcome, ExtractionStatus};
pub use residual::reduce_notes;

use async_trait::async_trait;

/// Trait for contact extractors.
///
/// `extract` never fails outright: every failure is absorbed into the
/// outcome's status so callers decide how (and whether) to surface it.
#[async_trait]
pub trait ContactExtractor {
    /// Extract contact information from a block of free text.
    async fn extract(&self, text: &str) -> ExtractionOutcome;
}
