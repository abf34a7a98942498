//! Contact extraction orchestrator.
//!
//! One pass per call: tokens from the model adapter, span merging, entity
//! classification, then the model-independent rule extractors, residual
//! reduction, and assembly. Model failure degrades to the failure-shaped
//! result -- the rule extractors are deliberately not attempted in that case,
//! so a partial result is never presented as a complete one.

use std::fmt;
use std::time::Instant;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use cardex_model::{ModelHandle, NerToken};

use crate::error::{CardexError, Result};
use crate::models::contact::ExtractedContactInfo;
use crate::ner::SpanMerger;

use super::ContactExtractor;
use super::classify::classify;
use super::residual::reduce_notes;
use super::rules::{extract_emails, extract_phones, extract_position};

/// Terminal state of one extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStatus {
    /// The full pipeline ran.
    Complete,
    /// The model never became available; nothing beyond the fallback ran.
    ModelUnavailable,
    /// The model failed during the call; nothing beyond the fallback ran.
    ModelFailed,
}

impl ExtractionStatus {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl fmt::Display for ExtractionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::ModelUnavailable => write!(f, "model unavailable"),
            Self::ModelFailed => write!(f, "model failed"),
        }
    }
}

/// Result of one contact extraction call.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    /// Extracted contact data. On failure this is the all-empty shape with
    /// the caller's text preserved in `notes`.
    pub info: ExtractedContactInfo,
    /// Terminal status; the out-of-band failure indication.
    pub status: ExtractionStatus,
    /// The original input text.
    pub raw_text: String,
    /// Extraction warnings (model failure causes, empty model output, ...).
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Contact extraction pipeline over a shared NER model handle.
pub struct ContactParser {
    handle: ModelHandle,
    merger: SpanMerger,
}

impl ContactParser {
    /// Create a parser with strict BIO continuation.
    pub fn new(handle: ModelHandle) -> Self {
        Self {
            handle,
            merger: SpanMerger::new(),
        }
    }

    /// Use suffix-matching tag continuation instead of strict `I-<TYPE>`
    /// matching. See `SpanMerger::with_loose_continuation`.
    pub fn with_loose_continuation(mut self, loose: bool) -> Self {
        self.merger = self.merger.with_loose_continuation(loose);
        self
    }

    async fn model_tokens(&self, text: &str) -> Result<Vec<NerToken>> {
        let model = self.handle.get().await?;
        let tokens = model.predict(text).await.map_err(CardexError::Model)?;
        Ok(tokens)
    }

    fn assemble(&self, text: &str, tokens: &[NerToken], warnings: &mut Vec<String>) -> ExtractedContactInfo {
        if tokens.is_empty() {
            // Valid model output: no entities, the rule extractors still run.
            warnings.push("model returned no tokens".to_string());
        }

        let spans = self.merger.merge(tokens);
        debug!("merged {} tokens into {} spans", tokens.len(), spans.len());

        let names = classify(&spans);
        let phone_numbers = extract_phones(text);
        let email_addresses = extract_emails(text);
        let position = extract_position(text).unwrap_or_default();

        let mut removals: Vec<&str> = vec![
            names.first_name.as_str(),
            names.last_name.as_str(),
            names.company.as_str(),
            position.as_str(),
        ];
        removals.extend(phone_numbers.iter().map(|p| p.phone_number.as_str()));
        removals.extend(email_addresses.iter().map(|e| e.email_address.as_str()));
        let notes = reduce_notes(text, removals);

        ExtractedContactInfo {
            first_name: names.first_name,
            last_name: names.last_name,
            company: names.company,
            position,
            phone_numbers,
            email_addresses,
            social_links: Vec::new(),
            notes,
        }
    }
}

#[async_trait]
impl ContactExtractor for ContactParser {
    async fn extract(&self, text: &str) -> ExtractionOutcome {
        let start = Instant::now();
        let mut warnings = Vec::new();

        if text.trim().is_empty() {
            return ExtractionOutcome {
                info: ExtractedContactInfo::default(),
                status: ExtractionStatus::Complete,
                raw_text: text.to_string(),
                warnings,
                processing_time_ms: start.elapsed().as_millis() as u64,
            };
        }

        info!("extracting contact info from {} characters", text.chars().count());

        let tokens = match self.model_tokens(text).await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!("model call failed: {e}");
                let status = if e.is_model_unavailable() {
                    ExtractionStatus::ModelUnavailable
                } else {
                    ExtractionStatus::ModelFailed
                };
                warnings.push(e.to_string());
                return ExtractionOutcome {
                    info: ExtractedContactInfo::fallback(text),
                    status,
                    raw_text: text.to_string(),
                    warnings,
                    processing_time_ms: start.elapsed().as_millis() as u64,
                };
            }
        };

        let info = self.assemble(text, &tokens, &mut warnings);

        debug!(
            "extraction complete: name={:?} {:?}, {} phones, {} emails",
            info.first_name,
            info.last_name,
            info.phone_numbers.len(),
            info.email_addresses.len()
        );

        ExtractionOutcome {
            info,
            status: ExtractionStatus::Complete,
            raw_text: text.to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
