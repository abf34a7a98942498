//! Core library for cardex contact extraction.
//!
//! This crate provides:
//! - BIO tag-stream decoding into entity spans
//! - Entity-to-field classification (person names, organization)
//! - Rule-based extraction of Iranian mobile numbers, email addresses, and
//!   Persian job-title keywords
//! - Residual-notes reduction and contact assembly

pub mod contact;
pub mod error;
pub mod models;
pub mod ner;

pub use contact::{ContactExtractor, ContactParser, ExtractionOutcome, ExtractionStatus};
pub use error::{CardexError, Result};
pub use models::contact::{EmailEntry, ExtractedContactInfo, PhoneEntry, SocialLink};
pub use ner::{EntityKind, EntitySpan, SpanMerger};

/// Re-export the model adapter contract.
pub use cardex_model::{ModelError, ModelHandle, ModelLoader, NerModel, NerToken};
