//! Rule-based field extractors for contact text.
//!
//! These run over the raw input text and do not depend on the model pipeline.

pub mod emails;
pub mod patterns;
pub mod phones;
pub mod positions;

pub use emails::{EmailExtractor, extract_emails};
pub use phones::{PhoneExtractor, extract_phones};
pub use positions::{POSITION_KEYWORDS, PositionExtractor, extract_position};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, in order of appearance.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
