//! Mobile phone number extraction.

use crate::models::contact::PhoneEntry;

use super::FieldExtractor;
use super::patterns::MOBILE_PHONE;

/// Mobile number field extractor.
///
/// Matches the domestic 11-digit format in order of appearance. Repeated
/// numbers are kept; the engine never deduplicates.
#[derive(Debug, Default)]
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = PhoneEntry;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        MOBILE_PHONE
            .find_iter(text)
            .map(|m| PhoneEntry::mobile(m.as_str()))
            .collect()
    }
}

/// Extract all mobile numbers from text.
pub fn extract_phones(text: &str) -> Vec<PhoneEntry> {
    PhoneExtractor::new().extract_all(text)
}
