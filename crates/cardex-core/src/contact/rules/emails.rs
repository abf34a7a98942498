//! Email address extraction.

use crate::models::contact::EmailEntry;

use super::FieldExtractor;
use super::patterns::EMAIL;

/// Email address field extractor.
#[derive(Debug, Default)]
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = EmailEntry;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL
            .find_iter(text)
            .map(|m| EmailEntry::personal(m.as_str()))
            .collect()
    }
}

/// Extract all email addresses from text.
pub fn extract_emails(text: &str) -> Vec<EmailEntry> {
    EmailExtractor::new().extract_all(text)
}
