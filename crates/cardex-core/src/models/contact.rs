//! Contact data models matching the contact-form wire shape.

use serde::{Deserialize, Serialize};

/// Default category for phone numbers found by the mobile-number rule.
pub const DEFAULT_PHONE_TYPE: &str = "mobile";

/// Default category for email addresses found by the email rule.
pub const DEFAULT_EMAIL_TYPE: &str = "personal";

/// The assembled result of one extraction call.
///
/// Constructed fresh per call; immutable once returned. All string fields
/// default to empty, the lists to empty vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedContactInfo {
    /// Given name.
    pub first_name: String,

    /// Family name.
    pub last_name: String,

    /// Employer or organization.
    pub company: String,

    /// Job title keyword.
    pub position: String,

    /// Phone numbers in order of appearance, duplicates included.
    pub phone_numbers: Vec<PhoneEntry>,

    /// Email addresses in order of appearance, duplicates included.
    pub email_addresses: Vec<EmailEntry>,

    /// Reserved for future extractors; no current extractor populates it.
    pub social_links: Vec<SocialLink>,

    /// Residual text after removing all extracted substrings.
    pub notes: String,
}

impl ExtractedContactInfo {
    /// The failure-shaped result: all fields default, the caller's text
    /// preserved verbatim in `notes`.
    pub fn fallback(text: &str) -> Self {
        Self {
            notes: text.to_string(),
            ..Self::default()
        }
    }

    /// Whether any structured field was filled.
    pub fn has_structured_fields(&self) -> bool {
        !self.first_name.is_empty()
            || !self.last_name.is_empty()
            || !self.company.is_empty()
            || !self.position.is_empty()
            || !self.phone_numbers.is_empty()
            || !self.email_addresses.is_empty()
    }
}

/// One extracted phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneEntry {
    /// Category; the engine never infers it from context.
    pub phone_type: String,

    /// The number exactly as matched in the text.
    pub phone_number: String,

    /// Always `None` from this engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl PhoneEntry {
    /// Wrap a matched number with the default category.
    pub fn mobile(number: impl Into<String>) -> Self {
        Self {
            phone_type: DEFAULT_PHONE_TYPE.to_string(),
            phone_number: number.into(),
            extension: None,
        }
    }
}

/// One extracted email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailEntry {
    /// Category; the engine never infers it from context.
    pub email_type: String,

    /// The address exactly as matched in the text.
    pub email_address: String,
}

impl EmailEntry {
    /// Wrap a matched address with the default category.
    pub fn personal(address: impl Into<String>) -> Self {
        Self {
            email_type: DEFAULT_EMAIL_TYPE.to_string(),
            email_address: address.into(),
        }
    }
}

/// A social profile link. Reserved; no extractor emits these yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Link category (e.g. a network name).
    pub link_type: String,

    /// Profile URL.
    pub url: String,
}
