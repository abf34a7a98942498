//! Compiled regex patterns for contact field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Iranian mobile number: 11 digits, 09 prefix. Domestic format only.
    pub static ref MOBILE_PHONE: Regex = Regex::new(r"\b09\d{9}\b").unwrap();

    // local-part@domain.tld with at least one dot in the domain.
    pub static ref EMAIL: Regex = Regex::new(
        r"[A-Za-z0-9._-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_pattern_matches_domestic_format_only() {
        assert!(MOBILE_PHONE.is_match("09123456789"));
        assert!(!MOBILE_PHONE.is_match("0912345678")); // 10 digits
        assert!(!MOBILE_PHONE.is_match("091234567890")); // 12 digits
        assert!(!MOBILE_PHONE.is_match("+989123456789")); // international
        assert!(!MOBILE_PHONE.is_match("02123456789")); // landline prefix
    }

    #[test]
    fn test_email_pattern_requires_dotted_domain() {
        assert!(EMAIL.is_match("john.doe@example.com"));
        assert!(!EMAIL.is_match("john@"));
        assert!(!EMAIL.is_match("john@example"));
    }
}
