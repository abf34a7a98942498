//! The token contract between the model and the extraction engine.

use serde::{Deserialize, Serialize};

/// One sub-word unit emitted by the model, tagged with a BIO-style label.
///
/// `text` may carry the `##` word-piece continuation marker; the span merger
/// strips it before concatenation. `tag` is either `O` or `<B|I>-<TYPE>`.
/// Offsets are character offsets into the original input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NerToken {
    /// Text fragment of this sub-word unit.
    pub text: String,

    /// BIO-style label (`O`, `B-PER`, `I-ORG`, ...).
    pub tag: String,

    /// Start offset in the original text.
    pub start: usize,

    /// End offset in the original text.
    pub end: usize,
}

impl NerToken {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(text: impl Into<String>, tag: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
            start,
            end,
        }
    }

    /// Whether this token is outside any entity.
    pub fn is_outside(&self) -> bool {
        self.tag == "O"
    }

    /// Whether this token begins a new entity.
    pub fn begins_entity(&self) -> bool {
        self.tag.starts_with("B-")
    }

    /// The entity type part of the tag, if any (`B-PER` -> `PER`).
    pub fn entity_label(&self) -> Option<&str> {
        self.tag
            .strip_prefix("B-")
            .or_else(|| self.tag.strip_prefix("I-"))
    }

    /// Token text with the word-piece continuation marker stripped.
    pub fn fragment(&self) -> &str {
        self.text.strip_prefix("##").unwrap_or(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_label() {
        assert_eq!(NerToken::new("Ali", "B-PER", 0, 3).entity_label(), Some("PER"));
        assert_eq!(NerToken::new("reza", "I-PER", 3, 7).entity_label(), Some("PER"));
        assert_eq!(NerToken::new(",", "O", 7, 8).entity_label(), None);
    }

    #[test]
    fn test_fragment_strips_continuation_marker() {
        assert_eq!(NerToken::new("##zadeh", "I-PER", 5, 10).fragment(), "zadeh");
        assert_eq!(NerToken::new("Ali", "B-PER", 0, 3).fragment(), "Ali");
    }
}
