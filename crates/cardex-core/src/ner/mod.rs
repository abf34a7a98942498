//! Decoding of the model's BIO tag stream into entity spans.

mod spans;

pub use spans::SpanMerger;

use cardex_model::NerToken;

/// Domain entity types the classifier cares about.
///
/// Anything else the model emits (locations, dates, ...) is carried through
/// as `Other` and ignored downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Organization,
    Other(String),
}

impl EntityKind {
    /// Map a tag suffix (`PER`, `ORGANIZATION`, ...) to a kind.
    pub fn from_label(label: &str) -> Self {
        match label {
            "PER" | "PERSON" => Self::Person,
            "ORG" | "ORGANIZATION" => Self::Organization,
            other => Self::Other(other.to_string()),
        }
    }
}

/// A merged, contiguous run of tokens sharing one entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// Classified entity kind.
    pub kind: EntityKind,

    /// Raw tag suffix as emitted by the model (`PER`, `ORG`, ...).
    pub label: String,

    /// Concatenated token fragments, continuation markers stripped.
    pub text: String,

    /// Start offset of the first constituent token.
    pub start: usize,

    /// End offset of the last constituent token.
    pub end: usize,
}

impl EntitySpan {
    /// Open a span from its first token. The token must carry an entity tag.
    fn open(token: &NerToken, label: &str) -> Self {
        Self {
            kind: EntityKind::from_label(label),
            label: label.to_string(),
            text: token.fragment().to_string(),
            start: token.start,
            end: token.end,
        }
    }

    /// Append a continuation token.
    fn extend(&mut self, token: &NerToken) {
        self.text.push_str(token.fragment());
        self.end = token.end;
    }
}
