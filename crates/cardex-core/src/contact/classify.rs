//! Entity-to-field classification.
//!
//! First-match-wins throughout: NER output on short unstructured text is
//! noisy, and guessing which of several organization mentions is the employer
//! loses more often than it wins.

use tracing::debug;

use crate::ner::{EntityKind, EntitySpan};

/// Name and company fields derived from entity spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameFields {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
}

/// Map merged spans to name/company fields.
///
/// The first person span is split on whitespace into given name and the
/// remainder. A second person span fills the family name if it is still
/// empty, covering models that emit given and family name as separate spans.
/// Everything after that is ignored, as is every organization span after the
/// first.
pub fn classify(spans: &[EntitySpan]) -> NameFields {
    let mut fields = NameFields::default();
    let mut person_seen = false;

    for span in spans {
        match span.kind {
            EntityKind::Person => {
                if !person_seen {
                    person_seen = true;
                    let mut parts = span.text.split_whitespace();
                    fields.first_name = parts.next().unwrap_or_default().to_string();
                    fields.last_name = parts.collect::<Vec<_>>().join(" ");
                } else if fields.last_name.is_empty() {
                    fields.last_name = span.text.trim().to_string();
                }
            }
            EntityKind::Organization => {
                if fields.company.is_empty() {
                    fields.company = span.text.trim().to_string();
                }
            }
            EntityKind::Other(_) => {}
        }
    }

    debug!(
        "classified {} spans: first={:?} last={:?} company={:?}",
        spans.len(),
        fields.first_name,
        fields.last_name,
        fields.company
    );
    fields
}
