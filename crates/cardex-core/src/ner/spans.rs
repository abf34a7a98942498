//! BIO tag-stream decoding.
//!
//! Iterates the token sequence in order, maintaining at most one open span.
//! A token is never attributed to two spans, and a span never mixes entity
//! types.

use cardex_model::NerToken;
use tracing::trace;

use super::EntitySpan;

/// Decodes an ordered token sequence into entity spans.
#[derive(Debug, Clone)]
pub struct SpanMerger {
    loose_continuation: bool,
}

impl SpanMerger {
    /// Create a merger with strict continuation (`I-<TYPE>` must match the
    /// open span's type exactly).
    pub fn new() -> Self {
        Self {
            loose_continuation: false,
        }
    }

    /// Accept any non-`O` tag whose suffix matches the open span's type as a
    /// continuation, including a repeated `B-` of the same type. This mirrors
    /// the older suffix-matching decoder some deployments still rely on.
    pub fn with_loose_continuation(mut self, loose: bool) -> Self {
        self.loose_continuation = loose;
        self
    }

    /// Merge the tag stream into spans.
    pub fn merge(&self, tokens: &[NerToken]) -> Vec<EntitySpan> {
        let mut spans: Vec<EntitySpan> = Vec::new();
        let mut open: Option<EntitySpan> = None;

        for token in tokens {
            if token.is_outside() {
                Self::flush(&mut open, &mut spans);
                continue;
            }

            if let Some(span) = open.as_mut() {
                if self.continues(&token.tag, &span.label) {
                    span.extend(token);
                    continue;
                }
            }

            // Not a continuation: close whatever was open.
            Self::flush(&mut open, &mut spans);

            if token.begins_entity() {
                if let Some(label) = token.entity_label() {
                    open = Some(EntitySpan::open(token, label));
                }
            } else {
                // Orphan continuation with no compatible open span. It never
                // merges into an unrelated span and never starts one.
                trace!("dropping orphan continuation token {:?}", token.tag);
            }
        }

        Self::flush(&mut open, &mut spans);
        spans
    }

    fn continues(&self, tag: &str, open_label: &str) -> bool {
        if self.loose_continuation {
            tag != "O" && tag.ends_with(open_label)
        } else {
            tag.strip_prefix("I-").is_some_and(|label| label == open_label)
        }
    }

    fn flush(open: &mut Option<EntitySpan>, spans: &mut Vec<EntitySpan>) {
        if let Some(span) = open.take() {
            spans.push(span);
        }
    }
}

impl Default for SpanMerger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ner::EntityKind;
    use pretty_assertions::assert_eq;

    fn tok(text: &str, tag: &str, start: usize, end: usize) -> NerToken {
        NerToken::new(text, tag, start, end)
    }

    #[test]
    fn test_merges_subword_continuation_without_spaces() {
        let tokens = [tok("John", "B-PER", 0, 4), tok("Doe", "I-PER", 5, 8)];
        let spans = SpanMerger::new().merge(&tokens);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, EntityKind::Person);
        assert_eq!(spans[0].text, "JohnDoe");
        assert_eq!((spans[0].start, spans[0].end), (0, 8));
    }

    #[test]
    fn test_strips_wordpiece_marker() {
        let tokens = [tok("احمد", "B-PER", 0, 4), tok("##ی", "I-PER", 4, 5)];
        let spans = SpanMerger::new().merge(&tokens);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "احمدی");
    }

    #[test]
    fn test_outside_tag_closes_open_span() {
        let tokens = [
            tok("Ali", "B-PER", 0, 3),
            tok("از", "O", 4, 6),
            tok("Sazman", "B-ORG", 7, 13),
        ];
        let spans = SpanMerger::new().merge(&tokens);

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].kind, EntityKind::Person);
        assert_eq!(spans[1].kind, EntityKind::Organization);
    }

    #[test]
    fn test_type_mismatch_closes_without_merging() {
        // An I-ORG right after a person span must not join it.
        let tokens = [tok("Ali", "B-PER", 0, 3), tok("Tech", "I-ORG", 4, 8)];
        let spans = SpanMerger::new().merge(&tokens);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Ali");
    }

    #[test]
    fn test_orphan_continuation_opens_nothing() {
        let tokens = [tok("Tech", "I-ORG", 0, 4), tok("Co", "I-ORG", 5, 7)];
        let spans = SpanMerger::new().merge(&tokens);
        assert!(spans.is_empty());
    }

    #[test]
    fn test_strict_mode_splits_repeated_begin_tags() {
        let tokens = [tok("Ali", "B-PER", 0, 3), tok("Reza", "B-PER", 4, 8)];
        let spans = SpanMerger::new().merge(&tokens);

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "Ali");
        assert_eq!(spans[1].text, "Reza");
    }

    #[test]
    fn test_loose_mode_merges_repeated_begin_tags() {
        let tokens = [tok("Ali", "B-PER", 0, 3), tok("Reza", "B-PER", 4, 8)];
        let spans = SpanMerger::new().with_loose_continuation(true).merge(&tokens);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "AliReza");
    }

    #[test]
    fn test_flushes_open_span_at_end_of_stream() {
        let tokens = [tok("Sazman", "B-ORG", 0, 6), tok("##ha", "I-ORG", 6, 8)];
        let spans = SpanMerger::new().merge(&tokens);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Sazmanha");
        assert_eq!(spans[0].label, "ORG");
    }

    #[test]
    fn test_empty_stream_yields_no_spans() {
        assert!(SpanMerger::new().merge(&[]).is_empty());
    }

    #[test]
    fn test_unknown_entity_type_is_carried_through() {
        let tokens = [tok("تهران", "B-LOC", 0, 5)];
        let spans = SpanMerger::new().merge(&tokens);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, EntityKind::Other("LOC".to_string()));
    }
}
