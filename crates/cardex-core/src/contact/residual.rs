//! Residual-notes reduction.
//!
//! Whatever the extractors did not claim stays in the notes: starting from
//! the original text, the first occurrence of each extracted value is removed,
//! then whitespace runs collapse to single spaces.

use tracing::trace;

/// Remove the first occurrence of each non-empty `value` from `original` and
/// collapse the remainder's whitespace.
///
/// Only the first occurrence of each value is removed; a value repeated in the
/// text keeps its later occurrences in the notes. Empty values are skipped --
/// removing an empty string would be a no-op loop hazard.
pub fn reduce_notes<'a, I>(original: &str, values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut working = original.to_string();

    for value in values {
        if value.is_empty() {
            continue;
        }
        if let Some(pos) = working.find(value) {
            working.replace_range(pos..pos + value.len(), "");
            trace!("removed {:?} from notes", value);
        }
        working = working.trim().to_string();
    }

    working.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_removes_each_value_once_and_collapses_whitespace() {
        let notes = reduce_notes(
            "علی رضایی از شرکت آکمه شماره 09123456789",
            ["علی", "رضایی", "آکمه", "09123456789"],
        );
        assert_eq!(notes, "از شرکت شماره");
    }

    #[test]
    fn test_repeated_value_keeps_later_occurrences() {
        let notes = reduce_notes(
            "تماس 09123456789 یا 09123456789",
            ["09123456789"],
        );
        assert!(notes.contains("09123456789"));
        assert_eq!(notes, "تماس یا 09123456789");
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let notes = reduce_notes("متن دست نخورده", ["", "", ""]);
        assert_eq!(notes, "متن دست نخورده");
    }

    #[test]
    fn test_no_runs_of_whitespace_remain() {
        let notes = reduce_notes("الف  ب\n\nج\tد", []);
        assert_eq!(notes, "الف ب ج د");
    }

    #[test]
    fn test_empty_input_reduces_to_empty() {
        assert_eq!(reduce_notes("", ["هرچیزی"]), "");
        assert_eq!(reduce_notes("   \n ", []), "");
    }

    #[test]
    fn test_value_absent_from_text_is_a_noop() {
        let notes = reduce_notes("فقط همین متن", ["ناموجود"]);
        assert_eq!(notes, "فقط همین متن");
    }
}
