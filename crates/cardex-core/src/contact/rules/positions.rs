//! Job-title keyword extraction.
//!
//! A cheap lexical heuristic: the first vocabulary keyword found as a
//! substring of the text wins. Coverage is entirely determined by the
//! vocabulary; this is intentionally not a classifier.

use super::FieldExtractor;

/// Fixed, ordered vocabulary of Persian job-title keywords.
///
/// Order matters twice: longer titles come before their prefixes
/// (`مدیرعامل` before `مدیر`), and the first keyword present in the text is
/// the one returned.
pub const POSITION_KEYWORDS: &[&str] = &[
    "مدیرعامل",
    "مدیر",
    "معاون",
    "رئیس",
    "سرپرست",
    "کارشناس",
    "مهندس",
    "برنامه‌نویس",
    "طراح",
    "حسابدار",
    "مشاور",
    "فروشنده",
    "بازاریاب",
    "کارمند",
    "منشی",
    "تکنسین",
    "پزشک",
    "وکیل",
    "استاد",
    "معلم",
    "دانشجو",
];

/// Position keyword extractor.
#[derive(Debug, Default)]
pub struct PositionExtractor;

impl PositionExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for PositionExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        POSITION_KEYWORDS
            .iter()
            .find(|keyword| text.contains(*keyword))
            .map(|keyword| keyword.to_string())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        POSITION_KEYWORDS
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect()
    }
}

/// Extract at most one job-title keyword from text.
pub fn extract_position(text: &str) -> Option<String> {
    PositionExtractor::new().extract(text)
}
