//! Locale-style string ordering for title sorts.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root tailoring and
//! non-ignorable variable weighting, so punctuation and symbols sort ahead
//! of letters and letters without a decomposition (`Ł`, `Ø`) sort next to
//! their base letter. Only identical strings compare `Equal`, which lets a
//! stable sort keep their input order.

use std::cmp::Ordering;

use feruca::{Collator, Locale, Tailoring};

/// Reusable comparator; build one per sort rather than per comparison
pub struct TitleCollator(Collator);

impl Default for TitleCollator {
    fn default() -> Self {
        Self(Collator::new(Tailoring::Cldr(Locale::Root), false, true))
    }
}

impl TitleCollator {
    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.0.collate(a, b)
    }
}

/// Compare two strings like a locale-aware `compare`
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    TitleCollator::default().compare(a, b)
}
