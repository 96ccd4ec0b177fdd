//! Structural facts that accompany the word counts.
//!
//! These describe the book's layout rather than the text file, so they are
//! constants; the arithmetic on them is computed.

use serde::Serialize;

pub const CHAPTERS: u64 = 114;
pub const VERSES: u64 = 6346;
pub const BISMILLAH_OCCURRENCES: u64 = 114;
/// The chapter that opens without a Bismillah.
pub const CHAPTER_WITHOUT_BISMILLAH: u64 = 9;
/// The chapter carrying a second Bismillah, at verse 30.
pub const CHAPTER_WITH_EXTRA_BISMILLAH: u64 = 27;
pub const EXTRA_BISMILLAH_VERSE: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fact {
    pub label: String,
    pub value: u64,
    /// `k` when `value == 19 * k`
    pub multiple_of_19: Option<u64>,
}

impl Fact {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
            multiple_of_19: multiple_of_19(value),
        }
    }
}

pub fn multiple_of_19(value: u64) -> Option<u64> {
    (value != 0 && value % 19 == 0).then_some(value / 19)
}

/// Sum of the decimal digits of `value`.
pub fn digit_sum(mut value: u64) -> u64 {
    let mut sum = 0;
    while value > 0 {
        sum += value % 10;
        value /= 10;
    }
    sum
}

pub fn reference_facts() -> Vec<Fact> {
    vec![
        Fact::new("Chapters", CHAPTERS),
        Fact::new("Total verses (with Bismillah)", VERSES),
        Fact::new(format!("Cross-sum of {VERSES}"), digit_sum(VERSES)),
        Fact::new("Bismillah count", BISMILLAH_OCCURRENCES),
        Fact::new(
            format!(
                "Chapters from {CHAPTER_WITHOUT_BISMILLAH} (missing) to {CHAPTER_WITH_EXTRA_BISMILLAH} (extra)"
            ),
            CHAPTER_WITH_EXTRA_BISMILLAH - CHAPTER_WITHOUT_BISMILLAH + 1,
        ),
        Fact::new(
            format!("Verse {CHAPTER_WITH_EXTRA_BISMILLAH}:{EXTRA_BISMILLAH_VERSE} sum"),
            CHAPTER_WITH_EXTRA_BISMILLAH + EXTRA_BISMILLAH_VERSE,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_sum_of_verse_total() {
        assert_eq!(digit_sum(VERSES), 19);
        assert_eq!(digit_sum(0), 0);
    }

    #[test]
    fn multiples() {
        assert_eq!(multiple_of_19(114), Some(6));
        assert_eq!(multiple_of_19(6346), Some(334));
        assert_eq!(multiple_of_19(2698), Some(142));
        assert_eq!(multiple_of_19(20), None);
        assert_eq!(multiple_of_19(0), None);
    }

    #[test]
    fn every_reference_fact_is_a_multiple_of_19() {
        let facts = reference_facts();
        assert_eq!(facts.len(), 6);
        for fact in &facts {
            assert!(fact.multiple_of_19.is_some(), "{}", fact.label);
        }
        assert_eq!(facts[4].value, 19);
        assert_eq!(facts[5].value, 57);
    }
}
