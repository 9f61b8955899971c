//! Top-N selection: count-descending ranking, then alphabetic display order.

use serde::Serialize;

use crate::count::FrequencyMap;
use crate::error::CloudError;

/// A word paired with its occurrence count.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct WordEntry {
    /// The lowercase word.
    pub word: String,
    /// Number of occurrences in the input.
    pub count: usize,
}

impl WordEntry {
    /// Create an entry.
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Phase 1: order by count, highest first.
///
/// Equal counts are ordered alphabetically so the top-N cutoff is the same
/// on every run.
pub fn sort_by_count_desc(entries: &mut [WordEntry]) {
    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
}

/// Phase 2: order by word, ascending (plain code-point comparison).
pub fn sort_alphabetically(entries: &mut [WordEntry]) {
    entries.sort_unstable_by(|a, b| a.word.cmp(&b.word));
}

/// Pick the `n` most frequent words of `freq` and return them alphabetically.
///
/// Fails with [`CloudError::VocabularyTooSmall`] when `n` exceeds the number
/// of distinct words and with [`CloudError::InvalidCount`] when `n` is
/// negative.  `n == 0` yields an empty list.
pub fn select(freq: &FrequencyMap, n: i64) -> Result<Vec<WordEntry>, CloudError> {
    let mut ranked = freq.entries();
    sort_by_count_desc(&mut ranked);

    if n < 0 {
        return Err(CloudError::InvalidCount(n));
    }
    let available = ranked.len();
    if n.unsigned_abs() > available as u64 {
        return Err(CloudError::VocabularyTooSmall {
            requested: n,
            available,
        });
    }
    // n <= available, so it fits in usize.
    let n = n as usize;

    ranked.truncate(n);
    sort_alphabetically(&mut ranked);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::tokenize::{DefaultSeparators, tokenize};

    #[fixture]
    fn sample() -> FrequencyMap {
        tokenize(["the cat sat on the mat the cat ran"], &DefaultSeparators).collect()
    }

    fn words(entries: &[WordEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.word.as_str()).collect()
    }

    // ── phases ─────────────────────────────────────────────────────────────

    #[rstest]
    fn count_phase_orders_descending_with_alphabetic_ties() {
        let mut entries = vec![
            WordEntry::new("b", 1),
            WordEntry::new("z", 5),
            WordEntry::new("a", 1),
            WordEntry::new("m", 3),
        ];
        sort_by_count_desc(&mut entries);
        assert_eq!(words(&entries), ["z", "m", "a", "b"]);
    }

    #[rstest]
    fn alphabetic_phase_ignores_counts() {
        let mut entries = vec![
            WordEntry::new("pear", 9),
            WordEntry::new("apple", 1),
            WordEntry::new("fig", 4),
        ];
        sort_alphabetically(&mut entries);
        assert_eq!(words(&entries), ["apple", "fig", "pear"]);
    }

    // ── select ─────────────────────────────────────────────────────────────

    #[rstest]
    fn selects_top_three_alphabetically(sample: FrequencyMap) {
        let top = select(&sample, 3).unwrap();
        assert_eq!(top.len(), 3);

        let fixed: Vec<_> = top.iter().filter(|e| e.count > 1).collect();
        assert_eq!(fixed.len(), 2);
        assert!(top.contains(&WordEntry::new("the", 3)));
        assert!(top.contains(&WordEntry::new("cat", 2)));

        let third = top.iter().find(|e| e.count == 1).unwrap();
        assert!(["sat", "on", "mat", "ran"].contains(&third.word.as_str()));

        // With alphabetic tie-breaking the cutoff is exactly "mat".
        assert_eq!(words(&top), ["cat", "mat", "the"]);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    #[case(6)]
    fn output_length_and_order(sample: FrequencyMap, #[case] n: i64) {
        let top = select(&sample, n).unwrap();
        assert_eq!(top.len(), n as usize);
        assert!(top.windows(2).all(|w| w[0].word <= w[1].word));
    }

    /// Every selected word is at least as frequent as every rejected one.
    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    fn selection_keeps_most_frequent(sample: FrequencyMap, #[case] n: i64) {
        let top = select(&sample, n).unwrap();
        let min_selected = top.iter().map(|e| e.count).min().unwrap();
        for (word, count) in sample.iter() {
            if !top.iter().any(|e| e.word == word) {
                assert!(count <= min_selected, "{word} ({count}) was skipped");
            }
        }
    }

    #[rstest]
    fn too_many_words_is_an_error(sample: FrequencyMap) {
        let err = select(&sample, 7).unwrap_err();
        assert!(matches!(
            err,
            CloudError::VocabularyTooSmall {
                requested: 7,
                available: 6
            }
        ));
    }

    /// Counts beyond any platform's `usize` are still a vocabulary error.
    #[rstest]
    #[case(i64::MAX)]
    #[case(i64::from(u32::MAX) + 1)]
    fn huge_count_is_a_vocabulary_error(sample: FrequencyMap, #[case] n: i64) {
        let err = select(&sample, n).unwrap_err();
        assert!(matches!(
            err,
            CloudError::VocabularyTooSmall { requested, available: 6 } if requested == n
        ));
    }

    #[rstest]
    #[case(-1)]
    #[case(i64::MIN)]
    fn negative_count_is_an_error(sample: FrequencyMap, #[case] n: i64) {
        let err = select(&sample, n).unwrap_err();
        assert!(matches!(err, CloudError::InvalidCount(got) if got == n));
    }

    #[rstest]
    fn empty_map_allows_only_zero() {
        let empty = FrequencyMap::default();
        assert!(select(&empty, 0).unwrap().is_empty());
        assert!(select(&empty, 1).is_err());
    }

    #[rstest]
    fn selection_is_repeatable(sample: FrequencyMap) {
        let first = select(&sample, 4).unwrap();
        for _ in 0..10 {
            assert_eq!(select(&sample, 4).unwrap(), first);
        }
    }
}
