//! Word occurrence counting.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::rank::WordEntry;

/// Mapping from distinct word to its occurrence count.
///
/// Built once per run and read-only afterwards.  Every key is non-empty and
/// every count is at least one; iteration order is unspecified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<String, usize>,
}

impl FrequencyMap {
    /// Count every word yielded by `words`.  Empty strings are ignored.
    pub fn count_words<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut map = Self::default();
        for word in words {
            map.add(word.into());
        }
        map
    }

    fn add(&mut self, word: String) {
        if word.is_empty() {
            return;
        }
        match self.counts.entry(word) {
            Entry::Occupied(mut e) => *e.get_mut() += 1,
            Entry::Vacant(e) => {
                e.insert(1);
            }
        }
    }

    /// Occurrences of `word`, if it was seen.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no word was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of tokens counted (sum of all counts).
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Materialize every pair as a [`WordEntry`], in unspecified order.
    #[must_use]
    pub fn entries(&self) -> Vec<WordEntry> {
        self.iter().map(|(w, c)| WordEntry::new(w, c)).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyMap {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::count_words(iter)
    }
}
