//! Word index bucketed by first letter.
//!
//! The search only ever asks two questions of the dictionary: is this string a
//! word, and could it still grow into one. Both are answered by binary search
//! inside the bucket for the query's first letter.

use std::collections::HashMap;

/// Read-only word lookups used by the search.
///
/// Implementations are shared across worker threads without locking, so they
/// must not mutate themselves while answering queries.
pub trait WordIndex {
    /// Exact membership test.
    fn is_word(&self, s: &str) -> bool;

    /// True if at least one word starts with `s`.
    fn has_prefix(&self, s: &str) -> bool;

    fn is_empty(&self) -> bool;
}

/// Words grouped by their first letter, each bucket sorted and deduplicated.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    buckets: HashMap<char, Vec<String>>,
    len: usize,
}

impl Dictionary {
    /// Build with the default minimum word length.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(words, crate::MIN_WORD_LENGTH)
    }

    /// Build from raw words, dropping anything shorter than `min_length` letters.
    pub fn build<I, S>(words: I, min_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buckets: HashMap<char, Vec<String>> = HashMap::new();

        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.chars().count() < min_length {
                continue;
            }
            if let Some(first) = word.chars().next() {
                buckets.entry(first).or_default().push(word);
            }
        }

        let mut len = 0;
        for bucket in buckets.values_mut() {
            bucket.sort_unstable();
            bucket.dedup();
            len += bucket.len();
        }

        Self { buckets, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All retained words in sorted order.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .buckets
            .values()
            .flat_map(|bucket| bucket.iter().map(String::as_str))
            .collect();
        words.sort_unstable();
        words
    }

    fn bucket(&self, s: &str) -> Option<&[String]> {
        let first = s.chars().next()?;
        self.buckets.get(&first).map(Vec::as_slice)
    }
}

impl WordIndex for Dictionary {
    fn is_word(&self, s: &str) -> bool {
        self.bucket(s)
            .is_some_and(|bucket| bucket.binary_search_by(|w| w.as_str().cmp(s)).is_ok())
    }

    fn has_prefix(&self, s: &str) -> bool {
        if s.is_empty() {
            return self.len > 0;
        }
        match self.bucket(s) {
            Some(bucket) => {
                // First word not less than `s`; any word with that prefix sorts here
                let idx = bucket.partition_point(|w| w.as_str() < s);
                bucket.get(idx).is_some_and(|w| w.starts_with(s))
            }
            None => false,
        }
    }

    fn is_empty(&self) -> bool {
        Dictionary::is_empty(self)
    }
}
