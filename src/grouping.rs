//! Bucketing of words by phonetic code.
//!
//! [`HomophoneGroups`] owns one bucket per distinct code. Buckets are sets, so
//! a word inserted twice is counted once. [`HomophoneGroups::ranked`] orders
//! codes by bucket size (largest first) and breaks ties by the code string,
//! which makes reports deterministic for a given dictionary.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use rayon::prelude::*;
use serde::Serialize;

use crate::phonetic::encode;

/// Number of groups reported when the caller does not ask for a specific count.
pub const DEFAULT_TOP: usize = 10;

/// Words grouped by phonetic code.
#[derive(Debug, Clone, Default)]
pub struct HomophoneGroups {
    buckets: HashMap<String, BTreeSet<String>>,
    /// Codes in order of first appearance
    codes: Vec<String>,
}

/// One entry of a ranking: a code and its words in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedGroup {
    pub code: String,
    pub size: usize,
    pub words: Vec<String>,
}

impl HomophoneGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `word` and add it to the bucket for its code.
    ///
    /// Returns the code the word was filed under.
    pub fn insert(&mut self, word: &str) -> String {
        let code = encode(word);
        self.insert_coded(code.clone(), word.to_string());
        code
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    fn insert_coded(&mut self, code: String, word: String) {
        match self.buckets.get_mut(&code) {
            Some(bucket) => {
                bucket.insert(word);
            }
            None => {
                self.codes.push(code.clone());
                self.buckets.insert(code, BTreeSet::from([word]));
            }
        }
    }

    /// Fold `other` into `self`, bucket by bucket.
    pub fn merge(&mut self, other: HomophoneGroups) {
        let HomophoneGroups {
            mut buckets,
            codes,
        } = other;
        for code in codes {
            if let Some(words) = buckets.remove(&code) {
                match self.buckets.get_mut(&code) {
                    Some(bucket) => bucket.extend(words),
                    None => {
                        self.codes.push(code.clone());
                        self.buckets.insert(code, words);
                    }
                }
            }
        }
    }

    /// Number of distinct codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Number of distinct words across all buckets.
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(BTreeSet::len).sum()
    }

    pub fn bucket(&self, code: &str) -> Option<&BTreeSet<String>> {
        self.buckets.get(code)
    }

    /// Codes in the order they were first seen.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Every code, largest bucket first, ties by ascending code.
    pub fn ranking(&self) -> Vec<&str> {
        let mut ranking: Vec<&str> = self.codes.iter().map(String::as_str).collect();
        ranking.sort_by(|left, right| self.compare_codes(left, right));
        ranking
    }

    /// The `top` largest groups. Fewer are returned when fewer codes exist.
    pub fn ranked(&self, top: usize) -> Vec<RankedGroup> {
        self.ranking()
            .into_iter()
            .take(top)
            .filter_map(|code| {
                self.buckets.get(code).map(|words| RankedGroup {
                    code: code.to_string(),
                    size: words.len(),
                    words: words.iter().cloned().collect(),
                })
            })
            .collect()
    }

    fn compare_codes(&self, left: &str, right: &str) -> Ordering {
        let size = |code: &str| self.buckets.get(code).map_or(0, BTreeSet::len);
        size(right)
            .cmp(&size(left))
            .then_with(|| left.cmp(right))
    }
}

/// Group `words` by code and return the `top` largest groups.
pub fn group<I, S>(words: I, top: usize) -> Vec<RankedGroup>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups = HomophoneGroups::new();
    groups.extend(words);
    tracing::debug!(
        codes = groups.len(),
        words = groups.word_count(),
        "Grouped dictionary by phonetic code"
    );
    groups.ranked(top)
}

/// Build the groups for `words` on the rayon pool.
///
/// Each shard is grouped independently and the shards are merged by code, so
/// the result holds the same buckets as a sequential pass.
pub fn build_parallel<S>(words: &[S]) -> HomophoneGroups
where
    S: AsRef<str> + Sync,
{
    let shard_size = (words.len() / rayon::current_num_threads()).max(1);
    words
        .par_chunks(shard_size)
        .map(|shard| {
            let mut groups = HomophoneGroups::new();
            groups.extend(shard);
            groups
        })
        .reduce(HomophoneGroups::new, |mut left, right| {
            left.merge(right);
            left
        })
}

/// Parallel counterpart of [`group`]; produces the same ranking.
pub fn group_parallel<S>(words: &[S], top: usize) -> Vec<RankedGroup>
where
    S: AsRef<str> + Sync,
{
    let groups = build_parallel(words);
    tracing::debug!(
        codes = groups.len(),
        words = groups.word_count(),
        threads = rayon::current_num_threads(),
        "Grouped dictionary by phonetic code in parallel"
    );
    groups.ranked(top)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_returns_code() {
        let mut groups = HomophoneGroups::new();
        assert_eq!(groups.insert("cat"), "kt");
        assert_eq!(groups.insert("two"), "t");
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut groups = HomophoneGroups::new();
        groups.extend(["to", "to", "two"]);
        assert_eq!(groups.bucket("t").map(BTreeSet::len), Some(2));
        assert_eq!(groups.word_count(), 2);
    }

    #[test]
    fn test_codes_keep_first_seen_order() {
        let mut groups = HomophoneGroups::new();
        groups.extend(["cat", "to", "kit", "two"]);
        assert_eq!(groups.codes(), &["kt".to_string(), "t".to_string()]);
    }

    #[test]
    fn test_ranking_ties_by_code() {
        let mut groups = HomophoneGroups::new();
        groups.extend(["sew", "cat", "to"]);
        assert_eq!(groups.ranking(), vec!["kt", "s", "t"]);
    }

    #[test]
    fn test_ranked_words_sorted() {
        let mut groups = HomophoneGroups::new();
        groups.extend(["two", "too", "to"]);
        let ranked = groups.ranked(1);
        assert_eq!(ranked[0].words, vec!["to", "too", "two"]);
        assert_eq!(ranked[0].size, 3);
    }

    #[test]
    fn test_ranked_caps_at_available() {
        let ranked = group(["to", "cat"], DEFAULT_TOP);
        assert_eq!(ranked.len(), 2);
        assert!(group(["to"], 0).is_empty());
        assert!(group(Vec::<String>::new(), 3).is_empty());
    }

    #[test]
    fn test_merge() {
        let mut left = HomophoneGroups::new();
        left.extend(["to", "cat"]);
        let mut right = HomophoneGroups::new();
        right.extend(["two", "sew", "to"]);

        left.merge(right);
        assert_eq!(left.len(), 3);
        assert_eq!(left.bucket("t").map(BTreeSet::len), Some(2));
        assert_eq!(left.codes(), &["t".to_string(), "kt".to_string(), "s".to_string()]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let words: Vec<String> = ["to", "two", "too", "sew", "so", "cat", "kit", "book", "back"]
            .iter()
            .cycle()
            .take(500)
            .map(|w| w.to_string())
            .collect();
        assert_eq!(group_parallel(&words, 5), group(&words, 5));
    }
}
