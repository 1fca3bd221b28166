//! Frequency tables and top-N ranking.
//!
//! # Tie-break order
//!
//! [`FrequencyTable`] is backed by an [`IndexMap`], so it enumerates words in
//! the order they were first inserted. [`top_words`] sorts stably by
//! descending count, which means that among equal counts the word seen first
//! ranks first. There is no secondary alphabetical key.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

/// Insertion-ordered word counts. Every stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: IndexMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a token sequence.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for token in tokens {
            table.add(token);
        }
        table
    }

    /// Increments the count for `word`, inserting it at the end if absent.
    pub fn add(&mut self, word: impl Into<String>) {
        self.add_count(word, 1);
    }

    /// Adds `count` occurrences of `word`. A zero count is ignored so that
    /// absent words are never stored.
    pub fn add_count(&mut self, word: impl Into<String>, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(word.into()).or_insert(0) += count;
    }

    /// Merges another table additively. New words are appended in the
    /// other table's order.
    pub fn merge(&mut self, other: &FrequencyTable) {
        for (word, count) in &other.counts {
            self.add_count(word.as_str(), *count);
        }
    }

    /// Count for `word`; absent words count zero.
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(w, c)| (w.as_str(), *c))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

/// A word and its count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    pub word: String,
    pub count: usize,
}

impl RankedWord {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for RankedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.count)
    }
}

/// How many ranked words to keep.
///
/// Construction from a signed integer rejects negative values, which is
/// where untrusted counts (configuration, environment) enter the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TopN(usize);

impl TopN {
    /// Default number of ranked words.
    pub const DEFAULT: TopN = TopN(5);

    pub const fn new(n: usize) -> Self {
        Self(n)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for TopN {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for TopN {
    fn from(n: usize) -> Self {
        Self(n)
    }
}

impl TryFrom<i64> for TopN {
    type Error = AnalysisError;

    fn try_from(n: i64) -> Result<Self> {
        usize::try_from(n)
            .map(Self)
            .map_err(|_| AnalysisError::InvalidArgument {
                name: "top_count",
                reason: format!("must be zero or greater, got {n}"),
            })
    }
}

/// Returns the `n` highest-count words, ties in table order.
///
/// Tables with fewer than `n` words return every word; `n == 0` returns
/// nothing.
pub fn top_words(table: &FrequencyTable, n: usize) -> Vec<RankedWord> {
    if n == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<RankedWord> = table
        .iter()
        .map(|(word, count)| RankedWord::new(word, count))
        .collect();

    // slice::sort_by is stable
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}
