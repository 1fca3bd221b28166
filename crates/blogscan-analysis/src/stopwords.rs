//! Stop-word sets.
//!
//! The built-in English list is constructed once per process and shared by
//! reference counting, so cloning a [`StopWords`] is cheap and never copies
//! the set.

use std::sync::{Arc, LazyLock};

use rustc_hash::FxHashSet;

/// Common English function words: articles, pronouns, auxiliaries,
/// conjunctions and prepositions.
const ENGLISH: &[&str] = &[
    // articles and determiners
    "the", "a", "an", "this", "that", "these", "those",
    // pronouns
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
    "your", "his", "its", "our", "their", "what", "which", "who", "whom",
    // auxiliaries
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "could", "should", "may", "might", "must", "can", "shall",
    // conjunctions
    "and", "or", "but", "nor", "not", "so", "than", "when", "where",
    // prepositions
    "in", "on", "at", "to", "for", "of", "with", "by", "from", "up", "about", "into",
    "over", "after", "out", "off",
];

static ENGLISH_SET: LazyLock<Arc<FxHashSet<String>>> = LazyLock::new(|| {
    Arc::new(ENGLISH.iter().map(|w| (*w).to_string()).collect())
});

/// An immutable set of lowercase stop words.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: Arc<FxHashSet<String>>,
}

impl StopWords {
    /// The built-in English list.
    pub fn english() -> Self {
        Self {
            words: Arc::clone(&ENGLISH_SET),
        }
    }

    /// Builds a set from a custom list. Words are lowercased on insertion.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: Arc::new(
                words
                    .into_iter()
                    .map(|w| w.as_ref().to_lowercase())
                    .collect(),
            ),
        }
    }

    /// A set that filters nothing.
    pub fn none() -> Self {
        Self {
            words: Arc::new(FxHashSet::default()),
        }
    }

    /// Returns true if `word` (already lowercase) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}
