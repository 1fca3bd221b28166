//! Tokenization and word filtering.

use crate::stopwords::StopWords;

/// Tokens shorter than this are dropped.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Splits normalized text into significant words.
///
/// A token is discarded when, checked in this order, it is shorter than
/// `min_len` characters, is a stop word, consists only of digits, or is
/// empty. Surviving tokens keep their original order and duplicates.
#[derive(Debug, Clone)]
pub struct WordFilter {
    stop_words: StopWords,
    min_len: usize,
}

impl WordFilter {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            min_len: DEFAULT_MIN_WORD_LEN,
        }
    }

    /// Overrides the minimum token length.
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Returns true if `token` survives every filter.
    pub fn keeps(&self, token: &str) -> bool {
        if token.chars().count() < self.min_len {
            return false;
        }
        if self.stop_words.contains(token) {
            return false;
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        !token.trim().is_empty()
    }

    /// Extracts significant words from normalized text.
    ///
    /// Input is expected to be the output of [`crate::normalize`]; empty input
    /// yields an empty vector.
    pub fn extract_words(&self, normalized: &str) -> Vec<String> {
        if normalized.is_empty() {
            return Vec::new();
        }

        normalized
            .split(' ')
            .filter(|token| self.keeps(token))
            .map(str::to_string)
            .collect()
    }
}

impl Default for WordFilter {
    fn default() -> Self {
        Self::new(StopWords::english())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_stop_words_and_short_tokens() {
        let filter = WordFilter::default();
        let words = filter.extract_words("the quick quick fox jumps the fox runs");
        assert_eq!(words, vec!["quick", "quick", "fox", "jumps", "fox", "runs"]);
    }

    #[test]
    fn length_three_is_kept() {
        let filter = WordFilter::new(StopWords::none());
        assert_eq!(filter.extract_words("ab abc abcd"), vec!["abc", "abcd"]);
    }

    #[test]
    fn numeric_tokens_are_dropped() {
        let filter = WordFilter::default();
        assert_eq!(
            filter.extract_words("2024 release v2024 404"),
            vec!["release", "v2024"]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(WordFilter::default().extract_words("").is_empty());
    }

    #[test]
    fn custom_min_len() {
        let filter = WordFilter::new(StopWords::none()).with_min_len(5);
        assert_eq!(filter.extract_words("short longer tiny"), vec!["short", "longer"]);
    }

    #[test]
    fn injected_stop_words_replace_defaults() {
        let filter = WordFilter::new(StopWords::from_words(["rust"]));
        assert_eq!(
            filter.extract_words("the rust compiler"),
            vec!["the", "compiler"]
        );
    }
}
