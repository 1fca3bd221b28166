//! Text normalization.
//!
//! Produces a canonical form of arbitrary text: lowercase, with every run of
//! characters outside `[a-z0-9_]` collapsed to one space and the ends trimmed.
//! Word characters follow the ASCII `\w` class, so accented letters act as
//! separators.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_]+").expect("static regex is valid"));

/// Normalizes text for tokenization.
///
/// Empty input yields an empty string. The result contains only lowercase
/// ASCII alphanumerics and underscores separated by single spaces.
///
/// ```
/// use blogscan_analysis::normalize;
///
/// assert_eq!(normalize("  Hello,   World!! "), "hello world");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    NON_WORD_RUN.replace_all(&lowered, " ").trim().to_string()
}

/// Normalizes optional text; `None` behaves like an empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("The Quick, quick fox jumps! The fox runs."),
            "the quick quick fox jumps the fox runs"
        );
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("a\t\tb\n\n c"), "a b c");
    }

    #[test]
    fn keeps_underscores_and_digits() {
        assert_eq!(normalize("snake_case v2.0"), "snake_case v2 0");
    }

    #[test]
    fn punctuation_only_is_empty() {
        assert_eq!(normalize("?!... --- ***"), "");
    }

    #[test]
    fn non_ascii_letters_split_words() {
        assert_eq!(normalize("Café—Crème"), "caf cr me");
    }

    #[test]
    fn missing_text_is_empty() {
        assert_eq!(normalize_opt(None), "");
        assert_eq!(normalize_opt(Some("Hi!")), "hi");
    }
}
