//! Plain-text report assembly.
//!
//! The report is a pure function of its inputs apart from the generation
//! timestamp, which comes from an injected [`Clock`].

use std::fmt::Write as _;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::document::{BatchAnalysisResult, UNKNOWN_TITLE, UNKNOWN_URL};
use crate::frequency::RankedWord;

pub const REPORT_TITLE: &str = "Word Frequency Analysis Report";

/// Source of the report timestamp.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Renders a report stamped with the current time.
pub fn generate_report(top_words: &[RankedWord], batch: &BatchAnalysisResult) -> String {
    generate_report_with(&SystemClock, top_words, batch)
}

/// Renders a report stamped by `clock`.
///
/// Layout:
///
/// ```text
/// Word Frequency Analysis Report
/// ==============================
/// Generated: 2026-01-01T00:00:00Z
/// Articles analyzed: 2
///
/// Articles
/// --------
/// 1. First post
///    URL: https://blog.example/first
///    Words: 120
///
/// Top Words
/// ---------
/// 1. rust: 14
/// ```
pub fn generate_report_with(
    clock: &dyn Clock,
    top_words: &[RankedWord],
    batch: &BatchAnalysisResult,
) -> String {
    let mut out = String::new();
    let generated = clock.now().to_rfc3339_opts(SecondsFormat::Secs, true);

    // Writing to a String cannot fail
    let _ = writeln!(out, "{REPORT_TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(REPORT_TITLE.len()));
    let _ = writeln!(out, "Generated: {generated}");
    let _ = writeln!(out, "Articles analyzed: {}", batch.total_articles);

    let _ = writeln!(out);
    let _ = writeln!(out, "Articles");
    let _ = writeln!(out, "--------");
    if batch.articles.is_empty() {
        let _ = writeln!(out, "(none)");
    }
    for doc in &batch.articles {
        let title = non_blank(&doc.title).unwrap_or(UNKNOWN_TITLE);
        let url = non_blank(&doc.url).unwrap_or(UNKNOWN_URL);
        let _ = writeln!(out, "{}. {title}", doc.index);
        let _ = writeln!(out, "   URL: {url}");
        let _ = writeln!(out, "   Words: {}", doc.word_count());
        if let Some(error) = &doc.error {
            let _ = writeln!(out, "   Extraction failed: {error}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Top Words");
    let _ = writeln!(out, "---------");
    if top_words.is_empty() {
        let _ = writeln!(out, "(none)");
    }
    for (rank, ranked) in top_words.iter().enumerate() {
        let _ = writeln!(out, "{}. {ranked}", rank + 1);
    }

    out
}

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
