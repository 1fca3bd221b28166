//! Article documents and analysis results.

use serde::{Deserialize, Serialize};

use crate::frequency::{FrequencyTable, RankedWord};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_URL: &str = "Unknown URL";
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
pub const UNKNOWN_DATE: &str = "Unknown Date";

/// One article's extracted data.
///
/// Created by the extraction step, annotated once with its [`AnalysisResult`]
/// by [`crate::WordFrequencyAnalyzer::analyze_batch`], and not modified
/// afterwards. When `error` is set the text is empty and the document
/// contributes nothing to the combined frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// 1-based position in the batch
    pub index: usize,
    pub title: String,
    pub url: String,
    pub author: String,
    pub date: String,
    pub text: String,
    /// Extraction failure, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
}

impl Document {
    /// An empty document with sentinel metadata.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            title: UNKNOWN_TITLE.to_string(),
            url: UNKNOWN_URL.to_string(),
            author: UNKNOWN_AUTHOR.to_string(),
            date: UNKNOWN_DATE.to_string(),
            text: String::new(),
            error: None,
            analysis: None,
        }
    }

    /// A document whose extraction failed.
    pub fn failed(index: usize, url: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(index).with_url(url).with_error(error)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the title; blank values keep the sentinel.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        set_or_keep(&mut self.title, title.into());
        self
    }

    /// Sets the URL; blank values keep the sentinel.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        set_or_keep(&mut self.url, url.into());
        self
    }

    /// Sets the author; blank values keep the sentinel.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        set_or_keep(&mut self.author, author.into());
        self
    }

    /// Sets the date; blank values keep the sentinel.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        set_or_keep(&mut self.date, date.into());
        self
    }

    /// Records an extraction failure and clears the text.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self.text.clear();
        self
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Word count from the attached analysis, or 0 if none is attached.
    pub fn word_count(&self) -> usize {
        self.analysis.as_ref().map_or(0, |a| a.total_words)
    }
}

fn set_or_keep(slot: &mut String, value: String) {
    let trimmed = value.trim();
    if !trimmed.is_empty() {
        *slot = trimmed.to_string();
    }
}

/// Analysis of a single document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Tokens that survived filtering
    pub total_words: usize,
    /// Distinct surviving tokens
    pub unique_words: usize,
    pub frequency: FrequencyTable,
    pub top_words: Vec<RankedWord>,
}

impl AnalysisResult {
    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }
}

/// Analysis of a batch of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnalysisResult {
    /// Input documents, each with its analysis attached
    pub articles: Vec<Document>,
    pub combined_frequency: FrequencyTable,
    pub top_words: Vec<RankedWord>,
    pub total_articles: usize,
}

impl BatchAnalysisResult {
    /// Documents that carry an extraction error.
    pub fn failed_articles(&self) -> impl Iterator<Item = &Document> {
        self.articles.iter().filter(|d| d.is_failed())
    }

    /// Sum of word counts across the batch.
    pub fn total_words(&self) -> usize {
        self.combined_frequency.total()
    }
}
