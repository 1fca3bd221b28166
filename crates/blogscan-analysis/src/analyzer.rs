//! The word-frequency analyzer.

use tracing::{debug, warn};

use crate::document::{AnalysisResult, BatchAnalysisResult, Document};
use crate::error::Result;
use crate::filter::WordFilter;
use crate::frequency::{FrequencyTable, TopN, top_words};
use crate::normalize::normalize;

/// Normalizes, filters, counts and ranks article text.
///
/// The analyzer holds no mutable state; one instance can serve any number
/// of batches, including from several threads at once.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyAnalyzer {
    filter: WordFilter,
    per_document_top: TopN,
}

impl WordFrequencyAnalyzer {
    pub fn new(filter: WordFilter) -> Self {
        Self {
            filter,
            per_document_top: TopN::default(),
        }
    }

    /// Sets how many ranked words each per-document result keeps.
    #[must_use]
    pub fn with_per_document_top(mut self, top: TopN) -> Self {
        self.per_document_top = top;
        self
    }

    pub fn filter(&self) -> &WordFilter {
        &self.filter
    }

    /// Normalizes and filters `text` into significant words.
    pub fn extract_words(&self, text: &str) -> Vec<String> {
        self.filter.extract_words(&normalize(text))
    }

    /// Analyzes a single text. Empty text yields a zero-valued result.
    pub fn analyze_text(&self, text: &str) -> AnalysisResult {
        let words = self.extract_words(text);
        let total_words = words.len();
        let frequency = FrequencyTable::from_tokens(words);

        AnalysisResult {
            total_words,
            unique_words: frequency.len(),
            top_words: top_words(&frequency, self.per_document_top.get()),
            frequency,
        }
    }

    /// Analyzes every document and merges the results.
    ///
    /// Each document gets its own [`AnalysisResult`] attached. Failed
    /// documents are analyzed as empty text, so they appear in the batch
    /// with zero words and never stop the rest from being processed.
    pub fn analyze_batch(&self, documents: Vec<Document>, top: TopN) -> BatchAnalysisResult {
        let mut combined = FrequencyTable::new();
        let mut articles = Vec::with_capacity(documents.len());

        for mut doc in documents {
            let analysis = match &doc.error {
                Some(error) => {
                    warn!(index = doc.index, url = %doc.url, %error, "article extraction failed, counting as empty");
                    AnalysisResult::default()
                }
                None => self.analyze_text(&doc.text),
            };

            debug!(
                index = doc.index,
                total_words = analysis.total_words,
                unique_words = analysis.unique_words,
                "analyzed article"
            );

            combined.merge(&analysis.frequency);
            doc.analysis = Some(analysis);
            articles.push(doc);
        }

        BatchAnalysisResult {
            total_articles: articles.len(),
            top_words: top_words(&combined, top.get()),
            combined_frequency: combined,
            articles,
        }
    }

    /// Like [`analyze_batch`](Self::analyze_batch), taking the count as a
    /// signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AnalysisError::InvalidArgument`] if `top_count` is
    /// negative. Nothing is analyzed in that case.
    pub fn analyze_multiple_articles(
        &self,
        documents: Vec<Document>,
        top_count: i64,
    ) -> Result<BatchAnalysisResult> {
        let top = TopN::try_from(top_count)?;
        Ok(self.analyze_batch(documents, top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::RankedWord;

    #[test]
    fn analyze_text_counts_significant_words() {
        let analyzer = WordFrequencyAnalyzer::default();
        let result = analyzer.analyze_text("The Quick, quick fox jumps! The fox runs.");
        assert_eq!(result.total_words, 6);
        assert_eq!(result.unique_words, 4);
        assert_eq!(result.frequency.get("quick"), 2);
        assert_eq!(result.frequency.get("the"), 0);
        assert_eq!(result.top_words[0], RankedWord::new("quick", 2));
    }

    #[test]
    fn analyze_empty_text() {
        let result = WordFrequencyAnalyzer::default().analyze_text("");
        assert_eq!(result, AnalysisResult::default());
        assert!(result.is_empty());
    }

    #[test]
    fn per_document_top_is_configurable() {
        let analyzer = WordFrequencyAnalyzer::default().with_per_document_top(TopN::new(1));
        let result = analyzer.analyze_text("alpha beta beta gamma");
        assert_eq!(result.top_words, vec![RankedWord::new("beta", 2)]);
    }

    #[test]
    fn batch_attaches_analysis_to_each_document() {
        let analyzer = WordFrequencyAnalyzer::default();
        let docs = vec![
            Document::new(1).with_text("rust rust cargo"),
            Document::new(2).with_text("cargo clippy"),
        ];
        let batch = analyzer.analyze_batch(docs, TopN::default());

        assert_eq!(batch.total_articles, 2);
        assert_eq!(batch.articles[0].word_count(), 3);
        assert_eq!(batch.articles[1].word_count(), 2);
        assert_eq!(batch.combined_frequency.get("cargo"), 2);
        assert_eq!(batch.total_words(), 5);
    }

    #[test]
    fn failed_document_contributes_nothing() {
        let analyzer = WordFrequencyAnalyzer::default();
        let mut failed = Document::failed(2, "https://blog.example/broken", "timeout");
        // text set after the error must still be ignored
        failed.text = "ignored ignored ignored".to_string();

        let docs = vec![
            Document::new(1).with_text("compiler borrow checker"),
            failed,
            Document::new(3).with_text("borrow checker lifetimes"),
        ];
        let batch = analyzer.analyze_batch(docs, TopN::default());

        assert_eq!(batch.total_articles, 3);
        assert_eq!(batch.articles[1].word_count(), 0);
        assert!(batch.articles[1].analysis.is_some());
        assert_eq!(batch.combined_frequency.get("ignored"), 0);
        assert_eq!(batch.failed_articles().count(), 1);
        assert!(!batch.top_words.is_empty());
    }

    #[test]
    fn negative_top_count_is_rejected() {
        let analyzer = WordFrequencyAnalyzer::default();
        let result = analyzer.analyze_multiple_articles(vec![Document::new(1)], -3);
        assert!(result.is_err());
    }

    #[test]
    fn empty_batch() {
        let batch = WordFrequencyAnalyzer::default()
            .analyze_multiple_articles(Vec::new(), 5)
            .unwrap();
        assert_eq!(batch.total_articles, 0);
        assert!(batch.combined_frequency.is_empty());
        assert!(batch.top_words.is_empty());
    }
}
