//! # blogscan-analysis
//!
//! Word-frequency analysis across a batch of blog articles.
//!
//! The analyzer is a pure, synchronous pipeline. Extraction happens upstream
//! (see `blogscan-browser`) and hands over one [`Document`] per article, with
//! failures already captured in [`Document::error`].
//!
//! ## Pipeline
//!
//! 1. [`normalize`]: lowercase and strip punctuation
//! 2. [`WordFilter::extract_words`]: split and drop short words, stop words and numbers
//! 3. [`FrequencyTable::from_tokens`]: count occurrences in first-seen order
//! 4. [`top_words`]: stable descending rank, truncated to N
//! 5. [`WordFrequencyAnalyzer::analyze_batch`]: per-document analysis merged into one table
//! 6. [`generate_report`]: plain-text report
//!
//! ## Example
//!
//! ```
//! use blogscan_analysis::{Document, TopN, WordFrequencyAnalyzer};
//!
//! let analyzer = WordFrequencyAnalyzer::default();
//! let docs = vec![
//!     Document::new(1).with_text("Rust makes systems programming approachable."),
//!     Document::new(2).with_text("Systems programming in Rust is fun."),
//! ];
//!
//! let batch = analyzer.analyze_batch(docs, TopN::new(2));
//! assert_eq!(batch.total_articles, 2);
//! assert_eq!(batch.top_words[0].word, "rust");
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod analyzer;
pub mod document;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod normalize;
pub mod report;
pub mod stopwords;

#[cfg(test)]
mod tests;

pub use analyzer::WordFrequencyAnalyzer;
pub use document::{
    AnalysisResult, BatchAnalysisResult, Document, UNKNOWN_AUTHOR, UNKNOWN_DATE, UNKNOWN_TITLE,
    UNKNOWN_URL,
};
pub use error::{AnalysisError, Result};
pub use filter::{DEFAULT_MIN_WORD_LEN, WordFilter};
pub use frequency::{FrequencyTable, RankedWord, TopN, top_words};
pub use normalize::{normalize, normalize_opt};
pub use report::{Clock, FixedClock, SystemClock, generate_report, generate_report_with};
pub use stopwords::StopWords;
