//! Error types for the analyzer.
//!
//! Malformed or missing text never fails; it degrades to an empty result.
//! The only rejected input is a negative ranking count.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A caller-supplied argument is outside its valid range.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
