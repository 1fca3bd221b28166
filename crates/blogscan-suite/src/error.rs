//! Error types for the suite.
//!
//! [`SuiteError`] is what the runner returns. It wraps the browser, config
//! and analysis errors so a single `?` works across layers, and the binary
//! turns it into a `miette` report with [`suite_error_to_miette`].
//!
//! Extraction problems on individual articles are *not* errors here: they
//! become failed checks and failed documents, so the run still produces a
//! report.

use std::path::PathBuf;

use blogscan_analysis::AnalysisError;
use blogscan_browser::BrowserError;
use thiserror::Error;

mod miette;

pub use self::miette::suite_error_to_miette;

/// Top-level suite error type.
#[derive(Debug, Error)]
pub enum SuiteError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Chrome could not be launched or driven
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// The analyzer rejected its arguments
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Failed to write an artifact
    #[error("Failed to write {}: {source}", .path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file named by `BLOGSCAN_CONFIG` does not exist
    #[error("Config file not found: {}\n\nHint: Unset BLOGSCAN_CONFIG or point it at an existing blogscan.toml", .0.display())]
    NotFound(PathBuf),

    /// A source could not be parsed or a field has the wrong type
    #[error("Failed to load configuration: {0}\n\nHint: Check blogscan.toml syntax and field types")]
    Load(#[from] figment::Error),

    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField { field: String, hint: String },

    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },
}

/// Result type alias using `SuiteError` as the default error type.
pub type Result<T, E = SuiteError> = std::result::Result<T, E>;
