//! Error types for browser operations.
//!
//! Distinguishes launch failures, navigation errors, wait timeouts and
//! script failures so callers can report which step of a page check broke.
//! Extraction failures never leave the extraction boundary as errors; see
//! [`crate::source::TextExtractionSource`].

use std::time::Duration;
use thiserror::Error;

/// The main error type for browser operations.
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Failed to launch the browser process.
    ///
    /// This typically occurs when Chrome/Chromium is not installed,
    /// or when there are permission issues with the executable.
    #[error("failed to launch Chrome: {reason}")]
    LaunchFailed {
        /// Human-readable reason for the launch failure
        reason: String,
        /// Optional underlying error that caused the failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to open a page over the DevTools connection.
    #[error("could not open a tab: {0}")]
    ConnectionFailed(String),

    /// Navigation to a URL failed or timed out.
    #[error("failed to load '{url}': {reason}")]
    NavigationFailed {
        /// The URL that failed to load
        url: String,
        /// Reason for the navigation failure
        reason: String,
    },

    /// A wait condition was not satisfied within the timeout.
    #[error("timed out after {timeout:?} waiting for {condition}")]
    WaitTimeout {
        /// Description of the condition that timed out
        condition: String,
        /// How long we waited before timing out
        timeout: Duration,
    },

    /// JavaScript evaluation in the page failed or returned an unexpected shape.
    #[error("page script failed: {0}")]
    ScriptExecutionFailed(String),

    /// None of an extraction chain's strategies produced content.
    #[error("no content found for {field}")]
    ContentMissing {
        /// Which article field was being extracted
        field: &'static str,
    },

    /// An operation was attempted on a closed browser instance.
    #[error("browser is already closed")]
    AlreadyClosed,

    /// Wraps errors from the chromiumoxide library.
    #[error("chromiumoxide error: {0}")]
    ChromiumOxide(#[from] chromiumoxide::error::CdpError),
}

/// A specialized Result type for browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
