//! Files written by a suite run.
//!
//! All artifacts of one run share a UTC timestamp in their names:
//!
//! ```text
//! reports/
//! ├── word-frequency-report-20261018T093000Z.txt
//! ├── word-frequency-report-20261018T093000Z.json
//! └── screenshots/
//!     ├── listing-20261018T093000Z.png
//!     └── article-3-20261018T093000Z.png
//! ```

use std::path::{Path, PathBuf};

use blogscan_analysis::{BatchAnalysisResult, RankedWord};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::checks::CheckOutcome;
use crate::error::{Result, SuiteError};

pub const REPORT_PREFIX: &str = "word-frequency-report";
pub const SCREENSHOT_DIR: &str = "screenshots";

/// Compact UTC timestamp used in artifact names.
pub fn timestamp_slug(at: DateTime<Utc>) -> String {
    at.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Lowercase ASCII letters and digits, everything else collapsed to `-`.
fn file_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            stem.push(c.to_ascii_lowercase());
        } else if !stem.ends_with('-') {
            stem.push('-');
        }
    }
    let stem = stem.trim_matches('-');
    if stem.is_empty() {
        "page".to_string()
    } else {
        stem.to_string()
    }
}

/// JSON sidecar written next to the text report.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument<'a> {
    pub generated_at: DateTime<Utc>,
    pub base_url: &'a str,
    pub top_words: &'a [RankedWord],
    pub analysis: &'a BatchAnalysisResult,
    pub checks: &'a [CheckOutcome],
}

/// Writes a run's artifacts into one output directory.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
    stamp: String,
}

impl ArtifactStore {
    /// A store for the run that started at `at`. Nothing is created until
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>, at: DateTime<Utc>) -> Self {
        Self {
            dir: dir.into(),
            stamp: timestamp_slug(at),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn report_path(&self) -> PathBuf {
        self.dir.join(format!("{REPORT_PREFIX}-{}.txt", self.stamp))
    }

    pub fn json_path(&self) -> PathBuf {
        self.dir.join(format!("{REPORT_PREFIX}-{}.json", self.stamp))
    }

    pub fn screenshot_path(&self, name: &str) -> PathBuf {
        self.dir
            .join(SCREENSHOT_DIR)
            .join(format!("{}-{}.png", file_stem(name), self.stamp))
    }

    /// Writes the plain-text report.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::ArtifactWrite`] if the directory or file cannot
    /// be written.
    pub async fn write_report(&self, report: &str) -> Result<PathBuf> {
        write_file(self.report_path(), report.as_bytes()).await
    }

    /// Writes the JSON sidecar, pretty-printed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub async fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<PathBuf> {
        let json = serde_json::to_vec_pretty(value)?;
        write_file(self.json_path(), &json).await
    }

    /// Saves a PNG screenshot under `screenshots/`.
    ///
    /// # Errors
    ///
    /// Returns [`SuiteError::ArtifactWrite`] if the file cannot be written.
    pub async fn save_screenshot(&self, name: &str, png: &[u8]) -> Result<PathBuf> {
        write_file(self.screenshot_path(name), png).await
    }
}

async fn write_file(path: PathBuf, contents: &[u8]) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| SuiteError::ArtifactWrite {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    tokio::fs::write(&path, contents)
        .await
        .map_err(|source| SuiteError::ArtifactWrite {
            path: path.clone(),
            source,
        })?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(path)
}
