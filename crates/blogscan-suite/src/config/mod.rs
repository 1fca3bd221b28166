//! Suite configuration.
//!
//! Values come from three layers, highest priority first:
//!
//! 1. `BLOGSCAN_*` environment variables (nested keys split on `__`,
//!    e.g. `BLOGSCAN_BROWSER__HEADLESS=false`)
//! 2. `blogscan.toml` in the working directory, or the file named by
//!    `BLOGSCAN_CONFIG`
//! 3. [`SuiteConfig::default`]

use std::path::PathBuf;

use blogscan_browser::{BrowserSettings, SelectorSet, WaitPolicy};
use serde::{Deserialize, Serialize};

mod loading;
mod validation;

pub use loading::{CONFIG_ENV, CONFIG_FILE, ENV_PREFIX};

/// Everything the suite needs to check one blog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Root URL of the blog, e.g. `https://blog.example.com`
    pub base_url: String,

    /// Path of the article listing page
    pub listing_path: String,

    /// How many of the most recent articles to visit
    pub article_count: usize,

    /// Number of words in the combined ranking. Kept signed so a negative
    /// value reaches the analyzer and is rejected there.
    pub top_words: i64,

    /// Minimum words an article body needs to pass its check
    pub min_body_words: usize,

    /// Fail article checks when the page logs console errors
    pub fail_on_console_errors: bool,

    /// Where reports and screenshots are written
    pub output_dir: PathBuf,

    pub screenshots: bool,

    pub browser: BrowserSettings,

    pub wait: WaitConfig,

    pub selectors: SelectorSet,

    pub log: LogConfig,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            listing_path: "/".to_string(),
            article_count: 5,
            top_words: 5,
            min_body_words: 50,
            fail_on_console_errors: false,
            output_dir: PathBuf::from("reports"),
            screenshots: true,
            browser: BrowserSettings::default(),
            wait: WaitConfig::default(),
            selectors: SelectorSet::default(),
            log: LogConfig::default(),
        }
    }
}

/// Page wait timing, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitConfig {
    pub timeout_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            poll_interval_ms: 100,
        }
    }
}

impl WaitConfig {
    pub fn policy(&self) -> WaitPolicy {
        WaitPolicy::from_millis(self.timeout_ms, self.poll_interval_ms)
    }
}

/// Logging flags. `verbose` wins over `quiet`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub verbose: bool,
    pub quiet: bool,
    pub no_color: bool,
}
