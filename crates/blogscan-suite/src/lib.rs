//! blogscan suite - smoke checks and word-frequency reports for a blog.
//!
//! The suite opens the blog's listing page in headless Chrome, checks it,
//! visits the most recent articles, checks each one, and feeds the article
//! text to the word-frequency analyzer. The result is a plain-text report
//! plus a JSON sidecar in the output directory.
//!
//! # Modules
//!
//! - [`config`] - layered configuration (defaults, `blogscan.toml`, env)
//! - [`checks`] - page validation checks and the run summary
//! - [`runner`] - drives the browser and the analyzer
//! - [`artifacts`] - timestamped report and screenshot files
//! - [`error`] - error types and `miette` conversion
//! - [`logger`] - tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use blogscan_suite::{SuiteConfig, SuiteRunner};
//!
//! # async fn run() -> blogscan_suite::Result<()> {
//! let config = SuiteConfig::load()?;
//! let run = SuiteRunner::new(config).run().await?;
//! println!("{}", run.summary);
//! # Ok(())
//! # }
//! ```

pub mod artifacts;
pub mod checks;
pub mod config;
pub mod error;
pub mod logger;
pub mod runner;

pub use artifacts::{ArtifactStore, ReportDocument};
pub use checks::{ArticleRules, CheckOutcome, SuiteSummary, check_article, check_listing};
pub use config::{LogConfig, SuiteConfig, WaitConfig};
pub use error::{ConfigError, Result, SuiteError, suite_error_to_miette};
pub use runner::{SiteVisit, SuiteRun, SuiteRunner};
