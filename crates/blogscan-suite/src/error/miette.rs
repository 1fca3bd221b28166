//! Miette report conversion for suite errors.

use blogscan_browser::BrowserError;
use miette::Report;

use super::SuiteError;

/// Convert SuiteError to miette Report
pub fn suite_error_to_miette(err: SuiteError) -> Report {
    match err {
        SuiteError::Config(e) => miette::miette!("Configuration error: {}", e),
        SuiteError::Browser(e) => browser_error_to_miette(e),
        _ => miette::miette!("{}", err),
    }
}

/// Convert BrowserError to miette Report, with a hint where one helps
pub fn browser_error_to_miette(err: BrowserError) -> Report {
    match err {
        BrowserError::LaunchFailed { reason, .. } => miette::miette!(
            "Failed to launch Chrome: {}\n\nHint: Install Chrome or Chromium, or set browser.chrome_path in blogscan.toml",
            reason
        ),
        BrowserError::NavigationFailed { url, reason } => miette::miette!(
            "Failed to load {}: {}\n\nHint: Check that base_url points at a running blog",
            url,
            reason
        ),
        BrowserError::WaitTimeout { condition, timeout } => miette::miette!(
            "Timed out after {:?} waiting for {}\n\nHint: Raise wait.timeout_ms for slow sites",
            timeout,
            condition
        ),
        other => miette::miette!("Browser error: {}", other),
    }
}
