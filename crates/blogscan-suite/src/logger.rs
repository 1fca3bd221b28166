//! Logging setup for the `blogscan` binary.
//!
//! Library crates only emit `tracing` events; this module installs the
//! subscriber that prints them.
//!
//! # Example
//!
//! ```rust,no_run
//! use blogscan_suite::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("checking blog");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str =
    "blogscan=debug,blogscan_suite=debug,blogscan_browser=debug,blogscan_analysis=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str =
    "blogscan=info,blogscan_suite=info,blogscan_browser=info,blogscan_analysis=info";

/// Initialize the tracing subscriber.
///
/// The filter is chosen in this order:
/// 1. `verbose`: debug for the blogscan crates
/// 2. `quiet`: errors only
/// 3. `RUST_LOG`, if set and valid
/// 4. info for the blogscan crates
///
/// Call once, before any logging. A second call panics.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet))
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(!no_color)
                .compact(),
        )
        .init();
}

fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Whether colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stdout().features().colors_supported()
}
