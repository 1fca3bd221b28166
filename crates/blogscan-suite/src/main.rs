//! `blogscan` - check a blog and write its word-frequency report.
//!
//! Configuration comes from `blogscan.toml` and `BLOGSCAN_*` environment
//! variables; there are no command-line flags. The process exits non-zero
//! when any check fails.

use blogscan_suite::{SuiteConfig, SuiteRun, SuiteRunner, error, logger};
use console::style;
use miette::Result;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let config = SuiteConfig::load().map_err(|e| error::suite_error_to_miette(e.into()))?;

    let no_color = config.log.no_color || !logger::should_use_colors();
    logger::init_logger(config.log.verbose, config.log.quiet, no_color);
    console::set_colors_enabled(!no_color);

    match SuiteConfig::source_file() {
        Ok(Some(path)) => debug!(path = %path.display(), "loaded config file"),
        _ => debug!("no config file; using defaults and environment"),
    }

    let run = SuiteRunner::new(config)
        .run()
        .await
        .map_err(error::suite_error_to_miette)?;

    print_summary(&run);

    if run.passed() {
        Ok(())
    } else {
        Err(miette::miette!(
            "{} of {} checks failed",
            run.summary.failed_count(),
            run.summary.total()
        ))
    }
}

fn print_summary(run: &SuiteRun) {
    for outcome in run.summary.outcomes() {
        let status = if outcome.passed {
            style("PASS").green().bold()
        } else {
            style("FAIL").red().bold()
        };
        println!("{status} {}: {}", outcome.name, style(&outcome.detail).dim());
    }

    println!();
    println!(
        "{} checks: {} passed, {} failed",
        run.summary.total(),
        style(run.summary.passed_count()).green(),
        style(run.summary.failed_count()).red()
    );
    println!("Report: {}", run.report_path.display());
    println!("Data:   {}", run.json_path.display());
    for path in &run.screenshots {
        println!("Screenshot: {}", path.display());
    }
}
