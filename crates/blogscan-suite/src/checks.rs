//! Page validation checks.
//!
//! Checks are pure functions over what the page objects extracted, so they
//! run without a browser in tests. Every check produces a [`CheckOutcome`],
//! pass or fail; the runner collects them into a [`SuiteSummary`].

use std::fmt;

use blogscan_browser::{ArticleContent, LinkInfo};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Result of one named check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

impl CheckOutcome {
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            detail: detail.into(),
        }
    }

    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: detail.into(),
        }
    }

    fn check(name: impl Into<String>, passed: bool, detail: impl Into<String>) -> Self {
        if passed {
            Self::pass(name, detail)
        } else {
            Self::fail(name, detail)
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        write!(f, "[{status}] {}: {}", self.name, self.detail)
    }
}

/// Thresholds for article checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleRules {
    pub min_body_words: usize,
    pub fail_on_console_errors: bool,
}

fn is_absolute_http(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()))
}

/// Checks the listing page's title and article links.
///
/// `links` should be every link the listing shows, duplicates included
/// (see [`ListingPage::all_links`](blogscan_browser::ListingPage::all_links)).
pub fn check_listing(page_title: &str, links: &[LinkInfo]) -> Vec<CheckOutcome> {
    let mut outcomes = Vec::with_capacity(4);

    let title = page_title.trim();
    outcomes.push(CheckOutcome::check(
        "listing: page title",
        !title.is_empty(),
        if title.is_empty() {
            "page has no <title>".to_string()
        } else {
            format!("\"{title}\"")
        },
    ));

    outcomes.push(CheckOutcome::check(
        "listing: article links",
        !links.is_empty(),
        format!("{} article link(s) found", links.len()),
    ));

    let untitled: Vec<&str> = links
        .iter()
        .filter(|l| l.text.trim().is_empty())
        .map(|l| l.href.as_str())
        .collect();
    outcomes.push(CheckOutcome::check(
        "listing: link text",
        untitled.is_empty(),
        if untitled.is_empty() {
            "every link has text".to_string()
        } else {
            format!("links without text: {}", untitled.join(", "))
        },
    ));

    let relative: Vec<&str> = links
        .iter()
        .map(|l| l.href.as_str())
        .filter(|href| !is_absolute_http(href))
        .collect();
    outcomes.push(CheckOutcome::check(
        "listing: link urls",
        relative.is_empty(),
        if relative.is_empty() {
            "every link is an absolute http(s) URL".to_string()
        } else {
            format!("not absolute http(s): {}", relative.join(", "))
        },
    ));

    let mut seen = FxHashSet::default();
    let duplicates: Vec<&str> = links
        .iter()
        .map(|l| l.href.as_str())
        .filter(|href| !seen.insert(*href))
        .collect();
    outcomes.push(CheckOutcome::check(
        "listing: unique links",
        duplicates.is_empty(),
        if duplicates.is_empty() {
            "no duplicate links".to_string()
        } else {
            format!("duplicate links: {}", duplicates.join(", "))
        },
    ));

    outcomes
}

/// Checks one article's title, body length and console output.
///
/// `index` is the article's 1-based position and prefixes every check name.
pub fn check_article(
    index: usize,
    content: &ArticleContent,
    console_errors: &[String],
    rules: ArticleRules,
) -> Vec<CheckOutcome> {
    let prefix = format!("article {index}");
    let mut outcomes = Vec::with_capacity(3);

    match content.title.as_deref().map(str::trim) {
        Some(title) if !title.is_empty() => {
            outcomes.push(CheckOutcome::pass(format!("{prefix}: title"), format!("\"{title}\"")));
        }
        _ => outcomes.push(CheckOutcome::fail(
            format!("{prefix}: title"),
            format!("no title found at {}", content.url),
        )),
    }

    let words = content.body_word_count();
    outcomes.push(CheckOutcome::check(
        format!("{prefix}: body"),
        words >= rules.min_body_words,
        format!("{words} words (minimum {})", rules.min_body_words),
    ));

    let console = format!("{prefix}: console");
    outcomes.push(match (console_errors.is_empty(), rules.fail_on_console_errors) {
        (true, _) => CheckOutcome::pass(console, "no console errors"),
        (false, false) => CheckOutcome::pass(
            console,
            format!("{} console error(s), ignored", console_errors.len()),
        ),
        (false, true) => CheckOutcome::fail(console, console_errors.join("; ")),
    });

    outcomes
}

/// All check outcomes of a run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteSummary {
    outcomes: Vec<CheckOutcome>,
}

impl SuiteSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// True when no check failed. An empty summary passes.
    pub fn all_passed(&self) -> bool {
        self.failures().next().is_none()
    }
}

impl Extend<CheckOutcome> for SuiteSummary {
    fn extend<I: IntoIterator<Item = CheckOutcome>>(&mut self, iter: I) {
        self.outcomes.extend(iter);
    }
}

impl fmt::Display for SuiteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        write!(
            f,
            "{} checks: {} passed, {} failed",
            self.total(),
            self.passed_count(),
            self.failed_count()
        )
    }
}
