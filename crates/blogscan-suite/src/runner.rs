//! The suite run: check the listing, visit recent articles, analyze their
//! text and write the report.
//!
//! A failing check or a broken article never aborts the run; only
//! infrastructure problems (Chrome will not start, the listing page cannot
//! be loaded, an artifact cannot be written) return an error.

use std::path::PathBuf;

use blogscan_analysis::{
    BatchAnalysisResult, Clock, Document, FixedClock, SystemClock, TopN, UNKNOWN_TITLE,
    WordFrequencyAnalyzer, generate_report_with,
};
use blogscan_browser::{
    BlogBrowser, BlogSite, BrowserArticleSource, LinkInfo, ListingPage, StaticSite,
    TextExtractionSource, unique_links,
};
use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::artifacts::{ArtifactStore, ReportDocument};
use crate::checks::{ArticleRules, CheckOutcome, SuiteSummary, check_article, check_listing};
use crate::config::SuiteConfig;
use crate::error::Result;

/// What the browser part of a run produced.
#[derive(Debug, Default)]
pub struct SiteVisit {
    pub summary: SuiteSummary,
    /// One document per visited article, numbered from 1
    pub documents: Vec<Document>,
    pub screenshots: Vec<PathBuf>,
}

/// Outcome of a complete run.
#[derive(Debug)]
pub struct SuiteRun {
    pub summary: SuiteSummary,
    pub analysis: BatchAnalysisResult,
    pub report: String,
    pub report_path: PathBuf,
    pub json_path: PathBuf,
    pub screenshots: Vec<PathBuf>,
}

impl SuiteRun {
    pub fn passed(&self) -> bool {
        self.summary.all_passed()
    }
}

pub struct SuiteRunner {
    config: SuiteConfig,
    analyzer: WordFrequencyAnalyzer,
    clock: Box<dyn Clock + Send + Sync>,
}

impl SuiteRunner {
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            analyzer: WordFrequencyAnalyzer::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the clock used for the report timestamp and artifact names.
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Runs the whole suite against the configured blog.
    ///
    /// The browser is closed before returning, whether or not the visit
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error for a negative `top_words`, a browser that cannot
    /// be launched, an unreachable listing page, or a failed artifact write.
    pub async fn run(&self) -> Result<SuiteRun> {
        // Reject a bad ranking size before paying for a browser launch.
        TopN::try_from(self.config.top_words)?;

        let started = self.clock.now();
        let store = ArtifactStore::new(&self.config.output_dir, started);
        let site = StaticSite::new(&self.config.base_url)
            .with_listing_path(&self.config.listing_path);

        let browser =
            BlogBrowser::launch(self.config.browser.clone(), self.config.wait.policy()).await?;
        let visit = self.visit_site(&browser, &site, &store).await;
        if let Err(e) = browser.close().await {
            warn!(error = %e, "failed to close browser");
        }

        self.finish(visit?, started).await
    }

    /// Checks the listing page and every recent article.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing page cannot be opened or read, or a
    /// screenshot cannot be saved. Article failures become failed checks.
    pub async fn visit_site(
        &self,
        browser: &BlogBrowser,
        site: &dyn BlogSite,
        store: &ArtifactStore,
    ) -> Result<SiteVisit> {
        let selectors = &self.config.selectors;
        let mut visit = SiteVisit::default();

        let listing_url = site.listing_url();
        info!(url = %listing_url, "checking listing page");
        let page = browser.open(&listing_url).await?;
        let listing = ListingPage::new(&page, selectors);
        let page_title = listing.page_title().await?;
        let links = listing.all_links().await;
        visit.summary.extend(check_listing(&page_title, &links));

        if self.config.screenshots {
            match page.screenshot().await {
                Ok(png) => visit
                    .screenshots
                    .push(store.save_screenshot("listing", &png).await?),
                Err(e) => warn!(error = %e, "listing screenshot failed"),
            }
        }
        if let Err(e) = page.close().await {
            warn!(error = %e, "failed to close listing tab");
        }

        let recent: Vec<_> = unique_links(links)
            .into_iter()
            .take(self.config.article_count)
            .collect();
        if recent.len() < self.config.article_count {
            info!(
                found = recent.len(),
                wanted = self.config.article_count,
                "listing has fewer articles than requested"
            );
        }

        let source = BrowserArticleSource::new(browser, selectors.clone())
            .with_screenshots(self.config.screenshots);
        self.check_articles(&source, &recent, store, &mut visit).await?;

        Ok(visit)
    }

    /// Fetches each linked article through `source`, checks it and adds
    /// its document (numbered from 1) to `visit`.
    ///
    /// # Errors
    ///
    /// Returns an error only if a screenshot cannot be saved. Articles that
    /// fail to load become a failed `article N: load` check and a
    /// zero-word document.
    pub async fn check_articles(
        &self,
        source: &dyn TextExtractionSource,
        links: &[LinkInfo],
        store: &ArtifactStore,
        visit: &mut SiteVisit,
    ) -> Result<()> {
        let rules = ArticleRules {
            min_body_words: self.config.min_body_words,
            fail_on_console_errors: self.config.fail_on_console_errors,
        };

        for (i, link) in links.iter().enumerate() {
            let index = i + 1;
            info!(index, url = %link.href, "checking article");

            let fetched = source.fetch_article(index, &link.href).await;
            match &fetched.visit {
                Some(article) => {
                    let outcomes =
                        check_article(index, &article.content, &article.console_errors, rules);
                    let failed = outcomes.iter().any(|o| !o.passed);
                    visit.summary.extend(outcomes);

                    if let (true, Some(png)) = (failed, &article.screenshot) {
                        let name = format!("article {index}");
                        visit.screenshots.push(store.save_screenshot(&name, png).await?);
                    }
                }
                None => {
                    let reason = fetched.document.error.clone().unwrap_or_default();
                    warn!(index, url = %link.href, error = %reason, "article failed to load");
                    visit
                        .summary
                        .push(CheckOutcome::fail(format!("article {index}: load"), reason));
                }
            }

            // The listing's link text is the next best title.
            let doc = fetched.document;
            let doc = if doc.title == UNKNOWN_TITLE {
                doc.with_title(link.text.as_str())
            } else {
                doc
            };
            visit.documents.push(doc);
        }

        Ok(())
    }

    /// Analyzes the visited articles and writes the text report and its
    /// JSON sidecar.
    ///
    /// # Errors
    ///
    /// Returns an error for a negative `top_words` or a failed write.
    pub async fn finish(&self, visit: SiteVisit, started: DateTime<Utc>) -> Result<SuiteRun> {
        let SiteVisit {
            summary,
            documents,
            screenshots,
        } = visit;

        let analysis = self
            .analyzer
            .analyze_multiple_articles(documents, self.config.top_words)?;
        info!(
            articles = analysis.total_articles,
            failed = analysis.failed_articles().count(),
            words = analysis.total_words(),
            "analysis complete"
        );

        let report = generate_report_with(&FixedClock(started), &analysis.top_words, &analysis);

        let store = ArtifactStore::new(&self.config.output_dir, started);
        let report_path = store.write_report(&report).await?;
        let json_path = store
            .write_json(&ReportDocument {
                generated_at: started,
                base_url: &self.config.base_url,
                top_words: &analysis.top_words,
                analysis: &analysis,
                checks: summary.outcomes(),
            })
            .await?;
        info!(report = %report_path.display(), "report written");

        Ok(SuiteRun {
            summary,
            analysis,
            report,
            report_path,
            json_path,
            screenshots,
        })
    }
}
