//! The blog's article listing page.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::dom::{DomQuery, LinkInfo};
use crate::error::Result;
use crate::selectors::SelectorSet;

/// Reads headings and article links from a loaded listing page.
pub struct ListingPage<'a> {
    dom: &'a dyn DomQuery,
    selectors: &'a SelectorSet,
}

impl<'a> ListingPage<'a> {
    pub fn new(dom: &'a dyn DomQuery, selectors: &'a SelectorSet) -> Self {
        Self { dom, selectors }
    }

    /// `document.title`.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be queried.
    pub async fn page_title(&self) -> Result<String> {
        self.dom.title().await
    }

    /// Text of the first `<h1>`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be queried.
    pub async fn heading(&self) -> Result<Option<String>> {
        self.dom.text_of("h1").await
    }

    /// Every article link in page order, duplicates included.
    ///
    /// Uses the first listing selector that yields any link with an `href`.
    pub async fn all_links(&self) -> Vec<LinkInfo> {
        for selector in &self.selectors.listing_links {
            let links = match self.dom.links_in(selector).await {
                Ok(links) => links,
                Err(e) => {
                    debug!(selector = %selector, error = %e, "listing selector failed");
                    continue;
                }
            };

            let links: Vec<LinkInfo> = links
                .into_iter()
                .filter(|l| !l.href.trim().is_empty())
                .collect();

            if !links.is_empty() {
                debug!(selector = %selector, count = links.len(), "found article links");
                return links;
            }
        }
        Vec::new()
    }

    /// Article links in page order, de-duplicated by URL.
    ///
    /// Keeps the first occurrence, since themes often link both the title
    /// and a thumbnail.
    pub async fn article_links(&self) -> Vec<LinkInfo> {
        unique_links(self.all_links().await)
    }

    /// The first `n` article links; listings show the newest first.
    pub async fn recent(&self, n: usize) -> Vec<LinkInfo> {
        let mut links = self.article_links().await;
        links.truncate(n);
        links
    }
}

/// Drops links whose URL already appeared earlier in `links`.
pub fn unique_links(links: Vec<LinkInfo>) -> Vec<LinkInfo> {
    let mut seen = FxHashSet::default();
    links
        .into_iter()
        .filter(|l| seen.insert(l.href.clone()))
        .collect()
}
