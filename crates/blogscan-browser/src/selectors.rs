//! Selectors for blog listing and article pages.
//!
//! Defaults cover WordPress, Ghost, Hugo and plain semantic `<article>`
//! markup. Each list is tried in order; override them in configuration when
//! the blog's theme differs.

use serde::{Deserialize, Serialize};

use crate::extract::{ExtractionChain, Strategy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorSet {
    /// Article links on the listing page, newest first
    pub listing_links: Vec<String>,
    pub title: Vec<String>,
    pub body: Vec<String>,
    pub author: Vec<String>,
    pub date: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for SelectorSet {
    fn default() -> Self {
        Self {
            listing_links: strings(&[
                "article h2 a",
                "article h3 a",
                ".entry-title a",
                ".post-title a",
                ".post-card-title a",
                "h2 a",
            ]),
            title: strings(&["h1.entry-title", "h1.post-title", "article h1", "main h1", "h1"]),
            body: strings(&[
                ".entry-content",
                ".post-content",
                ".gh-content",
                "article .content",
                "article",
                "main",
            ]),
            author: strings(&[
                "[rel='author']",
                ".author-name",
                ".byline .author",
                ".author",
            ]),
            date: strings(&[".published", ".post-date", ".entry-date", ".date"]),
        }
    }
}

impl SelectorSet {
    pub fn title_chain(&self) -> ExtractionChain {
        ExtractionChain::new("title")
            .then_texts(self.title.iter().cloned())
            .then(Strategy::meta("og:title"))
            .then(Strategy::DocumentTitle)
    }

    pub fn body_chain(&self) -> ExtractionChain {
        ExtractionChain::new("body").then_texts(self.body.iter().cloned())
    }

    pub fn author_chain(&self) -> ExtractionChain {
        ExtractionChain::new("author")
            .then_texts(self.author.iter().cloned())
            .then(Strategy::meta("author"))
            .then(Strategy::meta("article:author"))
    }

    /// Machine-readable dates first, then visible date text.
    pub fn date_chain(&self) -> ExtractionChain {
        ExtractionChain::new("date")
            .then(Strategy::attribute("article time[datetime]", "datetime"))
            .then(Strategy::attribute("time[datetime]", "datetime"))
            .then(Strategy::meta("article:published_time"))
            .then_texts(self.date.iter().cloned())
            .then(Strategy::text("time"))
    }
}
