//! Article text extraction for the analyzer.
//!
//! [`TextExtractionSource`] is the boundary between the browser and the
//! word-frequency analyzer. It always yields a [`Document`]: navigation
//! errors, timeouts and missing content are captured in
//! [`Document::error`] instead of being returned, so one broken article
//! never stops a batch.

use async_trait::async_trait;
use blogscan_analysis::Document;
use tracing::{info, warn};

use crate::browser::BlogBrowser;
use crate::error::Result;
use crate::pages::{ArticleContent, ArticlePage};
use crate::selectors::SelectorSet;

/// Produces a [`Document`] for an article URL.
#[async_trait]
pub trait TextExtractionSource: Send + Sync {
    /// Extracts the article at `url` as document number `index` (1-based),
    /// together with what was observed on the page. Failures are recorded
    /// on the returned document and leave `visit` empty.
    async fn fetch_article(&self, index: usize, url: &str) -> FetchedArticle;

    /// Like [`fetch_article`](Self::fetch_article), keeping only the document.
    async fn fetch(&self, index: usize, url: &str) -> Document {
        self.fetch_article(index, url).await.document
    }
}

/// Fetches `urls` in order, numbering documents from 1.
pub async fn collect_documents<S>(source: &S, urls: &[String]) -> Vec<Document>
where
    S: TextExtractionSource + ?Sized,
{
    let mut documents = Vec::with_capacity(urls.len());
    for (i, url) in urls.iter().enumerate() {
        documents.push(source.fetch(i + 1, url).await);
    }
    documents
}

/// Everything observed while visiting one article.
#[derive(Debug, Clone, Default)]
pub struct ArticleVisit {
    pub content: ArticleContent,
    /// Console errors logged while the page loaded
    pub console_errors: Vec<String>,
    /// PNG of the loaded page, when screenshots are enabled
    pub screenshot: Option<Vec<u8>>,
}

/// One article as returned by a [`TextExtractionSource`].
#[derive(Debug, Clone)]
pub struct FetchedArticle {
    pub document: Document,
    /// Page observations; `None` when the article could not be loaded
    pub visit: Option<ArticleVisit>,
}

impl FetchedArticle {
    /// An article that loaded.
    pub fn loaded(index: usize, visit: ArticleVisit) -> Self {
        Self {
            document: visit.content.clone().into_document(index),
            visit: Some(visit),
        }
    }

    /// An article that could not be loaded at all.
    pub fn failed(index: usize, url: &str, error: impl Into<String>) -> Self {
        Self {
            document: Document::failed(index, url, error),
            visit: None,
        }
    }
}

/// Extracts articles with a live browser, one fresh tab per article.
pub struct BrowserArticleSource<'a> {
    browser: &'a BlogBrowser,
    selectors: SelectorSet,
    screenshots: bool,
}

impl<'a> BrowserArticleSource<'a> {
    pub fn new(browser: &'a BlogBrowser, selectors: SelectorSet) -> Self {
        Self {
            browser,
            selectors,
            screenshots: false,
        }
    }

    /// Captures a screenshot of every visited article.
    #[must_use]
    pub fn with_screenshots(mut self, enabled: bool) -> Self {
        self.screenshots = enabled;
        self
    }

    /// Opens `url`, extracts its fields and closes the tab.
    ///
    /// # Errors
    ///
    /// Returns an error if the tab cannot be opened or navigation fails.
    /// Missing fields are not errors; they are `None` in the content.
    pub async fn visit(&self, url: &str) -> Result<ArticleVisit> {
        let page = self.browser.open(url).await?;

        let content = ArticlePage::new(&page, &self.selectors).extract(url).await;
        let console_errors = page.console().errors();
        let screenshot = if self.screenshots {
            match page.screenshot().await {
                Ok(png) => Some(png),
                Err(e) => {
                    warn!(url, error = %e, "screenshot failed");
                    None
                }
            }
        } else {
            None
        };

        if let Err(e) = page.close().await {
            warn!(url, error = %e, "failed to close article tab");
        }

        Ok(ArticleVisit {
            content,
            console_errors,
            screenshot,
        })
    }
}

#[async_trait]
impl TextExtractionSource for BrowserArticleSource<'_> {
    async fn fetch_article(&self, index: usize, url: &str) -> FetchedArticle {
        match self.visit(url).await {
            Ok(visit) => {
                let fetched = FetchedArticle::loaded(index, visit);
                info!(index, url, title = %fetched.document.title, "extracted article");
                fetched
            }
            Err(e) => {
                warn!(index, url, error = %e, "article extraction failed");
                FetchedArticle::failed(index, url, e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Serves canned bodies; unknown URLs fail.
    struct CannedSource {
        bodies: HashMap<String, String>,
    }

    #[async_trait]
    impl TextExtractionSource for CannedSource {
        async fn fetch_article(&self, index: usize, url: &str) -> FetchedArticle {
            match self.bodies.get(url) {
                Some(body) => FetchedArticle::loaded(
                    index,
                    ArticleVisit {
                        content: ArticleContent {
                            url: url.to_string(),
                            body: Some(body.clone()),
                            ..ArticleContent::default()
                        },
                        ..ArticleVisit::default()
                    },
                ),
                None => FetchedArticle::failed(index, url, "navigation failed"),
            }
        }
    }

    #[tokio::test]
    async fn collects_in_order_and_captures_failures() {
        let source = CannedSource {
            bodies: HashMap::from([
                ("https://blog.example/a".to_string(), "first body".to_string()),
                ("https://blog.example/c".to_string(), "third body".to_string()),
            ]),
        };
        let urls = vec![
            "https://blog.example/a".to_string(),
            "https://blog.example/b".to_string(),
            "https://blog.example/c".to_string(),
        ];

        let docs = collect_documents(&source, &urls).await;

        assert_eq!(docs.len(), 3);
        assert_eq!(docs.iter().map(|d| d.index).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(docs[1].is_failed());
        assert_eq!(docs[1].url, "https://blog.example/b");
        assert_eq!(docs[2].text, "third body");
    }

    #[tokio::test]
    async fn fetch_article_keeps_page_observations() {
        let source = CannedSource {
            bodies: HashMap::from([("https://blog.example/a".to_string(), "body".to_string())]),
        };

        let loaded = source.fetch_article(1, "https://blog.example/a").await;
        let visit = loaded.visit.expect("loaded article has a visit");
        assert_eq!(visit.content.body.as_deref(), Some("body"));
        assert_eq!(loaded.document.text, "body");

        let missing = source.fetch_article(2, "https://blog.example/b").await;
        assert!(missing.visit.is_none());
        assert_eq!(missing.document.error.as_deref(), Some("navigation failed"));
        assert!(missing.document.text.is_empty());
    }

    #[tokio::test]
    async fn works_through_trait_object() {
        let source: Box<dyn TextExtractionSource> = Box::new(CannedSource {
            bodies: HashMap::new(),
        });
        let docs = collect_documents(source.as_ref(), &["https://x.dev/".to_string()]).await;
        assert!(docs[0].is_failed());
    }
}
