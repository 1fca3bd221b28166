//! A single article page.

use blogscan_analysis::Document;
use serde::{Deserialize, Serialize};

use crate::dom::DomQuery;
use crate::error::BrowserError;
use crate::selectors::SelectorSet;

/// Fields read from an article page. `None` means no strategy found a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub url: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
}

impl ArticleContent {
    /// Number of whitespace-separated words in the body.
    pub fn body_word_count(&self) -> usize {
        self.body
            .as_deref()
            .map_or(0, |b| b.split_whitespace().count())
    }

    /// Converts into an analyzer document at 1-based `index`.
    ///
    /// A missing body is recorded as an extraction error so the article
    /// still shows up in the report, with zero words.
    pub fn into_document(self, index: usize) -> Document {
        let mut doc = Document::new(index)
            .with_url(self.url)
            .with_title(self.title.unwrap_or_default())
            .with_author(self.author.unwrap_or_default())
            .with_date(self.date.unwrap_or_default());

        match self.body {
            Some(body) => doc = doc.with_text(body),
            None => {
                doc = doc.with_error(BrowserError::ContentMissing { field: "body" }.to_string());
            }
        }
        doc
    }
}

/// Reads article fields through the configured fallback chains.
pub struct ArticlePage<'a> {
    dom: &'a dyn DomQuery,
    selectors: &'a SelectorSet,
}

impl<'a> ArticlePage<'a> {
    pub fn new(dom: &'a dyn DomQuery, selectors: &'a SelectorSet) -> Self {
        Self { dom, selectors }
    }

    pub async fn title(&self) -> Option<String> {
        self.selectors.title_chain().extract(self.dom).await
    }

    pub async fn body_text(&self) -> Option<String> {
        self.selectors.body_chain().extract(self.dom).await
    }

    pub async fn author(&self) -> Option<String> {
        self.selectors.author_chain().extract(self.dom).await
    }

    pub async fn date(&self) -> Option<String> {
        self.selectors.date_chain().extract(self.dom).await
    }

    /// Reads every field. Never fails; missing fields are `None`.
    pub async fn extract(&self, url: &str) -> ArticleContent {
        ArticleContent {
            url: url.to_string(),
            title: self.title().await,
            body: self.body_text().await,
            author: self.author().await,
            date: self.date().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeDom;
    use blogscan_analysis::{UNKNOWN_AUTHOR, UNKNOWN_DATE, UNKNOWN_TITLE};

    #[tokio::test]
    async fn extracts_wordpress_style_article() {
        let dom = FakeDom::default()
            .with_text("h1.entry-title", "Understanding Lifetimes")
            .with_text(".entry-content", "Lifetimes describe how long references stay valid.")
            .with_text("[rel='author']", "Ferris")
            .with_attribute("article time[datetime]", "datetime", "2026-09-01T08:00:00Z");
        let selectors = SelectorSet::default();

        let content = ArticlePage::new(&dom, &selectors)
            .extract("https://blog.example/lifetimes")
            .await;

        assert_eq!(content.title.as_deref(), Some("Understanding Lifetimes"));
        assert_eq!(content.author.as_deref(), Some("Ferris"));
        assert_eq!(content.date.as_deref(), Some("2026-09-01T08:00:00Z"));
        assert_eq!(content.body_word_count(), 7);
    }

    #[tokio::test]
    async fn falls_back_to_meta_and_plain_article() {
        let dom = FakeDom::default()
            .with_title("Fallback | Blog")
            .with_text("article", "Plain semantic markup body.")
            .with_attribute(r#"meta[property="author"], meta[name="author"]"#, "content", "Meta Author");
        let selectors = SelectorSet::default();
        let page = ArticlePage::new(&dom, &selectors);

        assert_eq!(page.title().await.as_deref(), Some("Fallback | Blog"));
        assert_eq!(page.body_text().await.as_deref(), Some("Plain semantic markup body."));
        assert_eq!(page.author().await.as_deref(), Some("Meta Author"));
        assert_eq!(page.date().await, None);
    }

    #[test]
    fn document_from_full_content() {
        let content = ArticleContent {
            url: "https://blog.example/a".to_string(),
            title: Some("A".to_string()),
            body: Some("Body text".to_string()),
            author: None,
            date: None,
        };
        let doc = content.into_document(2);
        assert_eq!(doc.index, 2);
        assert_eq!(doc.title, "A");
        assert_eq!(doc.text, "Body text");
        assert_eq!(doc.author, UNKNOWN_AUTHOR);
        assert_eq!(doc.date, UNKNOWN_DATE);
        assert!(!doc.is_failed());
    }

    #[test]
    fn missing_body_becomes_error() {
        let content = ArticleContent {
            url: "https://blog.example/empty".to_string(),
            ..ArticleContent::default()
        };
        let doc = content.into_document(1);
        assert!(doc.is_failed());
        assert!(doc.text.is_empty());
        assert_eq!(doc.title, UNKNOWN_TITLE);
        assert_eq!(doc.error.as_deref(), Some("no content found for body"));
    }
}
