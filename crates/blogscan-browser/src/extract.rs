//! Fallback extraction chains.
//!
//! Blog themes put the same information in different places. An
//! [`ExtractionChain`] lists [`Strategy`]s in preference order and returns
//! the first non-empty value. A strategy that errors (a bad selector, a
//! script failure) is logged and skipped; it never fails the chain.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::dom::{DomQuery, non_empty};

/// One way of reading a value from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Strategy {
    /// Rendered text of the first element matching the selector
    Text { selector: String },
    /// An attribute of the first element matching the selector
    Attribute { selector: String, attribute: String },
    /// `content` of a `<meta>` tag by `property` or `name`
    Meta { key: String },
    /// `document.title`
    DocumentTitle,
}

impl Strategy {
    pub fn text(selector: impl Into<String>) -> Self {
        Self::Text {
            selector: selector.into(),
        }
    }

    pub fn attribute(selector: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::Attribute {
            selector: selector.into(),
            attribute: attribute.into(),
        }
    }

    pub fn meta(key: impl Into<String>) -> Self {
        Self::Meta { key: key.into() }
    }

    /// CSS selector matching a meta tag by `property` or `name`.
    fn meta_selector(key: &str) -> String {
        let escaped = key.replace('\\', "\\\\").replace('"', "\\\"");
        format!(r#"meta[property="{escaped}"], meta[name="{escaped}"]"#)
    }

    async fn apply(&self, dom: &dyn DomQuery) -> crate::Result<Option<String>> {
        match self {
            Self::Text { selector } => dom.text_of(selector).await,
            Self::Attribute {
                selector,
                attribute,
            } => dom.attribute_of(selector, attribute).await,
            Self::Meta { key } => dom.attribute_of(&Self::meta_selector(key), "content").await,
            Self::DocumentTitle => dom.title().await.map(non_empty),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { selector } => write!(f, "text({selector})"),
            Self::Attribute {
                selector,
                attribute,
            } => write!(f, "attr({selector}@{attribute})"),
            Self::Meta { key } => write!(f, "meta({key})"),
            Self::DocumentTitle => f.write_str("document.title"),
        }
    }
}

/// A value found by a chain, with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub value: String,
    pub strategy: Strategy,
}

/// Ordered strategies for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionChain {
    field: &'static str,
    strategies: Vec<Strategy>,
}

impl ExtractionChain {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            strategies: Vec::new(),
        }
    }

    #[must_use]
    pub fn then(mut self, strategy: Strategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    /// Appends a text strategy per selector, in order.
    #[must_use]
    pub fn then_texts<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strategies
            .extend(selectors.into_iter().map(Strategy::text));
        self
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Tries each strategy in order and returns the first non-empty value.
    pub async fn first_match(&self, dom: &dyn DomQuery) -> Option<Extracted> {
        for strategy in &self.strategies {
            match strategy.apply(dom).await {
                Ok(Some(value)) => {
                    debug!(field = self.field, %strategy, "extracted");
                    return Some(Extracted {
                        value,
                        strategy: strategy.clone(),
                    });
                }
                Ok(None) => trace!(field = self.field, %strategy, "no match"),
                Err(e) => debug!(field = self.field, %strategy, error = %e, "strategy failed"),
            }
        }
        None
    }

    /// Like [`first_match`](Self::first_match), returning only the value.
    pub async fn extract(&self, dom: &dyn DomQuery) -> Option<String> {
        self.first_match(dom).await.map(|found| found.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeDom;

    fn title_chain() -> ExtractionChain {
        ExtractionChain::new("title")
            .then_texts(["h1.entry-title", "article h1"])
            .then(Strategy::meta("og:title"))
            .then(Strategy::DocumentTitle)
    }

    #[tokio::test]
    async fn first_strategy_wins() {
        let dom = FakeDom::default()
            .with_text("h1.entry-title", "Primary")
            .with_text("article h1", "Secondary");
        let found = title_chain().first_match(&dom).await.unwrap();
        assert_eq!(found.value, "Primary");
        assert_eq!(found.strategy, Strategy::text("h1.entry-title"));
    }

    #[tokio::test]
    async fn falls_through_blank_and_missing() {
        let dom = FakeDom::default()
            .with_text("h1.entry-title", "   ")
            .with_attribute(
                r#"meta[property="og:title"], meta[name="og:title"]"#,
                "content",
                "From meta",
            );
        assert_eq!(title_chain().extract(&dom).await.as_deref(), Some("From meta"));
    }

    #[tokio::test]
    async fn failing_strategy_is_skipped() {
        let dom = FakeDom::default()
            .with_broken("h1.entry-title")
            .with_text("article h1", "Recovered");
        assert_eq!(title_chain().extract(&dom).await.as_deref(), Some("Recovered"));
    }

    #[tokio::test]
    async fn document_title_is_last_resort() {
        let dom = FakeDom::default().with_title("Blog | Post");
        let found = title_chain().first_match(&dom).await.unwrap();
        assert_eq!(found.strategy, Strategy::DocumentTitle);
        assert_eq!(found.value, "Blog | Post");
    }

    #[tokio::test]
    async fn nothing_found() {
        let dom = FakeDom::default();
        assert!(title_chain().extract(&dom).await.is_none());
        assert!(ExtractionChain::new("empty").extract(&dom).await.is_none());
    }

    #[test]
    fn meta_selector_escapes_quotes() {
        assert_eq!(
            Strategy::meta_selector(r#"a"b"#),
            r#"meta[property="a\"b"], meta[name="a\"b"]"#
        );
    }

    #[test]
    fn strategies_deserialize_from_tagged_config() {
        let strategy: Strategy =
            serde_json::from_str(r#"{"kind":"attribute","selector":"time","attribute":"datetime"}"#)
                .unwrap();
        assert_eq!(strategy, Strategy::attribute("time", "datetime"));
        assert_eq!(strategy.to_string(), "attr(time@datetime)");
    }
}
