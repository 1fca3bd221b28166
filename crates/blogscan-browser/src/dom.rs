//! Read-only DOM queries used by page objects and extraction chains.
//!
//! [`crate::Page`] implements [`DomQuery`] against a live browser tab. Page
//! objects only depend on the trait, so their logic can be exercised with an
//! in-memory document in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An anchor found on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkInfo {
    /// Visible link text, trimmed
    pub text: String,
    /// Absolute URL as resolved by the browser
    pub href: String,
}

impl LinkInfo {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
        }
    }
}

/// DOM reads needed to validate and extract blog pages.
///
/// Methods return empty values rather than errors when nothing matches;
/// errors are reserved for failures to talk to the page at all.
#[async_trait]
pub trait DomQuery: Send + Sync {
    /// Trimmed text of the first element matching `selector`, if non-empty.
    async fn text_of(&self, selector: &str) -> Result<Option<String>>;

    /// Trimmed text of every element matching `selector`.
    async fn texts_of(&self, selector: &str) -> Result<Vec<String>>;

    /// Trimmed attribute of the first element matching `selector`, if non-empty.
    async fn attribute_of(&self, selector: &str, attribute: &str) -> Result<Option<String>>;

    /// Anchors matched by, or nested in, `selector`.
    async fn links_in(&self, selector: &str) -> Result<Vec<LinkInfo>>;

    /// Number of elements matching `selector`.
    async fn count(&self, selector: &str) -> Result<usize>;

    /// The document title.
    async fn title(&self) -> Result<String>;
}

pub(crate) fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_trims_and_rejects_blank() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(" hi ".to_string()), Some("hi".to_string()));
        assert_eq!(non_empty("hi".to_string()), Some("hi".to_string()));
    }
}
