//! Page objects for the blog under test.
//!
//! Page objects read the DOM through [`crate::DomQuery`] and return plain
//! data; validation is left to the caller.

pub mod article;
pub mod listing;

pub use article::{ArticleContent, ArticlePage};
pub use listing::{ListingPage, unique_links};
