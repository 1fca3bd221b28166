//! # blogscan-browser
//!
//! Headless Chrome automation for checking a blog, built on chromiumoxide.
//!
//! The crate launches a browser, opens the blog's listing and article
//! pages, and reads their content through page objects. It is also the
//! upstream half of the word-frequency analysis: [`TextExtractionSource`]
//! turns article URLs into [`blogscan_analysis::Document`]s, capturing any
//! failure on the document instead of returning it.
//!
//! ## Architecture
//!
//! - **BlogBrowser**: Chrome process lifecycle
//! - **Page**: one tab, with navigation, waits, screenshots and console capture
//! - **DomQuery**: the read-only DOM interface page objects depend on
//! - **ExtractionChain**: ordered fallback strategies for one field
//! - **ListingPage / ArticlePage**: page objects for the blog
//! - **BlogSite**: where the blog lives
//!
//! ## Example
//!
//! ```ignore
//! use blogscan_browser::{
//!     BlogBrowser, BlogSite, BrowserArticleSource, BrowserSettings, ListingPage,
//!     SelectorSet, StaticSite, WaitPolicy, collect_documents,
//! };
//!
//! let site = StaticSite::new("https://blog.example.com");
//! let browser = BlogBrowser::launch(BrowserSettings::default(), WaitPolicy::default()).await?;
//! let selectors = SelectorSet::default();
//!
//! let listing = browser.open(&site.listing_url()).await?;
//! let urls: Vec<String> = ListingPage::new(&listing, &selectors)
//!     .recent(5)
//!     .await
//!     .into_iter()
//!     .map(|link| link.href)
//!     .collect();
//!
//! let source = BrowserArticleSource::new(&browser, selectors.clone());
//! let documents = collect_documents(&source, &urls).await;
//! browser.close().await?;
//! ```
//!
//! Browser tests need Chrome installed and are `#[ignore]`d; run them with
//! `cargo test -p blogscan-browser -- --ignored`.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod console;
pub mod dom;
pub mod error;
pub mod extract;
pub mod page;
pub mod pages;
pub mod script;
pub mod selectors;
pub mod site;
pub mod source;
pub mod wait;

pub use browser::{BlogBrowser, BrowserSettings};
pub use console::{ConsoleEntry, ConsoleLevel, ConsoleLog};
pub use dom::{DomQuery, LinkInfo};
pub use error::{BrowserError, Result};
pub use extract::{Extracted, ExtractionChain, Strategy};
pub use page::Page;
pub use pages::{ArticleContent, ArticlePage, ListingPage, unique_links};
pub use selectors::SelectorSet;
pub use site::{BlogSite, StaticSite};
pub use source::{
    ArticleVisit, BrowserArticleSource, FetchedArticle, TextExtractionSource, collect_documents,
};
pub use wait::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT, WaitPolicy, poll_until};
