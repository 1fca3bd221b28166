//! Integration tests for blogscan-browser
//!
//! These tests require Chrome/Chromium to be installed and are marked #[ignore]
//! by default. Run with: cargo test --package blogscan-browser -- --ignored

use blogscan_browser::{
    ArticlePage, BlogBrowser, BrowserArticleSource, BrowserSettings, DomQuery, ListingPage,
    SelectorSet, TextExtractionSource, WaitPolicy,
};
use std::time::Duration;

fn data_url(html: &str) -> String {
    format!("data:text/html,{}", urlencoding::encode(html))
}

fn listing_html() -> String {
    r#"<!DOCTYPE html>
    <html>
    <head><title>Ferris Writes</title></head>
    <body>
        <h1>Latest posts</h1>
        <article><h2><a href="https://blog.example/async">Async in practice</a></h2></article>
        <article><h2><a href="https://blog.example/traits">Trait objects</a></h2></article>
        <article><h2><a href="https://blog.example/async">Async in practice</a></h2></article>
    </body>
    </html>"#
        .to_string()
}

fn article_html() -> String {
    r#"<!DOCTYPE html>
    <html>
    <head>
        <title>Async in practice | Ferris Writes</title>
        <meta name="author" content="Ferris">
    </head>
    <body>
        <article>
            <h1 class="entry-title">Async in practice</h1>
            <time datetime="2026-09-30">September 30</time>
            <div class="entry-content">
                <p>Futures are lazy. An executor polls futures until they complete.</p>
            </div>
        </article>
        <script>console.error("widget failed to load");</script>
    </body>
    </html>"#
        .to_string()
}

async fn launch() -> BlogBrowser {
    BlogBrowser::launch(
        BrowserSettings::default(),
        WaitPolicy::with_timeout(Duration::from_secs(10)),
    )
    .await
    .expect("failed to launch browser")
}

#[tokio::test]
#[ignore] // Requires Chrome to be installed
async fn listing_page_reads_unique_links() {
    let browser = launch().await;
    let page = browser.open(&data_url(&listing_html())).await.expect("navigate");
    let selectors = SelectorSet::default();
    let listing = ListingPage::new(&page, &selectors);

    assert_eq!(listing.page_title().await.unwrap(), "Ferris Writes");
    assert_eq!(listing.heading().await.unwrap().as_deref(), Some("Latest posts"));

    let links = listing.article_links().await;
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].text, "Async in practice");
    assert_eq!(links[0].href, "https://blog.example/async");

    page.close().await.expect("close page");
    browser.close().await.expect("close browser");
}

#[tokio::test]
#[ignore]
async fn article_page_extracts_fields() {
    let browser = launch().await;
    let page = browser.open(&data_url(&article_html())).await.expect("navigate");
    let selectors = SelectorSet::default();

    let content = ArticlePage::new(&page, &selectors).extract("data:article").await;
    assert_eq!(content.title.as_deref(), Some("Async in practice"));
    assert_eq!(content.author.as_deref(), Some("Ferris"));
    assert_eq!(content.date.as_deref(), Some("2026-09-30"));
    assert!(content.body.unwrap().contains("executor polls futures"));

    page.close().await.expect("close page");
    browser.close().await.expect("close browser");
}

#[tokio::test]
#[ignore]
async fn console_errors_are_captured() {
    let browser = launch().await;
    let page = browser.open(&data_url(&article_html())).await.expect("navigate");

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(
        page.console()
            .errors()
            .iter()
            .any(|e| e.contains("widget failed")),
        "console error should be recorded"
    );

    browser.close().await.expect("close browser");
}

#[tokio::test]
#[ignore]
async fn wait_for_selector_times_out_on_missing_element() {
    let browser = launch().await;
    let page = browser.open(&data_url(&listing_html())).await.expect("navigate");

    page.wait_for_selector("article", WaitPolicy::default())
        .await
        .expect("article should exist");

    let missing = page
        .wait_for_selector(
            "#does-not-exist",
            WaitPolicy::new(Duration::from_millis(300), Duration::from_millis(50)),
        )
        .await;
    assert!(missing.is_err());
    assert_eq!(page.count("article").await.unwrap(), 3);

    browser.close().await.expect("close browser");
}

#[tokio::test]
#[ignore]
async fn source_turns_failures_into_documents() {
    let browser = launch().await;
    let source = BrowserArticleSource::new(&browser, SelectorSet::default());

    let ok = source.fetch(1, &data_url(&article_html())).await;
    assert!(!ok.is_failed());
    assert_eq!(ok.title, "Async in practice");
    assert!(ok.text.contains("Futures are lazy"));

    let empty = source
        .fetch(2, &data_url("<html><head><title>Empty</title></head><body></body></html>"))
        .await;
    assert!(empty.is_failed());
    assert!(empty.text.is_empty());

    browser.close().await.expect("close browser");
}

#[tokio::test]
#[ignore]
async fn failed_open_closes_its_tab() {
    let browser = launch().await;
    let before = browser.page_count().await.unwrap();

    let err = browser.open("not a url").await;
    assert!(err.is_err());

    // Target teardown is reported asynchronously
    blogscan_browser::poll_until(
        || async { Ok(browser.page_count().await? == before) },
        WaitPolicy::new(Duration::from_secs(5), Duration::from_millis(50)),
        "failed tab to close",
    )
    .await
    .expect("tab left open after failed navigation");

    // The browser is still usable
    let page = browser.open(&data_url(&listing_html())).await.unwrap();
    page.close().await.unwrap();
    browser.close().await.expect("close browser");
}
