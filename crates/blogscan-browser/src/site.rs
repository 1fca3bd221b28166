//! The blog under test.
//!
//! A [`BlogSite`] only knows URLs. Whoever runs the suite decides where the
//! blog lives (a deployed site, a local preview server) and hands it over
//! through this trait.

use std::fmt;

/// A blog reachable over HTTP.
pub trait BlogSite: Send + Sync {
    /// Base URL, e.g. `https://blog.example.com`.
    fn base_url(&self) -> &str;

    /// Path of the article listing page relative to the base URL.
    fn listing_path(&self) -> &str {
        "/"
    }

    /// Joins `path` to the base URL with exactly one slash between them.
    /// Absolute `http(s)` URLs are returned unchanged.
    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Full URL of the listing page.
    fn listing_url(&self) -> String {
        self.url(self.listing_path())
    }
}

impl fmt::Debug for dyn BlogSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlogSite")
            .field("base_url", &self.base_url())
            .field("listing_path", &self.listing_path())
            .finish()
    }
}

/// A blog at a fixed, already-running URL.
#[derive(Debug, Clone)]
pub struct StaticSite {
    base_url: String,
    listing_path: String,
}

impl StaticSite {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            listing_path: "/".to_string(),
        }
    }

    #[must_use]
    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }
}

impl BlogSite for StaticSite {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn listing_path(&self) -> &str {
        &self.listing_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_with_single_slash() {
        let site = StaticSite::new("https://blog.example.com");
        assert_eq!(site.url("/posts"), "https://blog.example.com/posts");
        assert_eq!(site.url("posts"), "https://blog.example.com/posts");

        let trailing = StaticSite::new("https://blog.example.com/");
        assert_eq!(trailing.url("/posts"), "https://blog.example.com/posts");
    }

    #[test]
    fn absolute_urls_pass_through() {
        let site = StaticSite::new("https://blog.example.com");
        assert_eq!(
            site.url("https://cdn.example.com/a"),
            "https://cdn.example.com/a"
        );
    }

    #[test]
    fn listing_url_uses_listing_path() {
        let site = StaticSite::new("https://blog.example.com").with_listing_path("/blog/");
        assert_eq!(site.listing_url(), "https://blog.example.com/blog/");
        assert_eq!(StaticSite::new("https://x.dev").listing_url(), "https://x.dev/");
    }

    struct PreviewServer {
        port: u16,
        base: String,
    }

    impl BlogSite for PreviewServer {
        fn base_url(&self) -> &str {
            &self.base
        }
    }

    #[test]
    fn base_url_is_all_a_site_needs() {
        let port = 4000;
        let server = PreviewServer {
            port,
            base: format!("http://127.0.0.1:{port}"),
        };
        let site: &dyn BlogSite = &server;
        assert_eq!(site.listing_url(), format!("http://127.0.0.1:{}/", server.port));
        assert!(format!("{site:?}").contains("listing_path: \"/\""));
    }
}
