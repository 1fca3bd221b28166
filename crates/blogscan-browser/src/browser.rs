//! Browser lifecycle management.
//!
//! [`BlogBrowser`] launches Chrome, drives the DevTools event loop on a
//! background task, and hands out [`Page`]s. Call [`BlogBrowser::close`]
//! when the suite finishes; dropping an open browser kills the process.

use crate::error::{BrowserError, Result};
use crate::page::Page;
use crate::wait::WaitPolicy;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Launch options for the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Run without a window. Defaults to true unless the `visible` feature is on.
    pub headless: bool,
    pub window_width: u32,
    pub window_height: u32,
    /// Chrome executable; `None` lets chromiumoxide detect it.
    pub chrome_path: Option<String>,
    /// Extra Chrome command-line arguments.
    pub extra_args: Vec<String>,
}

impl BrowserSettings {
    /// Shows the browser window, for debugging a failing check.
    #[must_use]
    pub fn visible(mut self) -> Self {
        self.headless = false;
        self
    }

    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.extra_args.extend(args);
        self
    }

    /// Chrome arguments derived from these settings, in launch order.
    pub fn chrome_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.headless {
            args.push("--headless".to_string());
        }
        args.push(format!(
            "--window-size={},{}",
            self.window_width, self.window_height
        ));

        // Separate profile per launch so parallel runs don't share a ProcessSingleton lock
        let profile = std::env::temp_dir().join(format!("blogscan-{}", uuid::Uuid::new_v4()));
        args.push(format!("--user-data-dir={}", profile.display()));

        args.extend(self.extra_args.iter().cloned());
        args
    }

    #[allow(clippy::result_large_err)]
    fn to_browser_config(&self) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder();
        if !self.headless {
            builder = builder.with_head();
        }
        for arg in self.chrome_args() {
            builder = builder.arg(arg);
        }
        if let Some(path) = &self.chrome_path {
            builder = builder.chrome_executable(path.clone());
        }

        builder.build().map_err(|e| BrowserError::LaunchFailed {
            reason: format!("invalid browser configuration: {e}"),
            source: None,
        })
    }
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            headless: !cfg!(feature = "visible"),
            window_width: 1366,
            window_height: 900,
            chrome_path: None,
            extra_args: vec![
                // Needed where user namespaces are unavailable (CI containers).
                // Only ever point this at the blog under test.
                "--no-sandbox".to_string(),
                "--disable-dev-shm-usage".to_string(),
            ],
        }
    }
}

/// A running Chrome instance.
pub struct BlogBrowser {
    inner: Arc<Mutex<Option<Browser>>>,
    wait: WaitPolicy,
}

impl BlogBrowser {
    /// Launches Chrome.
    ///
    /// # Errors
    ///
    /// Returns `LaunchFailed` if Chrome is missing or fails to start.
    pub async fn launch(settings: BrowserSettings, wait: WaitPolicy) -> Result<Self> {
        debug!(?settings, "launching browser");

        let config = settings.to_browser_config()?;
        let (browser, mut handler) =
            Browser::launch(config)
                .await
                .map_err(|e| BrowserError::LaunchFailed {
                    reason: "failed to launch Chrome process".to_string(),
                    source: Some(Box::new(e)),
                })?;

        // chromiumoxide only processes CDP traffic while the handler is polled
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("browser handler error: {e}");
                }
            }
        });

        info!(headless = settings.headless, "browser launched");

        Ok(Self {
            inner: Arc::new(Mutex::new(Some(browser))),
            wait,
        })
    }

    /// Wait policy shared by every page this browser opens.
    pub fn wait_policy(&self) -> WaitPolicy {
        self.wait
    }

    /// Opens a blank tab.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyClosed` after [`close`](Self::close), or
    /// `ConnectionFailed` if Chrome refuses the new target.
    pub async fn new_page(&self) -> Result<Page> {
        let guard = self.inner.lock().await;
        let browser = guard.as_ref().ok_or(BrowserError::AlreadyClosed)?;

        let chrome_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;

        Ok(Page::new(chrome_page, self.wait))
    }

    /// Opens a tab and navigates it to `url`. The tab is closed again if
    /// navigation fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the tab cannot be opened or navigation fails.
    pub async fn open(&self, url: &str) -> Result<Page> {
        let page = self.new_page().await?;
        match page.navigate(url).await {
            Ok(()) => Ok(page),
            Err(e) => {
                if let Err(close_err) = page.close().await {
                    warn!(url, error = %close_err, "failed to close tab after navigation error");
                }
                Err(e)
            }
        }
    }

    /// Number of tabs currently open in Chrome.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyClosed` after [`close`](Self::close), or
    /// `ConnectionFailed` if Chrome cannot list its targets.
    pub async fn page_count(&self) -> Result<usize> {
        let guard = self.inner.lock().await;
        let browser = guard.as_ref().ok_or(BrowserError::AlreadyClosed)?;

        let pages = browser
            .pages()
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
        Ok(pages.len())
    }

    /// Closes Chrome gracefully.
    ///
    /// # Errors
    ///
    /// Returns an error if the close command fails.
    pub async fn close(self) -> Result<()> {
        let mut guard = self.inner.lock().await;

        if let Some(mut browser) = guard.take() {
            debug!("closing browser");
            browser
                .close()
                .await
                .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
        }

        Ok(())
    }

    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.is_none()
    }
}

impl Drop for BlogBrowser {
    fn drop(&mut self) {
        // chromiumoxide's Browser kills the process when dropped
        if let Ok(guard) = self.inner.try_lock() {
            if guard.is_some() {
                warn!("BlogBrowser dropped without close(); killing Chrome");
            }
        }
    }
}
