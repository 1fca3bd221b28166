//! Page-level browser operations.
//!
//! [`Page`] wraps a chromiumoxide tab, records its console output, and
//! implements [`DomQuery`] so page objects can read the DOM without
//! knowing about the DevTools protocol.

use crate::console::{ConsoleEntry, ConsoleLog};
use crate::dom::{DomQuery, LinkInfo, non_empty};
use crate::error::{BrowserError, Result};
use crate::script;
use crate::wait::{WaitPolicy, poll_until};
use async_trait::async_trait;
use chromiumoxide::cdp::js_protocol::runtime::EventConsoleApiCalled;
use chromiumoxide::page::{Page as ChromePage, ScreenshotParams};
use futures::StreamExt;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A browser tab.
#[derive(Debug)]
pub struct Page {
    inner: Arc<ChromePage>,
    console: ConsoleLog,
    wait: WaitPolicy,
    console_task: JoinHandle<()>,
}

impl Page {
    /// Wraps a tab and starts recording its console.
    pub(crate) fn new(page: ChromePage, wait: WaitPolicy) -> Self {
        let console = ConsoleLog::new();
        let sink = console.clone();
        let inner = Arc::new(page);

        let listener = inner.clone();
        let console_task = tokio::spawn(async move {
            if let Ok(mut events) = listener.event_listener::<EventConsoleApiCalled>().await {
                while let Some(event) = events.next().await {
                    sink.push(ConsoleEntry::from_event(&event));
                }
            }
        });

        Self {
            inner,
            console,
            wait,
            console_task,
        }
    }

    /// Console messages recorded since the page was opened.
    pub fn console(&self) -> &ConsoleLog {
        &self.console
    }

    /// The wait policy applied by [`navigate`](Self::navigate).
    pub fn wait_policy(&self) -> WaitPolicy {
        self.wait
    }

    /// Navigates to an absolute URL and waits until the document is complete.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the page fails to load, or `WaitTimeout`
    /// if it never reaches `readyState == "complete"`.
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!(url, "navigating");
        self.inner
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        self.wait_for_load(self.wait).await
    }

    /// Waits until `document.readyState` is `"complete"`.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if the document does not finish loading in time.
    pub async fn wait_for_load(&self, policy: WaitPolicy) -> Result<()> {
        poll_until(
            || {
                let page = self.inner.clone();
                async move {
                    let result = page
                        .evaluate("document.readyState")
                        .await
                        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

                    Ok(result
                        .value()
                        .and_then(|v| v.as_str())
                        .is_some_and(|s| s == "complete"))
                }
            },
            policy,
            "document ready",
        )
        .await
    }

    /// Waits for at least one element to match `selector`.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if nothing matches in time.
    pub async fn wait_for_selector(&self, selector: &str, policy: WaitPolicy) -> Result<()> {
        let script = script::exists(selector)?;

        poll_until(
            || {
                let page = self.inner.clone();
                let script = script.clone();
                async move {
                    let result = page
                        .evaluate(script.as_str())
                        .await
                        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

                    Ok(result
                        .value()
                        .and_then(serde_json::Value::as_bool)
                        .unwrap_or(false))
                }
            },
            policy,
            &format!("selector '{selector}'"),
        )
        .await
    }

    /// Evaluates a JavaScript expression and deserializes its value.
    ///
    /// Do not pass unescaped user input; the [`DomQuery`] methods quote
    /// their selectors.
    ///
    /// # Errors
    ///
    /// Returns `ScriptExecutionFailed` if evaluation fails or the value does
    /// not deserialize into `T`.
    pub async fn evaluate<T>(&self, script: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let result = self
            .inner
            .evaluate(script)
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Current URL.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn url(&self) -> Result<String> {
        self.evaluate("window.location.href").await
    }

    /// PNG screenshot of the viewport.
    ///
    /// # Errors
    ///
    /// Returns an error if capture fails.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        self.inner
            .screenshot(ScreenshotParams::default())
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Closes the tab.
    ///
    /// The console listener holds a reference to the tab, so it is stopped
    /// first. If another reference is still alive the tab is left for the
    /// browser to close.
    ///
    /// # Errors
    ///
    /// Returns an error if the DevTools close command fails.
    pub async fn close(self) -> Result<()> {
        self.console_task.abort();
        // Let the aborted task drop its Arc before unwrapping
        let _ = self.console_task.await;

        match Arc::try_unwrap(self.inner) {
            Ok(page) => {
                page.close().await?;
                Ok(())
            }
            Err(_) => {
                warn!("page still referenced on close; leaving it to the browser");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl DomQuery for Page {
    async fn text_of(&self, selector: &str) -> Result<Option<String>> {
        let text: String = self.evaluate(&script::first_text(selector)?).await?;
        Ok(non_empty(text))
    }

    async fn texts_of(&self, selector: &str) -> Result<Vec<String>> {
        self.evaluate(&script::all_texts(selector)?).await
    }

    async fn attribute_of(&self, selector: &str, attribute: &str) -> Result<Option<String>> {
        let value: String = self
            .evaluate(&script::first_attribute(selector, attribute)?)
            .await?;
        Ok(non_empty(value))
    }

    async fn links_in(&self, selector: &str) -> Result<Vec<LinkInfo>> {
        self.evaluate(&script::links(selector)?).await
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        self.evaluate(&script::count(selector)?).await
    }

    async fn title(&self) -> Result<String> {
        self.evaluate("document.title").await
    }
}
