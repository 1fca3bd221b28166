//! Console message capture for pages under test.
//!
//! Every [`crate::Page`] records the messages its scripts write to the
//! console. Article checks use the error count to flag pages whose scripts
//! break while rendering.

use chromiumoxide::cdp::js_protocol::runtime::{ConsoleApiCalledType, EventConsoleApiCalled};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// Severity of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsoleLevel {
    Log,
    Info,
    Warning,
    Error,
    Debug,
    Other,
}

impl From<&ConsoleApiCalledType> for ConsoleLevel {
    fn from(kind: &ConsoleApiCalledType) -> Self {
        match kind {
            ConsoleApiCalledType::Log => ConsoleLevel::Log,
            ConsoleApiCalledType::Info => ConsoleLevel::Info,
            ConsoleApiCalledType::Warning => ConsoleLevel::Warning,
            ConsoleApiCalledType::Error => ConsoleLevel::Error,
            ConsoleApiCalledType::Debug => ConsoleLevel::Debug,
            _ => ConsoleLevel::Other,
        }
    }
}

/// One captured console message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleEntry {
    pub level: ConsoleLevel,
    /// Arguments joined with spaces; non-string arguments render as `<object>`
    pub text: String,
    /// `url:line:column` of the calling frame, if known
    pub source: Option<String>,
}

impl ConsoleEntry {
    pub fn new(level: ConsoleLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            source: None,
        }
    }

    pub(crate) fn from_event(event: &EventConsoleApiCalled) -> Self {
        let text = event
            .args
            .iter()
            .map(|arg| {
                arg.value
                    .as_ref()
                    .and_then(|v| v.as_str())
                    .unwrap_or("<object>")
            })
            .collect::<Vec<_>>()
            .join(" ");

        let source = event
            .stack_trace
            .as_ref()
            .and_then(|trace| trace.call_frames.first())
            .map(|frame| format!("{}:{}:{}", frame.url, frame.line_number, frame.column_number));

        Self {
            level: ConsoleLevel::from(&event.r#type),
            text,
            source,
        }
    }
}

/// Shared, append-only console log for one page.
///
/// Cloning is cheap; clones see the same entries.
#[derive(Debug, Clone, Default)]
pub struct ConsoleLog {
    entries: Arc<Mutex<Vec<ConsoleEntry>>>,
}

impl ConsoleLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Entries are dropped if the lock is poisoned.
    pub(crate) fn push(&self, entry: ConsoleEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }

    /// Snapshot of every entry in arrival order.
    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Text of every error-level entry.
    pub fn errors(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.level == ConsoleLevel::Error)
            .map(|e| e.text.clone())
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|e| e.level == ConsoleLevel::Error)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entry, e.g. before navigating the same page again.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}
