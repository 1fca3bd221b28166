//! JavaScript snippets evaluated in the page to read the DOM.
//!
//! Selectors and attribute names are embedded as JSON string literals, so
//! quotes, backticks and newlines in them cannot break out of the script.
//! Every snippet is a plain expression (no leading function), which keeps
//! chromiumoxide on the `Runtime.evaluate` path.

use crate::error::{BrowserError, Result};

fn quote(value: &str) -> Result<String> {
    serde_json::to_string(value).map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
}

/// Trimmed rendered text of the first match, or `""`.
pub fn first_text(selector: &str) -> Result<String> {
    Ok(format!(
        "Array.from(document.querySelectorAll({})).slice(0, 1)\
         .map(e => (e.innerText || e.textContent || '').trim()).join('')",
        quote(selector)?
    ))
}

/// Trimmed rendered text of every match.
pub fn all_texts(selector: &str) -> Result<String> {
    Ok(format!(
        "Array.from(document.querySelectorAll({}))\
         .map(e => (e.innerText || e.textContent || '').trim())",
        quote(selector)?
    ))
}

/// Attribute value of the first match, or `""`.
pub fn first_attribute(selector: &str, attribute: &str) -> Result<String> {
    Ok(format!(
        "Array.from(document.querySelectorAll({})).slice(0, 1)\
         .map(e => (e.getAttribute({}) || '').trim()).join('')",
        quote(selector)?,
        quote(attribute)?
    ))
}

/// `{ text, href }` for every match that is, or contains, an anchor.
/// `href` is the resolved absolute URL.
pub fn links(selector: &str) -> Result<String> {
    Ok(format!(
        "Array.from(document.querySelectorAll({}))\
         .map(e => e.matches('a[href]') ? e : e.querySelector('a[href]'))\
         .filter(a => a)\
         .map(a => ({{ text: (a.innerText || a.textContent || '').trim(), href: a.href || '' }}))",
        quote(selector)?
    ))
}

/// Number of matches.
pub fn count(selector: &str) -> Result<String> {
    Ok(format!(
        "document.querySelectorAll({}).length",
        quote(selector)?
    ))
}

/// True once at least one element matches.
pub fn exists(selector: &str) -> Result<String> {
    Ok(format!("!!document.querySelector({})", quote(selector)?))
}
