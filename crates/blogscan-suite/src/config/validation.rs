use crate::config::SuiteConfig;
use crate::error::ConfigError;

/// Validate that `url` is an absolute `http(s)` URL with a host.
pub fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigError::MissingField {
            field: "base_url".to_string(),
            hint: "Set base_url in blogscan.toml or BLOGSCAN_BASE_URL".to_string(),
        });
    }

    let host = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match host {
        Some(rest) if !rest.trim_start_matches('/').is_empty() => Ok(()),
        _ => Err(ConfigError::InvalidValue {
            field: "base_url".to_string(),
            value: url.to_string(),
            hint: "Use an absolute http:// or https:// URL".to_string(),
        }),
    }
}

impl SuiteConfig {
    /// Validate configuration for logical consistency.
    ///
    /// # Errors
    ///
    /// Rejects a missing or non-http base URL, a zero article count and a
    /// negative `top_words`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_base_url(&self.base_url)?;

        if self.article_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "article_count".to_string(),
                value: "0".to_string(),
                hint: "Visit at least one article".to_string(),
            });
        }

        if self.top_words < 0 {
            return Err(ConfigError::InvalidValue {
                field: "top_words".to_string(),
                value: self.top_words.to_string(),
                hint: "Use 0 or a positive number of words".to_string(),
            });
        }

        Ok(())
    }
}
