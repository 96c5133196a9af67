//! Client configuration.

use std::time::Duration;

/// Configuration for a [`WikipediaClient`](crate::WikipediaClient).
///
/// The defaults target the production English Wikipedia endpoint. Tests
/// (and callers wanting another language edition or a private MediaWiki
/// install) swap in their own `base_url`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the MediaWiki `api.php` endpoint
    pub base_url: String,

    /// Total per-request timeout
    pub timeout: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://en.wikipedia.org/w/api.php".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))
                .to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at a different `api.php` endpoint,
    /// e.g. a fixture server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_english_wikipedia() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://en.wikipedia.org/w/api.php");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("wikiquery/"));
    }

    #[test]
    fn with_base_url_keeps_other_defaults() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:8080/w/api.php");
        assert_eq!(config.base_url, "http://127.0.0.1:8080/w/api.php");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
