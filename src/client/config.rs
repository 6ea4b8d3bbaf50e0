//! Client configuration options.

use std::time::Duration;

use url::Url;

use crate::Result;

/// Default base URL of the e-Boekhouden REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.e-boekhouden.nl/v1/";

/// Configuration for the e-Boekhouden client.
///
/// # Example
///
/// ```
/// use eboekhouden::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are resolved against
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: Duration::from_secs(30),
            user_agent: format!("eboekhouden-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different base URL.
    ///
    /// A trailing slash is added when missing so relative endpoint paths
    /// resolve underneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let mut normalized = base_url.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        self.base_url = Url::parse(&normalized)?;
        Ok(self)
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resolve an endpoint path against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("eboekhouden-rs/"));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:8080/v1")
            .unwrap();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:8080/v1/");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ClientConfig::default().with_base_url("not a url").is_err());
    }

    #[test]
    fn test_endpoint_resolution() {
        let config = ClientConfig::default();
        assert_eq!(
            config.endpoint("ledger/42/balance").unwrap().as_str(),
            "https://api.e-boekhouden.nl/v1/ledger/42/balance"
        );
        assert_eq!(
            config.endpoint("/session").unwrap().as_str(),
            "https://api.e-boekhouden.nl/v1/session"
        );
    }
}
