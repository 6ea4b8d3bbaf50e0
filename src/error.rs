//! Error types for the e-Boekhouden API client.
//!
//! Every non-2xx response from the service becomes [`Error::Api`]. Transport
//! failures are passed through unchanged as [`Error::Http`].

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for e-Boekhouden operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all e-Boekhouden API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (DNS, TLS, timeout, connection reset)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// API returned a non-2xx response
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Machine-readable error code from the API, e.g. `API_SESSION_001`
        code: Option<String>,
        /// Human-readable error message
        message: String,
        /// Decoded response body, if it was JSON
        body: Option<Value>,
    },

    /// A successful response had no body where data was expected
    #[error("Empty response body")]
    EmptyResponse,

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status of an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Machine-readable error code of an API error, if the service sent one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Full decoded body of an API error.
    ///
    /// # Example
    ///
    /// ```
    /// # fn inspect(err: &eboekhouden::Error) {
    /// if let Some(body) = err.body() {
    ///     println!("server said: {}", body);
    /// }
    /// # }
    /// ```
    pub fn body(&self) -> Option<&Value> {
        match self {
            Error::Api { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, expired session, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::Config(_) | Error::UrlParse(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Create an API error from a non-2xx response.
    ///
    /// The message is taken from `message`, then `title`, then falls back to
    /// `HTTP Error {status}`.
    pub(crate) fn from_api_response(status: u16, body: Option<Value>) -> Self {
        let field = |name: &str| {
            body.as_ref()
                .and_then(|b| b.get(name))
                .and_then(|v| v.as_str())
                .map(String::from)
        };

        let code = field("code");
        let message = field("message")
            .or_else(|| field("title"))
            .unwrap_or_else(|| format!("HTTP Error {}", status));

        Error::Api {
            status,
            code,
            message,
            body,
        }
    }
}
