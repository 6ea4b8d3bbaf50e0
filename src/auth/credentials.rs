//! API credentials.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// Maximum length of the source identifier accepted by the service.
pub const MAX_SOURCE_LEN: usize = 10;

/// Environment variable holding the API access token.
pub const ACCESS_TOKEN_ENV: &str = "EBOEKHOUDEN_ACCESS_TOKEN";

/// Environment variable holding the source identifier.
pub const SOURCE_ENV: &str = "EBOEKHOUDEN_SOURCE";

/// Long-lived credentials exchanged for a session token.
///
/// The access token is never shown in `Debug` output.
///
/// # Example
///
/// ```
/// use eboekhouden::Credentials;
///
/// let creds = Credentials::new("my-access-token", "MyApp").unwrap();
/// assert_eq!(creds.source(), "MyApp");
///
/// // The source identifier is limited to 10 characters
/// assert!(Credentials::new("my-access-token", "MyVeryLongApp").is_err());
/// ```
#[derive(Clone)]
pub struct Credentials {
    access_token: SecretString,
    source: String,
}

impl Credentials {
    /// Create new credentials.
    ///
    /// # Arguments
    ///
    /// * `access_token` - The API token generated in the e-Boekhouden UI
    /// * `source` - Identifies the calling application (1 to 10 characters)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the source is empty or too long.
    pub fn new(access_token: impl Into<String>, source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let len = source.chars().count();
        if len == 0 || len > MAX_SOURCE_LEN {
            return Err(Error::InvalidInput(format!(
                "Source must be 1 to {} characters, got {}",
                MAX_SOURCE_LEN, len
            )));
        }

        Ok(Self {
            access_token: SecretString::from(access_token.into()),
            source,
        })
    }

    /// Read credentials from `EBOEKHOUDEN_ACCESS_TOKEN` and `EBOEKHOUDEN_SOURCE`.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name)
                .map_err(|_| Error::Config(format!("{} environment variable not set", name)))
        };
        Self::new(var(ACCESS_TOKEN_ENV)?, var(SOURCE_ENV)?)
    }

    /// The source identifier.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"[REDACTED]")
            .field("source", &self.source)
            .finish()
    }
}
