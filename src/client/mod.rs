//! HTTP client and service layer for the e-Boekhouden API.
//!
//! This module provides the main entry point [`EBoekhoudenClient`] for
//! interacting with the e-Boekhouden API.
//!
//! # Example
//!
//! ```no_run
//! use eboekhouden::{ClientConfig, Credentials, EBoekhoudenClient};
//! use std::time::Duration;
//!
//! # async fn example() -> eboekhouden::Result<()> {
//! let config = ClientConfig::default().with_timeout(Duration::from_secs(10));
//! let client = EBoekhoudenClient::with_config(Credentials::from_env()?, config)?;
//!
//! let units = client.units().list(None).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use http::EBoekhoudenClient;
pub(crate) use http::{read_response, ClientInner};
