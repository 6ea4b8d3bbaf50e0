//! # eboekhouden-rs
//!
//! An async Rust client for the e-Boekhouden accounting REST API.
//!
//! The client exchanges an API access token for a session token on first
//! use, attaches it as a bearer token to every request, and turns non-2xx
//! responses into [`Error::Api`] carrying the service's message, error code
//! and full response body.
//!
//! ## Features
//!
//! - **Sessions**: lazy session creation, explicit logout
//! - **Resources**: administrations, cost centers, email templates, invoices,
//!   invoice templates, ledgers, mutations, products, relations, units
//! - **Filters**: helpers for the service's `[operator]value` query syntax
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use eboekhouden::{filter, Credentials, EBoekhoudenClient, ListQuery};
//!
//! #[tokio::main]
//! async fn main() -> eboekhouden::Result<()> {
//!     let client = EBoekhoudenClient::new(Credentials::new("access-token", "MyApp")?)?;
//!
//!     // The first call creates the session
//!     let query = ListQuery::new()
//!         .limit(10)
//!         .param("name", filter::like("%Holding%"));
//!     let relations = client.relations().list(Some(query)).await?;
//!     println!("Found {} relations", relations.len());
//!
//!     // Inspect API errors
//!     match client.invoices().get(999_999).await {
//!         Ok(invoice) => println!("{:?}", invoice.get("invoiceNumber")),
//!         Err(err) => println!("{} (code {:?})", err, err.code()),
//!     }
//!
//!     client.end_session().await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod filter;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, Session, SessionInfo};
pub use client::{ClientConfig, EBoekhoudenClient};
pub use error::{Error, Result};
pub use models::{CredDeb, ListQuery, ListResponse, Record};

/// Prelude module for convenient imports.
///
/// ```rust
/// use eboekhouden::prelude::*;
/// ```
pub mod prelude {
    pub use crate::auth::{Credentials, Session, SessionInfo};
    pub use crate::client::{ClientConfig, EBoekhoudenClient};
    pub use crate::error::{Error, Result};
    pub use crate::filter;
    pub use crate::models::{CredDeb, ListQuery, ListResponse, Record};
}
