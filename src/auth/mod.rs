//! Authentication and session management for the e-Boekhouden API.
//!
//! The service authenticates with a short-lived session token obtained by
//! exchanging a long-lived access token and a source identifier. The client
//! creates the session on first use and attaches it as a bearer token to
//! every later request.
//!
//! ```no_run
//! use eboekhouden::{Credentials, EBoekhoudenClient};
//!
//! # async fn example() -> eboekhouden::Result<()> {
//! let client = EBoekhoudenClient::new(Credentials::new("access-token", "MyApp")?)?;
//!
//! // Optional: the first request would create the session anyway
//! let info = client.create_session().await?;
//! println!("Session valid for {} seconds", info.expires_in());
//!
//! client.end_session().await?;
//! # Ok(())
//! # }
//! ```

mod credentials;
mod session;

pub use credentials::{Credentials, ACCESS_TOKEN_ENV, MAX_SOURCE_LEN, SOURCE_ENV};
pub use session::{Session, SessionInfo};
