//! Data models for the e-Boekhouden API.
//!
//! Resource schemas differ per endpoint, so records are kept as open JSON
//! maps rather than fixed structs:
//!
//! - [`record`] - `Record` and the `ListResponse` wrapper
//! - [`query`] - `ListQuery` for limit, offset and filter parameters
//! - [`enums`] - Enumeration types used in requests

pub mod enums;
pub mod query;
pub mod record;

pub use enums::*;
pub use query::*;
pub use record::*;
