//! HTTP client for the user-directory REST API.
//!
//! Exposes the concrete [`Client`] plus the [`UserStore`] seam the table
//! controller consumes, so tests can swap in an in-memory double.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod store;

pub use client::Client;
pub use error::{ClientError, Result as ClientResult};
pub use store::UserStore;
