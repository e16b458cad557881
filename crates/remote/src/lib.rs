//! Remote university directory
//!
//! Talks to a hipolabs-style `/search` endpoint and presents it through the
//! same paginated contract as the local `SQLite` store.

mod client;
mod error;

pub use client::{DEFAULT_TIMEOUT_SECS, RemoteDirectory, truncate};
pub use error::RemoteError;
