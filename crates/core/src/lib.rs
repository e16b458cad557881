//! Core types and traits for unidir
//!
//! Domain types shared by the SQLite store, the remote client and the HTTP layer.

mod constants;
mod directory_trait;
mod env_config;
mod error;
mod query;
mod university;

pub use constants::*;
pub use directory_trait::UniversityDirectory;
pub use env_config::{env_non_empty, env_parse_with_default};
pub use error::*;
pub use query::{CountryFilter, DirectoryStats, PageRequest};
pub use university::{SourceRecord, University};
