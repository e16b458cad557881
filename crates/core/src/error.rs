use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that cross the `UniversityDirectory` boundary.
///
/// Backends keep their own typed errors and convert into this one, so callers
/// can react to the failure class without knowing which store answered.
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Store could not be opened or the DDL was rejected.
    #[error("schema error: {0}")]
    Schema(String),

    /// Bundled dataset missing or unparsable.
    #[error("population error: {0}")]
    Population(String),

    /// A row failed mid-seed; the seed was rolled back.
    #[error("insert error: {0}")]
    Insert(String),

    /// A read failed at the store level (local or remote).
    #[error("query error: {0}")]
    Query(String),
}

impl DirectoryError {
    /// Short, stable name of the failure class for logs and API bodies.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match *self {
            Self::Schema(_) => "schema",
            Self::Population(_) => "population",
            Self::Insert(_) => "insert",
            Self::Query(_) => "query",
        }
    }
}

pub type Result<T> = StdResult<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(DirectoryError::Schema("x".to_owned()).kind(), "schema");
        assert_eq!(DirectoryError::Population("x".to_owned()).kind(), "population");
        assert_eq!(DirectoryError::Insert("x".to_owned()).kind(), "insert");
        assert_eq!(DirectoryError::Query("x".to_owned()).kind(), "query");
    }

    #[test]
    fn display_includes_message() {
        let err = DirectoryError::Query("connection lost".to_owned());
        assert_eq!(err.to_string(), "query error: connection lost");
    }
}
