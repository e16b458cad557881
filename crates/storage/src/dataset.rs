//! Where the bundled dataset comes from.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use unidir_core::SourceRecord;

use crate::error::StorageError;

/// Source of the static university dataset: a JSON array of `SourceRecord`.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// Bundled JSON file on disk.
    File(PathBuf),
    /// JSON text already in memory.
    Json(String),
    /// Records parsed elsewhere.
    Records(Vec<SourceRecord>),
}

impl DatasetSource {
    #[must_use]
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    /// Read and parse the dataset. Nothing is written to the store here, so a
    /// failure leaves the store exactly as it was.
    ///
    /// # Errors
    /// Returns `StorageError::Population` if the file cannot be opened or the
    /// JSON does not match the record shape.
    pub fn load(&self) -> Result<Vec<SourceRecord>, StorageError> {
        match self {
            Self::File(path) => {
                let file = File::open(path).map_err(|e| {
                    StorageError::population(format!("open {}", path.display()), e)
                })?;
                serde_json::from_reader(BufReader::new(file))
                    .map_err(|e| StorageError::population(format!("parse {}", path.display()), e))
            },
            Self::Json(text) => serde_json::from_str(text)
                .map_err(|e| StorageError::population("parse inline dataset", e)),
            Self::Records(records) => Ok(records.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn loads_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Uni A", "country": "X", "web_pages": ["http://a.example/"]}},
                {{"name": "Uni B", "country": "Y"}}]"#
        )
        .unwrap();

        let records = DatasetSource::file(file.path()).load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].first_web_page(), Some("http://a.example/"));
    }

    #[test]
    fn missing_file_is_a_population_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DatasetSource::file(dir.path().join("absent.json")).load().unwrap_err();
        assert!(matches!(err, StorageError::Population { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn malformed_json_is_a_population_error() {
        let err = DatasetSource::Json("[{\"name\": \"Uni A\"".to_owned()).load().unwrap_err();
        assert!(matches!(err, StorageError::Population { .. }));
    }

    #[test]
    fn non_array_json_is_a_population_error() {
        let err = DatasetSource::Json(r#"{"name": "Uni A", "country": "X"}"#.to_owned())
            .load()
            .unwrap_err();
        assert!(matches!(err, StorageError::Population { .. }));
    }
}
