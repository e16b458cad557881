//! Test utilities and module declarations for storage tests.

use crate::{DatasetSource, Storage};
use tempfile::TempDir;
use unidir_core::SourceRecord;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage(source: DatasetSource) -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::open(&db_path, source).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_memory_storage(records: Vec<SourceRecord>) -> Storage {
    Storage::in_memory(DatasetSource::Records(records)).unwrap()
}

/// `count` records for `country`, named so that their ascending order is their index order.
pub fn records_for(country: &str, count: usize) -> Vec<SourceRecord> {
    (0..count)
        .map(|i| {
            SourceRecord::new(format!("{country} University {i:03}"), country)
                .with_web_page(format!("http://u{i}.{}.example/", country.to_lowercase()))
                .with_domain(format!("u{i}.{}.example", country.to_lowercase()))
        })
        .collect()
}

pub fn sample_records() -> Vec<SourceRecord> {
    vec![
        SourceRecord::new("Universidad de Chile", "Chile")
            .with_web_page("http://www.uchile.cl/")
            .with_web_page("http://uchile.cl/")
            .with_domain("uchile.cl")
            .with_state_province("Santiago"),
        SourceRecord::new("Pontificia Universidad Catolica de Chile", "Chile")
            .with_web_page("http://www.puc.cl/")
            .with_domain("puc.cl"),
        SourceRecord::new("University of Oslo", "Norway").with_domain("uio.no"),
        SourceRecord::new("Aalborg University", "Denmark")
            .with_web_page("http://www.aau.dk/")
            .with_domain("aau.dk"),
        SourceRecord::new("American University", "United States")
            .with_web_page("http://www.american.edu/")
            .with_domain("american.edu")
            .with_state_province("District of Columbia"),
        SourceRecord::new("American University", "Bulgaria")
            .with_web_page("http://www.aubg.bg/")
            .with_domain("aubg.bg"),
    ]
}
