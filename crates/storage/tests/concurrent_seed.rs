#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use tempfile::tempdir;
use unidir_core::{CountryFilter, PageRequest, SourceRecord, UniversityDirectory};
use unidir_storage::{DatasetSource, SeedOutcome, Storage};

fn dataset(count: usize) -> Vec<SourceRecord> {
    (0..count)
        .map(|i| {
            let country = if i % 3 == 0 { "Peru" } else { "Ghana" };
            SourceRecord::new(format!("College {i:04}"), country)
        })
        .collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_initializers_seed_once() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let storage = Arc::new(Storage::open(&db_path, DatasetSource::Records(dataset(300))).unwrap());

    let mut handles = vec![];
    for _ in 0..10 {
        let storage = Arc::clone(&storage);
        handles.push(tokio::spawn(async move { storage.initialize_async().await }));
    }

    let mut seeded = 0;
    for handle in handles {
        if let SeedOutcome::Seeded { .. } = handle.await.unwrap().unwrap() {
            seeded += 1;
        }
    }
    assert_eq!(seeded, 1, "exactly one initializer should insert");

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let count: i64 =
        conn.query_row("SELECT COUNT(*) FROM universities", [], |row| row.get(0)).unwrap();
    assert_eq!(count, 300);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_queries_seed_once() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let storage = Storage::open(&db_path, DatasetSource::Records(dataset(90))).unwrap();

    let mut handles = vec![];
    for page in 1..=8 {
        let storage = storage.clone();
        handles.push(tokio::spawn(async move {
            UniversityDirectory::list_universities(
                &storage,
                &CountryFilter::country("Peru"),
                PageRequest::new(page, 5),
            )
            .await
        }));
    }

    let mut total = 0;
    for handle in handles {
        total += handle.await.unwrap().unwrap().len();
    }
    assert_eq!(total, 30);
    assert_eq!(storage.count_universities().unwrap(), 90);
}

#[tokio::test]
async fn test_independent_in_memory_stores_do_not_share_state() {
    let a = Storage::in_memory(DatasetSource::Records(dataset(6))).unwrap();
    let b = Storage::in_memory(DatasetSource::Records(Vec::new())).unwrap();

    assert_eq!(UniversityDirectory::list_countries(&a).await.unwrap(), vec!["Ghana", "Peru"]);
    assert!(UniversityDirectory::list_countries(&b).await.unwrap().is_empty());
}
