#![expect(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use serde_json::Value;
use unidir_core::{CountryFilter, PageRequest, SourceRecord, University, UniversityDirectory};
use unidir_http::{AppState, create_router};
use unidir_remote::RemoteDirectory;
use unidir_storage::{DatasetSource, Storage};

fn dataset() -> Vec<SourceRecord> {
    let mut records: Vec<SourceRecord> = (0..45)
        .map(|i| {
            SourceRecord::new(format!("Kenya College {i:02}"), "Kenya")
                .with_web_page(format!("http://k{i}.ac.ke/"))
                .with_domain(format!("k{i}.ac.ke"))
        })
        .collect();
    records.push(SourceRecord::new("University of Iceland", "Iceland").with_domain("hi.is"));
    records.push(
        SourceRecord::new("Reykjavik University", "Iceland")
            .with_web_page("http://www.ru.is/")
            .with_state_province("Capital Region"),
    );
    records
}

async fn spawn_server(directory: Arc<dyn UniversityDirectory>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = create_router(Arc::new(AppState::new(directory)));
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn local_server() -> String {
    let storage = Storage::in_memory(DatasetSource::Records(dataset())).unwrap();
    spawn_server(Arc::new(storage)).await
}

async fn get_json(url: &str) -> (u16, Value) {
    let response = reqwest::get(url).await.unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn test_health() {
    let base = local_server().await;

    let (status, body) = get_json(&format!("{base}/health")).await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_countries_endpoint() {
    let base = local_server().await;

    let (status, body) = get_json(&format!("{base}/countries")).await;

    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!(["Iceland", "Kenya"]));
}

#[tokio::test]
async fn test_universities_endpoint_paginates() {
    let base = local_server().await;

    let (_, page1) = get_json(&format!("{base}/universities?country=Kenya&page=1&limit=20")).await;
    let (_, page3) = get_json(&format!("{base}/universities?country=Kenya&page=3&limit=20")).await;
    let (_, page4) = get_json(&format!("{base}/universities?country=Kenya&page=4&limit=20")).await;

    assert_eq!(page1.as_array().unwrap().len(), 20);
    assert_eq!(page3.as_array().unwrap().len(), 5);
    assert_eq!(page4, serde_json::json!([]));
    assert_eq!(page1[0]["webPages"], serde_json::json!(["http://k0.ac.ke/"]));
}

#[tokio::test]
async fn test_universities_endpoint_defaults() {
    let base = local_server().await;

    let (status, body) = get_json(&format!("{base}/universities?country=Iceland")).await;

    assert_eq!(status, 200);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["name"], "Reykjavik University");
    assert_eq!(items[0]["stateProvince"], "Capital Region");
    assert_eq!(items[1]["webPages"], serde_json::json!([null]));
}

#[tokio::test]
async fn test_invalid_page_is_bad_request() {
    let base = local_server().await;

    let response = reqwest::get(format!("{base}/universities?page=abc")).await.unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_search_endpoint_returns_full_source_shaped_list() {
    let base = local_server().await;

    let (status, body) = get_json(&format!("{base}/search?country=Kenya")).await;

    assert_eq!(status, 200);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 45);
    assert_eq!(items[0]["web_pages"], serde_json::json!(["http://k0.ac.ke/"]));
    assert_eq!(items[0]["domains"], serde_json::json!(["k0.ac.ke"]));
    assert!(items[0].get("webPages").is_none());
}

#[tokio::test]
async fn test_remote_client_against_local_mirror_matches_store() {
    let storage = Storage::in_memory(DatasetSource::Records(dataset())).unwrap();
    let base = spawn_server(Arc::new(storage.clone())).await;
    let remote = RemoteDirectory::new(base).unwrap();
    let filter = CountryFilter::country("Kenya");

    for page in 1..=4 {
        let request = PageRequest::new(page, 20);
        let from_remote =
            UniversityDirectory::list_universities(&remote, &filter, request).await.unwrap();
        let from_local = storage.list_universities(&filter, request).unwrap();

        // Remote records carry no store id; everything else must agree.
        assert!(from_remote.iter().all(|u| u.id.is_none()));
        let strip = |u: &University| (u.name.clone(), u.web_pages.clone(), u.domain.clone());
        assert_eq!(
            from_remote.iter().map(strip).collect::<Vec<_>>(),
            from_local.iter().map(strip).collect::<Vec<_>>()
        );
    }

    assert_eq!(
        UniversityDirectory::list_countries(&remote).await.unwrap(),
        storage.list_countries().unwrap()
    );
}

#[tokio::test]
async fn test_missing_dataset_is_service_unavailable() {
    let missing = std::env::temp_dir()
        .join(format!("unidir-missing-{}", std::process::id()))
        .join("universities.json");
    let storage = Storage::in_memory(DatasetSource::file(missing)).unwrap();
    let base = spawn_server(Arc::new(storage)).await;

    let (status, body) = get_json(&format!("{base}/countries")).await;

    assert_eq!(status, 503);
    assert_eq!(body["error"], "directory unavailable (population)");
}
