use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use unidir_core::{MAX_PAGE_LIMIT, PageRequest, SourceRecord, University};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{SearchQuery, UniversitiesQuery};

/// Full filtered list in the source-record shape, like the hipolabs API.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<SourceRecord>>, ApiError> {
    let filter = query.filter();
    let mut page = PageRequest::first(MAX_PAGE_LIMIT);
    let mut records = Vec::new();
    loop {
        let items = state.directory.list_universities(&filter, page).await?;
        let last = items.len() < page.limit() as usize;
        records.extend(items.iter().map(SourceRecord::from));
        if last {
            break;
        }
        page = page.next();
    }
    Ok(Json(records))
}

pub async fn list_universities(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UniversitiesQuery>,
) -> Result<Json<Vec<University>>, ApiError> {
    let items = state.directory.list_universities(&query.filter(), query.page_request()).await?;
    Ok(Json(items))
}

pub async fn list_countries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.directory.list_countries().await?))
}
