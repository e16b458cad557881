//! Request/query types (Deserialize)

use serde::Deserialize;
use unidir_core::{CountryFilter, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, PageRequest};

const fn default_page() -> u32 {
    1
}

const fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

/// `/search?country=X`, the hipolabs-compatible shape.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub country: Option<String>,
}

impl SearchQuery {
    pub fn filter(&self) -> CountryFilter {
        CountryFilter::from(self.country.clone())
    }
}

/// `/universities?country=X&page=N&limit=M`.
#[derive(Debug, Deserialize)]
pub struct UniversitiesQuery {
    pub country: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl UniversitiesQuery {
    pub fn filter(&self) -> CountryFilter {
        CountryFilter::from(self.country.clone())
    }

    /// Page window with `limit` capped at `MAX_PAGE_LIMIT` (DoS protection).
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.limit.min(MAX_PAGE_LIMIT))
    }
}
