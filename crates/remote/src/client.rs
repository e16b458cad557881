use std::collections::BTreeSet;
use std::time::Duration;

use async_trait::async_trait;
use unidir_core::{CountryFilter, PageRequest, SourceRecord, University, UniversityDirectory};

use crate::error::RemoteError;

/// Per-request timeout of the underlying HTTP client.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for a hipolabs-style search API.
///
/// The API returns the whole filtered set in one response, so pagination
/// happens here: results are sorted by name and sliced to the requested page.
#[derive(Debug, Clone)]
pub struct RemoteDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteDirectory {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteError> {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| RemoteError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Raw `/search` call. The `country` parameter is omitted for an unfiltered search.
    ///
    /// # Errors
    /// Returns an error if the request fails, the API answers with a non-success
    /// status, or the body is not a JSON array of records.
    pub async fn search(&self, filter: &CountryFilter) -> Result<Vec<SourceRecord>, RemoteError> {
        let mut request = self.client.get(format!("{}/search", self.base_url));
        if let Some(country) = filter.as_deref() {
            request = request.query(&[("country", country)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            tracing::warn!(status = status.as_u16(), "Remote search failed");
            return Err(RemoteError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| RemoteError::JsonParse {
            context: format!("search response (body: {})", truncate(&body, 200)),
            source,
        })
    }

    /// One page of universities, mapped exactly like rows of the local store
    /// (`id` is `None`, `webPages` holds only the first web page).
    ///
    /// # Errors
    /// Same as [`RemoteDirectory::search`].
    pub async fn fetch_universities(
        &self,
        filter: &CountryFilter,
        page: PageRequest,
    ) -> Result<Vec<University>, RemoteError> {
        let mut records = self.search(filter).await?;
        // The upstream match is looser than ours; keep only exact country hits.
        records.retain(|r| filter.matches(&r.country));
        records.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(page.slice(&records).iter().map(|r| University::from_source(None, r)).collect())
    }

    /// Distinct countries over the unfiltered search, ascending.
    ///
    /// # Errors
    /// Same as [`RemoteDirectory::search`].
    pub async fn fetch_countries(&self) -> Result<Vec<String>, RemoteError> {
        let records = self.search(&CountryFilter::any()).await?;
        let countries: BTreeSet<String> = records.into_iter().map(|r| r.country).collect();
        Ok(countries.into_iter().collect())
    }
}

#[async_trait]
impl UniversityDirectory for RemoteDirectory {
    async fn list_universities(
        &self,
        filter: &CountryFilter,
        page: PageRequest,
    ) -> unidir_core::Result<Vec<University>> {
        Ok(self.fetch_universities(filter, page).await?)
    }

    async fn list_countries(&self) -> unidir_core::Result<Vec<String>> {
        Ok(self.fetch_countries().await?)
    }
}

/// Truncates a string to the given maximum length at a char boundary.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
