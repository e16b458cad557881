//! Query parameters shared by every directory backend.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PAGE_LIMIT;

/// Exact-match country constraint. An empty or blank country means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryFilter(Option<String>);

impl CountryFilter {
    /// Filter that matches every record.
    #[must_use]
    pub const fn any() -> Self {
        Self(None)
    }

    #[must_use]
    pub fn country(country: impl Into<String>) -> Self {
        let country = country.into();
        if country.trim().is_empty() { Self(None) } else { Self(Some(country)) }
    }

    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    #[must_use]
    pub const fn is_any(&self) -> bool {
        self.0.is_none()
    }

    #[must_use]
    pub fn matches(&self, country: &str) -> bool {
        self.0.as_deref().is_none_or(|wanted| wanted == country)
    }
}

impl From<Option<String>> for CountryFilter {
    fn from(value: Option<String>) -> Self {
        value.map_or_else(Self::any, Self::country)
    }
}

impl From<&str> for CountryFilter {
    fn from(value: &str) -> Self {
        Self::country(value)
    }
}

/// One-indexed page window.
///
/// `page` and `limit` below 1 are read as 1. There is no upper bound on
/// `limit` here; surfaces exposed to untrusted callers cap it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page: page.max(1), limit: limit.max(1) }
    }

    #[must_use]
    pub fn first(limit: u32) -> Self {
        Self::new(1, limit)
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Rows to skip: `(page - 1) * limit`.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }

    #[must_use]
    pub fn next(&self) -> Self {
        Self { page: self.page.saturating_add(1), limit: self.limit }
    }

    /// Slice of `items` covered by this page; empty past the end.
    #[must_use]
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset()).unwrap_or(usize::MAX).min(items.len());
        let end = start.saturating_add(self.limit as usize).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_LIMIT)
    }
}

/// Aggregate counts over the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub university_count: u64,
    pub country_count: u64,
}
