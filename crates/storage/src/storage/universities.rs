use rusqlite::params;
use unidir_core::{CountryFilter, PageRequest, University};

use super::{Storage, get_conn};
use crate::error::StorageError;

impl Storage {
    /// One page of universities, ascending by name (ties by id), optionally
    /// restricted to one country. Seeds the store first if needed.
    ///
    /// # Errors
    /// Returns `StorageError::Query` on store failure, or the seeding error if
    /// the lazy seed fails. An empty page is not an error.
    pub fn list_universities(
        &self,
        filter: &CountryFilter,
        page: PageRequest,
    ) -> Result<Vec<University>, StorageError> {
        self.ensure_seeded()?;
        let conn = get_conn(&self.pool)?;

        let limit = i64::from(page.limit());
        let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);

        let items = if let Some(country) = filter.as_deref() {
            let mut stmt = conn.prepare_cached(
                "SELECT id, name, country, state_province, web_page, domain
                 FROM universities WHERE country = ?1
                 ORDER BY name, id LIMIT ?2 OFFSET ?3",
            )?;
            stmt.query_map(params![country, limit, offset], Self::row_to_university)?
                .collect::<Result<Vec<_>, _>>()?
        } else {
            let mut stmt = conn.prepare_cached(
                "SELECT id, name, country, state_province, web_page, domain
                 FROM universities
                 ORDER BY name, id LIMIT ?1 OFFSET ?2",
            )?;
            stmt.query_map(params![limit, offset], Self::row_to_university)?
                .collect::<Result<Vec<_>, _>>()?
        };

        tracing::debug!(
            country = filter.as_deref().unwrap_or(""),
            page = page.page(),
            limit = page.limit(),
            returned = items.len(),
            "Listed universities"
        );
        Ok(items)
    }

    /// Distinct country names, ascending.
    ///
    /// # Errors
    /// Returns `StorageError::Query` on store failure, or the seeding error if
    /// the lazy seed fails.
    pub fn list_countries(&self) -> Result<Vec<String>, StorageError> {
        self.ensure_seeded()?;
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare_cached("SELECT DISTINCT country FROM universities ORDER BY country ASC")?;
        let countries = stmt.query_map([], |row| row.get(0))?.collect::<Result<Vec<_>, _>>()?;
        Ok(countries)
    }

    fn row_to_university(row: &rusqlite::Row<'_>) -> rusqlite::Result<University> {
        Ok(University::new(
            Some(row.get(0)?),
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
        ))
    }
}
