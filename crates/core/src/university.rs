use serde::{Deserialize, Serialize};

/// One entry of the bundled dataset, in the hipolabs `/search` shape.
///
/// `web_pages` and `domains` may be missing or `null`; unknown fields such as
/// `alpha_two_code` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub name: String,
    pub country: String,
    #[serde(rename = "state-province", default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub web_pages: Option<Vec<String>>,
    #[serde(default)]
    pub domains: Option<Vec<String>>,
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl SourceRecord {
    #[must_use]
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            state_province: None,
            web_pages: None,
            domains: None,
        }
    }

    #[must_use]
    pub fn with_state_province(mut self, state_province: impl Into<String>) -> Self {
        self.state_province = Some(state_province.into());
        self
    }

    #[must_use]
    pub fn with_web_page(mut self, web_page: impl Into<String>) -> Self {
        self.web_pages.get_or_insert_with(Vec::new).push(web_page.into());
        self
    }

    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.get_or_insert_with(Vec::new).push(domain.into());
        self
    }

    /// First web page, treating an empty string as absent.
    #[must_use]
    pub fn first_web_page(&self) -> Option<&str> {
        non_empty(self.web_pages.as_ref().and_then(|pages| pages.first()))
    }

    /// First domain, treating an empty string as absent.
    #[must_use]
    pub fn first_domain(&self) -> Option<&str> {
        non_empty(self.domains.as_ref().and_then(|domains| domains.first()))
    }

    /// State or province, treating an empty string as absent.
    #[must_use]
    pub fn state_province(&self) -> Option<&str> {
        non_empty(self.state_province.as_ref())
    }
}

impl From<&University> for SourceRecord {
    fn from(uni: &University) -> Self {
        Self {
            name: uni.name.clone(),
            country: uni.country.clone(),
            state_province: uni.state_province.clone(),
            web_pages: Some(uni.web_page().map(ToOwned::to_owned).into_iter().collect()),
            domains: Some(uni.domain.clone().into_iter().collect()),
        }
    }
}

/// A university as returned by any `UniversityDirectory`.
///
/// `web_pages` always holds exactly one element, `None` when the record had no
/// web page. Only one value is ever stored; the list shape is kept because
/// consumers of the remote API expect `webPages` to be an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
    /// Store-assigned id. `None` for records that came from the remote API.
    pub id: Option<i64>,
    pub name: String,
    pub country: String,
    pub state_province: Option<String>,
    pub web_pages: Vec<Option<String>>,
    pub domain: Option<String>,
}

impl University {
    #[must_use]
    pub fn new(
        id: Option<i64>,
        name: String,
        country: String,
        state_province: Option<String>,
        web_page: Option<String>,
        domain: Option<String>,
    ) -> Self {
        Self { id, name, country, state_province, web_pages: vec![web_page], domain }
    }

    /// Map a raw dataset record the same way the store does on insert.
    #[must_use]
    pub fn from_source(id: Option<i64>, record: &SourceRecord) -> Self {
        Self::new(
            id,
            record.name.clone(),
            record.country.clone(),
            record.state_province().map(ToOwned::to_owned),
            record.first_web_page().map(ToOwned::to_owned),
            record.first_domain().map(ToOwned::to_owned),
        )
    }

    #[must_use]
    pub fn web_page(&self) -> Option<&str> {
        self.web_pages.first().and_then(Option::as_deref)
    }
}
