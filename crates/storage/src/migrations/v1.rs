//! Migration v1: universities table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS universities (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) > 0),
    country TEXT NOT NULL CHECK (length(country) > 0),
    web_page TEXT,
    domain TEXT,
    state_province TEXT
);
";
