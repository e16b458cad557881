//! Migration v2: indexes for the filtered and unfiltered name-ordered scans

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_universities_country_name ON universities(country, name);
CREATE INDEX IF NOT EXISTS idx_universities_name ON universities(name);
";
