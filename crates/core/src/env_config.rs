//! `UNIDIR_*` environment lookups shared by the store and the CLI.
//!
//! A variable that is set but blank counts as unset, so `UNIDIR_DB_PATH=` in a
//! shell profile falls back to the default instead of opening `""`.

/// Value of `var`, or `None` when it is unset, blank or not valid UTF-8.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Parsed value of `var`, or `default` when it is unset or blank.
///
/// An unparsable value is logged at warn level with the fallback it was
/// replaced by, e.g. `UNIDIR_DB_POOL_SIZE=eight` keeps the default pool size.
pub fn env_parse_with_default<T>(var: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    let Some(raw) = env_non_empty(var) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(var, value = %raw, fallback = %default, "ignoring unparsable env var");
        default
    })
}
