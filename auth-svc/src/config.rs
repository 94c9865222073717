//! Environment variable helpers
//!
//! Every setting has a current name and a deprecated one. The current name
//! wins; reading the deprecated one logs a warning.

/// Read `name`, falling back to the deprecated `legacy` name.
///
/// Returns `None` when neither variable is set.
pub fn env_with_fallback(name: &str, legacy: &str) -> Option<String> {
    std::env::var(name).ok().or_else(|| {
        let value = std::env::var(legacy).ok()?;
        tracing::warn!(
            "Environment variable '{}' is deprecated, use '{}' instead",
            legacy,
            name
        );
        Some(value)
    })
}

/// Like [`env_with_fallback`], parsed into `T`.
///
/// Unset or unparsable values yield `default`; a value that fails to parse
/// is logged.
pub fn env_with_fallback_parse<T: std::str::FromStr>(name: &str, legacy: &str, default: T) -> T {
    match env_with_fallback(name, legacy) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparsable value '{}' for '{}'", raw, name);
            default
        }),
        None => default,
    }
}
