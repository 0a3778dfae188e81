use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

/// Reads one configuration variable by name.
pub type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Reads `key`, falling back to `default` when it is unset or blank.
pub fn string_or(lookup: Lookup<'_>, key: &str, default: &str) -> String {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parses `key`, falling back to `default` when it is unset, blank, does not
/// parse or is rejected by `accept`. Rejected values are logged.
pub fn parse_or<T>(lookup: Lookup<'_>, key: &str, default: T, accept: impl Fn(&T) -> bool) -> T
where
    T: FromStr + Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return default;
    }
    match raw.parse::<T>() {
        Ok(value) if accept(&value) => value,
        _ => {
            warn!("Invalid value '{}' for {}, using default {}", raw, key, default);
            default
        }
    }
}

#[cfg(test)]
pub fn fixed(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let pairs: Vec<(String, String)> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}
