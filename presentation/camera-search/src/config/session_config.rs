use business::application::session::camera_search::{DEFAULT_SEARCH_LIMIT, SessionSettings};
use business::domain::classifier::model::DEFAULT_TOP_K;

use super::env::{Lookup, parse_or, process_env};

/// Per-session tuning knobs.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub search_limit: usize,
    pub top_k: usize,
}

impl SessionConfig {
    /// Load session configuration from environment variables
    ///
    /// Environment variables:
    /// - SEARCH_RESULT_LIMIT: Products requested per search (default: 12)
    /// - CLASSIFIER_TOP_K: Candidates kept per capture (default: 5)
    pub fn from_env() -> Self {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            search_limit: parse_or(lookup, "SEARCH_RESULT_LIMIT", DEFAULT_SEARCH_LIMIT, |n| *n > 0),
            top_k: parse_or(lookup, "CLASSIFIER_TOP_K", DEFAULT_TOP_K, |n| *n > 0),
        }
    }

    pub fn settings(&self) -> SessionSettings {
        SessionSettings {
            top_k: self.top_k,
            search_limit: self.search_limit,
        }
    }
}
