//! Maps free-form classifier labels onto commerce search terms.
//!
//! Classifier labels are often compound ("backpack, knapsack") and far more
//! specific than the storefront taxonomy, so matching runs in two passes:
//! whole synonym tokens first, then the individual words of every token.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use super::model::{DetectedCategory, confidence_percent};
use super::table::LABEL_TABLE;
use crate::domain::classifier::model::ClassificationCandidate;

static LOOKUP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LABEL_TABLE.iter().copied().collect());

/// Lowercases a synonym token and joins its words with `_`.
fn normalize_token(token: &str) -> String {
    token
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

fn lookup(key: &str) -> Option<&'static str> {
    LOOKUP.get(key).copied()
}

/// Returns the search term for a raw classifier label, or `None` when no
/// token or word of the label is known.
pub fn normalize(raw_label: &str) -> Option<&'static str> {
    let tokens: Vec<String> = raw_label
        .split(',')
        .map(normalize_token)
        .filter(|t| !t.is_empty())
        .collect();

    tokens.iter().find_map(|t| lookup(t)).or_else(|| {
        tokens
            .iter()
            .flat_map(|t| t.split('_'))
            .filter(|w| !w.is_empty())
            .find_map(lookup)
    })
}

/// Builds the category list for a ranked candidate list.
///
/// Candidates that do not normalize are dropped. When several candidates map
/// to the same term only the first one is kept, so callers must pass the
/// candidates in descending confidence order.
pub fn detect_categories(candidates: &[ClassificationCandidate]) -> Vec<DetectedCategory> {
    let mut seen = HashSet::new();
    candidates
        .iter()
        .filter_map(|candidate| {
            let term = normalize(&candidate.raw_label)?;
            if !seen.insert(term) {
                return None;
            }
            Some(DetectedCategory {
                display_label: display_label(&candidate.raw_label, term),
                search_term: term.to_string(),
                confidence_percent: confidence_percent(candidate.confidence),
            })
        })
        .collect()
}

/// First synonym of the raw label, as the classifier spelled it.
fn display_label(raw_label: &str, term: &str) -> String {
    raw_label
        .split(',')
        .map(str::trim)
        .find(|t| !t.is_empty())
        .unwrap_or(term)
        .to_string()
}
