use crate::domain::catalog::model::Product;
use crate::domain::labels::model::DetectedCategory;
use crate::domain::media::model::CapturedFrame;

use super::errors::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Idle,
    LoadingResources,
    LiveViewfinder,
    Capturing,
    ShowingResults,
    Failed,
}

impl SessionState {
    /// States in which the session may hold a camera stream.
    pub fn holds_stream(self) -> bool {
        matches!(
            self,
            SessionState::LoadingResources | SessionState::LiveViewfinder | SessionState::Capturing
        )
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionState::Idle => write!(f, "idle"),
            SessionState::LoadingResources => write!(f, "loading_resources"),
            SessionState::LiveViewfinder => write!(f, "live_viewfinder"),
            SessionState::Capturing => write!(f, "capturing"),
            SessionState::ShowingResults => write!(f, "showing_results"),
            SessionState::Failed => write!(f, "failed"),
        }
    }
}

/// Result list for the active search term.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchResults {
    #[default]
    NotRequested,
    Loading {
        term: String,
    },
    Ready {
        term: String,
        products: Vec<Product>,
        degraded: bool,
    },
}

impl SearchResults {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchResults::Loading { .. })
    }

    pub fn products(&self) -> &[Product] {
        match self {
            SearchResults::Ready { products, .. } => products,
            _ => &[],
        }
    }
}

/// Owned copy of everything the presentation layer may render.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub frame: Option<CapturedFrame>,
    pub categories: Vec<DetectedCategory>,
    pub active_term: Option<String>,
    pub results: SearchResults,
    pub error: Option<SessionError>,
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            state: SessionState::Idle,
            frame: None,
            categories: Vec::new(),
            active_term: None,
            results: SearchResults::NotRequested,
            error: None,
        }
    }
}
