use serde::Serialize;

use business::domain::catalog::model::Product;
use business::domain::session::model::{SearchResults, SessionSnapshot, SessionState};

/// Which screen the camera search UI should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Closed,
    Starting,
    Viewfinder,
    Analyzing,
    Results,
    Error,
}

impl From<SessionState> for Screen {
    fn from(state: SessionState) -> Self {
        match state {
            SessionState::Idle => Screen::Closed,
            SessionState::LoadingResources => Screen::Starting,
            SessionState::LiveViewfinder => Screen::Viewfinder,
            SessionState::Capturing => Screen::Analyzing,
            SessionState::ShowingResults => Screen::Results,
            SessionState::Failed => Screen::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryChip {
    pub label: String,
    pub term: String,
    pub confidence_percent: u8,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: String,
    pub old_price: Option<String>,
    pub discount: Option<String>,
    pub image: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: format_price(product.price),
            old_price: product.old_price.map(format_price),
            discount: product
                .discount
                .filter(|d| *d > 0.0)
                .map(|d| format!("-{:.0}%", d)),
            image: product.thumbnail().map(str::to_string),
        }
    }
}

/// The result area below the detected categories.
///
/// `Empty` is a finished search with no match, never a pending one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "products", rename_all = "snake_case")]
pub enum ResultsView {
    Hidden,
    Loading,
    Empty,
    Products(Vec<ProductCard>),
}

impl From<&SearchResults> for ResultsView {
    fn from(results: &SearchResults) -> Self {
        match results {
            SearchResults::NotRequested => ResultsView::Hidden,
            SearchResults::Loading { .. } => ResultsView::Loading,
            SearchResults::Ready { products, .. } if products.is_empty() => ResultsView::Empty,
            SearchResults::Ready { products, .. } => {
                ResultsView::Products(products.iter().map(ProductCard::from).collect())
            }
        }
    }
}

/// Render-ready projection of a session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub screen: Screen,
    pub frame_data_url: Option<String>,
    pub message: Option<String>,
    pub can_retry: bool,
    pub can_capture: bool,
    pub categories: Vec<CategoryChip>,
    pub active_term: Option<String>,
    pub results: ResultsView,
}

impl SessionView {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        let active_term = snapshot.active_term.clone();
        let categories = snapshot
            .categories
            .iter()
            .map(|category| CategoryChip {
                label: category.display_label.clone(),
                term: category.search_term.clone(),
                confidence_percent: category.confidence_percent,
                active: active_term.as_deref() == Some(category.search_term.as_str()),
            })
            .collect();

        Self {
            screen: snapshot.state.into(),
            frame_data_url: snapshot.frame.as_ref().map(|frame| frame.to_data_url()),
            message: snapshot.error.as_ref().map(|error| error.message().to_string()),
            can_retry: matches!(
                snapshot.state,
                SessionState::ShowingResults | SessionState::Failed
            ),
            can_capture: snapshot.state == SessionState::LiveViewfinder,
            categories,
            active_term,
            results: ResultsView::from(&snapshot.results),
        }
    }
}

fn format_price(amount: f64) -> String {
    format!("{:.2} €", amount)
}
