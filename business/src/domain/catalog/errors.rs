/// Catalog search errors.
/// Code-style identifiers keep the messages i18n friendly.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.network")]
    Network,
    #[error("catalog.status_{0}")]
    Status(u16),
    #[error("catalog.invalid_response")]
    InvalidResponse,
}

impl CatalogError {
    pub fn network() -> Self {
        CatalogError::Network
    }
    pub fn status(code: u16) -> Self {
        CatalogError::Status(code)
    }
    pub fn invalid_response() -> Self {
        CatalogError::InvalidResponse
    }
}
