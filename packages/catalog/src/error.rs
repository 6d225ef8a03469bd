use thiserror::Error;

/// Everything that can go wrong while loading the catalog.
///
/// Only the product fetch can fail. Rendering, filtering, sorting and paging never error.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request could not be sent, or the server answered with a non-success status.
    #[error("failed to fetch products: {0}")]
    Request(#[from] reqwest::Error),

    /// The body was not a JSON array of products.
    #[error("failed to decode products: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Returned when a sort key doesn't name any known criterion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort criterion `{0}`")]
pub struct UnknownCriterion(pub String);
