use tracing::{debug, info};

use crate::{error::CatalogError, model::Product};

/// Fetches the full product list from `endpoint`.
///
/// One plain `GET`, no query parameters. Non-success statuses are errors.
pub async fn fetch_products(endpoint: &str) -> Result<Vec<Product>, CatalogError> {
    debug!(endpoint, "fetching products");

    let body = reqwest::get(endpoint)
        .await?
        .error_for_status()?
        .text()
        .await?;

    let products = parse_products(&body)?;
    info!(count = products.len(), "loaded products");
    Ok(products)
}

/// Decodes a products response body.
pub fn parse_products(body: &str) -> Result<Vec<Product>, CatalogError> {
    Ok(serde_json::from_str(body)?)
}
