use tracing::warn;

use crate::pagination::DEFAULT_PAGE_SIZE;

/// Where products are fetched from when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/products";

/// The page product cards link to.
pub const DEFAULT_DETAIL_PAGE: &str = "detail.html";

/// Settings for the catalog.
///
/// A wasm build has no process environment to read at runtime, so overrides are baked in
/// at compile time from `CATALOG_API_URL`, `CATALOG_PAGE_SIZE` and `CATALOG_DETAIL_PAGE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// The URL that answers `GET` with a JSON array of products.
    pub endpoint: String,
    pub page_size: usize,
    pub detail_page: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
        }
    }
}

impl CatalogConfig {
    /// The defaults, overridden by whatever was set in the build environment.
    pub fn from_env() -> Self {
        Self::default().with_overrides(
            option_env!("CATALOG_API_URL"),
            option_env!("CATALOG_PAGE_SIZE"),
            option_env!("CATALOG_DETAIL_PAGE"),
        )
    }

    pub(crate) fn with_overrides(
        mut self,
        endpoint: Option<&str>,
        page_size: Option<&str>,
        detail_page: Option<&str>,
    ) -> Self {
        if let Some(endpoint) = endpoint.map(str::trim).filter(|s| !s.is_empty()) {
            self.endpoint = endpoint.to_string();
        }

        if let Some(raw) = page_size.map(str::trim).filter(|s| !s.is_empty()) {
            match raw.parse::<usize>() {
                Ok(size) if size > 0 => self.page_size = size,
                _ => warn!(
                    value = raw,
                    "CATALOG_PAGE_SIZE is not a positive integer, using {}", self.page_size
                ),
            }
        }

        if let Some(detail_page) = detail_page.map(str::trim).filter(|s| !s.is_empty()) {
            self.detail_page = detail_page.to_string();
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_the_local_server() {
        let config = CatalogConfig::default();
        assert_eq!(config.endpoint, "http://localhost:3000/products");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.detail_page, "detail.html");
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = CatalogConfig::default().with_overrides(
            Some("https://dummyjson.com/products"),
            Some(" 24 "),
            Some("/product"),
        );
        assert_eq!(
            config,
            CatalogConfig {
                endpoint: "https://dummyjson.com/products".to_string(),
                page_size: 24,
                detail_page: "/product".to_string(),
            }
        );
    }

    #[test]
    fn blank_and_invalid_overrides_are_ignored() {
        let config =
            CatalogConfig::default().with_overrides(Some("  "), Some("zero"), Some(""));
        assert_eq!(config, CatalogConfig::default());

        let config = CatalogConfig::default().with_overrides(None, Some("0"), None);
        assert_eq!(config.page_size, 10);
    }
}
