use crate::model::Product;

/// A normalized category search: trimmed and lower-cased.
///
/// An empty query matches every product.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryQuery(String);

impl CategoryQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the product's category contains the query, ignoring case.
    pub fn matches(&self, product: &Product) -> bool {
        self.is_empty() || product.category.to_lowercase().contains(&self.0)
    }
}

/// The products whose category matches `query`, in their original order.
pub fn filter_by_category(products: &[Product], query: &CategoryQuery) -> Vec<Product> {
    products
        .iter()
        .filter(|product| query.matches(product))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::product;
    use pretty_assertions::assert_eq;

    fn categorized(categories: &[&str]) -> Vec<Product> {
        categories
            .iter()
            .enumerate()
            .map(|(idx, category)| {
                let mut item = product(idx as u64 + 1, 1.0);
                item.category = category.to_string();
                item
            })
            .collect()
    }

    #[test]
    fn substring_matches_category() {
        let items = categorized(&["Beauty", "Fragrances", "Furniture"]);
        let found = filter_by_category(&items, &CategoryQuery::new("fra"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Fragrances");
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let query = CategoryQuery::new("  FURN ");
        assert_eq!(query.as_str(), "furn");

        let items = categorized(&["Beauty", "Fragrances", "Furniture"]);
        let found = filter_by_category(&items, &query);
        assert_eq!(found[0].category, "Furniture");
    }

    #[test]
    fn blank_query_matches_everything() {
        let items = categorized(&["Beauty", "Fragrances", "Furniture"]);
        assert!(CategoryQuery::new("   ").is_empty());
        assert_eq!(filter_by_category(&items, &CategoryQuery::new("   ")), items);
    }

    #[test]
    fn no_match_yields_nothing() {
        let items = categorized(&["Beauty", "Fragrances"]);
        assert!(filter_by_category(&items, &CategoryQuery::new("laptops")).is_empty());
    }
}
