use tracing::debug;

use crate::{
    model::Product,
    pagination::Pager,
    search::{filter_by_category, CategoryQuery},
    sort::{sort_products, SortCriterion},
};

/// The one authoritative copy of everything the catalog shows.
///
/// The full product list is kept as fetched. What is on screen is derived from it: the
/// category query filters it, the sort criterion orders the survivors, and the pager
/// picks one page out of that. Every mutation goes through a method so the derived
/// view and the page bounds never fall out of step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogState {
    products: Vec<Product>,
    visible: Vec<Product>,
    query: CategoryQuery,
    criterion: Option<SortCriterion>,
    pager: Pager,
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        Self {
            pager: Pager::new(page_size),
            ..Default::default()
        }
    }

    /// Replaces the full product list, keeping the current query, sort and page.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.refresh();
    }

    /// Applies a new category search and returns to the first page.
    pub fn search(&mut self, raw: &str) {
        self.query = CategoryQuery::new(raw);
        self.pager.go_to(1, 0);
        self.refresh();
        debug!(query = self.query.as_str(), matches = self.visible.len(), "searched catalog");
    }

    /// Reorders the catalog. `None` restores the server's order. The page is kept.
    pub fn sort_by(&mut self, criterion: Option<SortCriterion>) {
        self.criterion = criterion;
        self.refresh();
        debug!(criterion = ?self.criterion, "sorted catalog");
    }

    /// Reorders by dropdown value. Unknown values restore the server's order.
    pub fn sort_by_key(&mut self, key: &str) {
        self.sort_by(key.parse().ok());
    }

    /// Jumps to `page`, clamped to the pages that exist.
    pub fn go_to_page(&mut self, page: usize) {
        self.pager.go_to(page, self.visible.len());
        debug!(page = self.pager.page(), "changed catalog page");
    }

    fn refresh(&mut self) {
        let filtered = filter_by_category(&self.products, &self.query);
        self.visible = match self.criterion {
            Some(criterion) => sort_products(&filtered, criterion),
            None => filtered,
        };
        self.pager.clamp(self.visible.len());
    }

    /// Every product, as fetched.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The filtered and sorted products, across all pages.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// The products on the current page.
    pub fn page_items(&self) -> &[Product] {
        self.pager.slice(&self.visible)
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.visible.len())
    }

    pub fn query(&self) -> &CategoryQuery {
        &self.query
    }

    pub fn criterion(&self) -> Option<SortCriterion> {
        self.criterion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{product, ProductId};
    use pretty_assertions::assert_eq;

    fn catalog(count: u64) -> CatalogState {
        let mut state = CatalogState::new(10);
        state.set_products(
            (1..=count)
                .map(|id| {
                    let mut item = product(id, id as f64);
                    let category = if id % 2 == 0 { "Fragrances" } else { "Furniture" };
                    item.category = category.to_string();
                    item
                })
                .collect(),
        );
        state
    }

    fn first_id(items: &[Product]) -> Option<&ProductId> {
        items.first().map(|item| &item.id)
    }

    #[test]
    fn starts_on_the_first_page() {
        let state = catalog(25);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_count(), 3);
        assert_eq!(state.page_items().len(), 10);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let mut state = catalog(25);
        state.go_to_page(3);
        assert_eq!(state.page_items().len(), 5);
        assert_eq!(first_id(state.page_items()), Some(&ProductId::Number(21)));
    }

    #[test]
    fn search_resets_to_first_page() {
        let mut state = catalog(25);
        state.go_to_page(2);
        state.search("FRAG");

        assert_eq!(state.page(), 1);
        assert_eq!(state.visible().len(), 12);
        assert!(state.visible().iter().all(|p| p.category == "Fragrances"));
        assert_eq!(state.products().len(), 25);
    }

    #[test]
    fn sort_applies_to_search_results() {
        let mut state = catalog(25);
        state.search("furn");
        state.sort_by_key("price-desc");

        assert_eq!(state.criterion(), Some(SortCriterion::PriceDescending));
        assert_eq!(first_id(state.visible()), Some(&ProductId::Number(25)));
        assert!(state.visible().windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn sort_keeps_the_page() {
        let mut state = catalog(25);
        state.go_to_page(2);
        state.sort_by(Some(SortCriterion::PriceAscending));
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn unknown_sort_key_restores_server_order() {
        let mut state = catalog(5);
        state.sort_by_key("price-desc");
        state.sort_by_key("bogus");

        assert_eq!(state.criterion(), None);
        assert_eq!(state.visible(), state.products());
    }

    #[test]
    fn stale_page_is_clamped_when_the_list_shrinks() {
        let mut state = catalog(25);
        state.go_to_page(3);
        state.set_products(catalog(12).products().to_vec());

        assert_eq!(state.page(), 2);
        assert_eq!(state.page_items().len(), 2);
    }

    #[test]
    fn empty_catalog_has_no_pages() {
        let mut state = CatalogState::new(10);
        state.go_to_page(5);

        assert_eq!(state.page(), 1);
        assert_eq!(state.page_count(), 0);
        assert!(state.page_items().is_empty());
    }
}
