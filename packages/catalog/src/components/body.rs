use dioxus::prelude::*;

use crate::{
    components::{PageBar, ProductGrid},
    error::CatalogError,
    state::CatalogState,
};

/// Where the initial product fetch stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Failed,
    Ready,
}

impl LoadStatus {
    /// The status of a resource that resolves to the fetch result.
    pub fn of<T>(result: Option<&Result<T, CatalogError>>) -> Self {
        match result {
            None => LoadStatus::Loading,
            Some(Err(_)) => LoadStatus::Failed,
            Some(Ok(_)) => LoadStatus::Ready,
        }
    }
}

/// The card grid and page buttons once products are in, a placeholder until then.
#[component]
pub fn CatalogBody(
    status: LoadStatus,
    state: Signal<CatalogState>,
    #[props(into)] detail_page: String,
) -> Element {
    match status {
        LoadStatus::Loading => rsx! {
            div { id: "container", p { "Loading products..." } }
        },
        LoadStatus::Failed => rsx! {
            div { id: "container", p { "Error loading products" } }
        },
        LoadStatus::Ready => rsx! {
            ProductGrid { products: state.read().page_items().to_vec(), detail_page }
            PageBar { state }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_the_fetch_result() {
        assert_eq!(LoadStatus::of::<()>(None), LoadStatus::Loading);
        assert_eq!(LoadStatus::of(Some(&Ok(()))), LoadStatus::Ready);

        let failed = serde_json::from_str::<Vec<u8>>("{").map_err(CatalogError::from);
        assert_eq!(LoadStatus::of(Some(&failed)), LoadStatus::Failed);
    }
}
