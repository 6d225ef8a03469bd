use dioxus::prelude::*;
use tracing::error;

use crate::{
    api::fetch_products,
    components::{CatalogBody, LoadStatus, NavBar, SearchBar, SortSelect},
    config::CatalogConfig,
    error::CatalogError,
    state::CatalogState,
};

const STYLE: Asset = asset!("/assets/main.css");

/// The catalog page.
///
/// Products are fetched once, on mount, into the single [`CatalogState`] every other
/// component reads from and writes to.
#[component]
pub fn App() -> Element {
    let config = use_hook(CatalogConfig::from_env);
    let mut state = use_signal(|| CatalogState::new(config.page_size));

    let endpoint = config.endpoint.clone();
    let load = use_resource(move || {
        let endpoint = endpoint.clone();
        async move {
            let products = fetch_products(&endpoint)
                .await
                .inspect_err(|err| error!("Error fetching products: {err}"))?;
            state.write().set_products(products);
            Ok::<_, CatalogError>(())
        }
    });

    let detail_page = config.detail_page.clone();
    let status = LoadStatus::of(Option::as_ref(&*load.read()));

    rsx! {
        Stylesheet { href: STYLE }
        NavBar {}
        main { class: "catalog",
            div { class: "controls",
                SearchBar { state }
                SortSelect { state }
            }
            CatalogBody { status, state, detail_page }
        }
    }
}
