use dioxus::prelude::*;

use crate::{components::ProductCard, model::Product};

/// The card container. Shows a placeholder instead of an empty grid.
///
/// Cards are keyed by position, since servers don't always send unique ids.
#[component]
pub fn ProductGrid(products: Vec<Product>, #[props(into)] detail_page: String) -> Element {
    rsx! {
        div { id: "container",
            if products.is_empty() {
                p { "No products found" }
            }
            for (idx, product) in products.iter().enumerate() {
                ProductCard {
                    key: "{idx}",
                    href: product.detail_href(&detail_page),
                    product: product.clone(),
                }
            }
        }
    }
}
