use dioxus::prelude::*;

use crate::model::Product;

/// One product. The whole card links to `href`.
#[component]
pub fn ProductCard(product: Product, href: String) -> Element {
    let rating = product.rating_label();
    let price = product.price_label();
    let discount = product.discount_label();

    rsx! {
        a { class: "card", href: "{href}",
            div { class: "image",
                img { src: "{product.thumbnail}", alt: "{product.title}" }
            }
            div { class: "text",
                div { class: "top-row",
                    div { class: "title", "{product.title}" }
                    div { class: "rating", "{rating}" }
                }
                div { class: "bottom-row",
                    div { class: "price", "{price}" }
                    div { class: "discount", "{discount}" }
                }
            }
        }
    }
}
