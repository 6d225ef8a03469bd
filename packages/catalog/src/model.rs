use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The rating shown on a card when the server didn't send one.
pub const FALLBACK_RATING: f64 = 4.5;

/// The label shown in place of a discounted price.
pub const NO_DISCOUNT: &str = "No discount";

/// A product identifier as the server sends it.
///
/// Most backends send numbers, some send strings. Either way it is only ever displayed
/// or put into a link, so both are accepted as-is.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Debug)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductId::Number(id) => id.fmt(f),
            ProductId::Text(id) => id.fmt(f),
        }
    }
}

/// A single product record, as returned by the products endpoint.
///
/// Fields the catalog doesn't display are ignored. Nothing is validated: a missing title
/// renders as an empty title, a missing price as `$0`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub category: String,
}

impl Product {
    /// The text of the rating badge, e.g. `⭐ 4.2`.
    ///
    /// A missing or zero rating shows [`FALLBACK_RATING`].
    pub fn rating_label(&self) -> String {
        let rating = self
            .rating
            .filter(|rating| *rating != 0.0)
            .unwrap_or(FALLBACK_RATING);
        format!("⭐ {rating}")
    }

    /// The list price in its shortest form: `$100`, `$9.99`.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    /// The price after applying the discount, or `None` if there is no discount.
    pub fn discounted_price(&self) -> Option<f64> {
        self.discount_percentage
            .filter(|discount| *discount != 0.0)
            .map(|discount| (100.0 - discount) * self.price / 100.0)
    }

    /// The discounted price to two decimals, or [`NO_DISCOUNT`].
    ///
    /// Cents are rounded half away from zero, so `0.125` shows as `$0.13`.
    pub fn discount_label(&self) -> String {
        match self.discounted_price() {
            Some(price) => format!("${:.2}", (price * 100.0).round() / 100.0),
            None => NO_DISCOUNT.to_string(),
        }
    }

    /// The link to this product's detail page, e.g. `detail.html?id=7`.
    pub fn detail_href(&self, detail_page: &str) -> String {
        format!("{detail_page}?id={}", self.id)
    }
}

#[cfg(test)]
pub(crate) fn product(id: u64, price: f64) -> Product {
    Product {
        id: ProductId::Number(id),
        title: format!("Product {id}"),
        thumbnail: format!("https://cdn.example.com/{id}.png"),
        price,
        discount_percentage: None,
        rating: None,
        category: "beauty".to_string(),
    }
}
