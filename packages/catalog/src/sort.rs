use std::{cmp::Ordering, fmt::Display, str::FromStr};

use crate::{error::UnknownCriterion, model::Product};

/// A named ordering for the catalog, selected from the sort dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    PriceAscending,
    PriceDescending,
    RatingDescending,
    DiscountDescending,
}

impl SortCriterion {
    /// Every criterion, in the order the dropdown lists them.
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::PriceAscending,
        SortCriterion::PriceDescending,
        SortCriterion::RatingDescending,
        SortCriterion::DiscountDescending,
    ];

    /// The `<option>` value for this criterion.
    pub fn key(self) -> &'static str {
        match self {
            SortCriterion::PriceAscending => "price-asc",
            SortCriterion::PriceDescending => "price-desc",
            SortCriterion::RatingDescending => "rating-desc",
            SortCriterion::DiscountDescending => "discount-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::PriceAscending => "Price: Low to High",
            SortCriterion::PriceDescending => "Price: High to Low",
            SortCriterion::RatingDescending => "Top Rated",
            SortCriterion::DiscountDescending => "Biggest Discount",
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        // Missing ratings and discounts sort as zero. NaN compares equal to everything.
        let cmp = |a: f64, b: f64| a.partial_cmp(&b).unwrap_or(Ordering::Equal);
        match self {
            SortCriterion::PriceAscending => cmp(a.price, b.price),
            SortCriterion::PriceDescending => cmp(b.price, a.price),
            SortCriterion::RatingDescending => {
                cmp(b.rating.unwrap_or(0.0), a.rating.unwrap_or(0.0))
            }
            SortCriterion::DiscountDescending => cmp(
                b.discount_percentage.unwrap_or(0.0),
                a.discount_percentage.unwrap_or(0.0),
            ),
        }
    }
}

impl Display for SortCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortCriterion {
    type Err = UnknownCriterion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortCriterion::ALL
            .into_iter()
            .find(|criterion| criterion.key() == s)
            .ok_or_else(|| UnknownCriterion(s.to_string()))
    }
}

/// Returns a sorted copy of `products`. Ties keep their input order.
pub fn sort_products(products: &[Product], criterion: SortCriterion) -> Vec<Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| criterion.compare(a, b));
    sorted
}

/// Like [`sort_products`], but keyed by the dropdown value.
///
/// An unknown key returns the products in their input order.
pub fn sort_products_by_key(products: &[Product], key: &str) -> Vec<Product> {
    match key.parse() {
        Ok(criterion) => sort_products(products, criterion),
        Err(_) => products.to_vec(),
    }
}
