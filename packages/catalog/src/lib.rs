//! A product catalog for the web.
//!
//! The catalog fetches a product list once, then lets the user search it by category,
//! sort it, and page through it ten cards at a time. Everything the page shows is derived
//! from a single [`state::CatalogState`].
//!
//! Serve it with:
//!
//! ```sh
//! dx serve --platform web
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod search;
pub mod sort;
pub mod state;

mod components;
pub use components::*;
