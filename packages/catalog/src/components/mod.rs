mod app;
mod body;
mod card;
mod grid;
mod nav;
mod pager;
mod toolbar;

pub use app::App;
pub use body::{CatalogBody, LoadStatus};
pub use card::ProductCard;
pub use grid::{ProductGrid, ProductGridProps};
pub use nav::NavBar;
pub use pager::PageBar;
pub use toolbar::{SearchBar, SortSelect};
