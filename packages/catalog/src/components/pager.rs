use dioxus::prelude::*;

use crate::state::CatalogState;

/// Numbered page buttons, the current page marked `active`.
#[component]
pub fn PageBar(mut state: Signal<CatalogState>) -> Element {
    let current = state.read().page();
    let pages = 1..=state.read().page_count();

    rsx! {
        div { id: "pagination",
            for page in pages {
                button {
                    key: "{page}",
                    class: if page == current { "active" },
                    onclick: move |_| state.write().go_to_page(page),
                    "{page}"
                }
            }
        }
    }
}
