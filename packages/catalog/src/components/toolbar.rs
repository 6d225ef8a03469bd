use dioxus::prelude::*;

use crate::{sort::SortCriterion, state::CatalogState};

/// The category search box. The query is only applied on submit, by button or Enter.
#[component]
pub fn SearchBar(mut state: Signal<CatalogState>) -> Element {
    let mut draft = use_signal(String::new);

    rsx! {
        form {
            class: "search",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                state.write().search(&draft.read());
            },
            input {
                r#type: "search",
                placeholder: "Search by category",
                value: "{draft}",
                oninput: move |evt| draft.set(evt.value()),
            }
            button { class: "search-btn", r#type: "submit", "Search" }
        }
    }
}

#[component]
pub fn SortSelect(mut state: Signal<CatalogState>) -> Element {
    let current = state.read().criterion();

    rsx! {
        select {
            id: "sort-select",
            onchange: move |evt| state.write().sort_by_key(&evt.value()),
            option { value: "", selected: current.is_none(), "Sort by" }
            for criterion in SortCriterion::ALL {
                option {
                    key: "{criterion}",
                    value: criterion.key(),
                    selected: current == Some(criterion),
                    {criterion.label()}
                }
            }
        }
    }
}
