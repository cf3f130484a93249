//! Dropdown selector for choosing a neighborhood.

use crate::components::LoadingSpinner;
use crate::state::AppState;
use dioxus::prelude::*;

/// Label of the empty first option.
const PLACEHOLDER: &str = "Select a neighborhood";

/// `(value, label)` pairs for the dropdown, placeholder first.
pub(crate) fn dropdown_options(names: &[String]) -> Vec<(String, String)> {
    std::iter::once((String::new(), PLACEHOLDER.to_string()))
        .chain(names.iter().map(|n| (n.clone(), n.clone())))
        .collect()
}

/// Neighborhood dropdown selector.
/// Reads available neighborhoods from AppState and updates selected_neighborhood on change.
#[component]
pub fn NeighborhoodSelector() -> Element {
    let mut state = use_context::<AppState>();
    let neighborhoods = state.neighborhoods.read().clone();
    let selected = (state.selected_neighborhood)();
    let loading = (state.neighborhoods_loading)();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("Selected neighborhood: {:?}", value);
        state.selected_neighborhood.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "neighborhood-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Neighborhood: "
            }
            select {
                id: "neighborhood-select",
                onchange: on_change,
                for (value, label) in dropdown_options(&neighborhoods) {
                    option {
                        key: "{value}",
                        selected: value == selected,
                        value: "{value}",
                        "{label}"
                    }
                }
            }
            if loading {
                LoadingSpinner { label: "Loading neighborhoods...".to_string() }
            }
        }
    }
}
