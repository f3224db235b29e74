use dioxus::prelude::*;
use tracing::info;

#[derive(Clone, PartialEq, Props)]
pub struct SearchFormProps {
    is_open: bool,
}

// there is no search backend yet; submissions are only logged
#[component]
pub fn SearchForm(props: SearchFormProps) -> Element {
    rsx! {
        form {
            class: if props.is_open { "search-form is-open" } else { "search-form" },
            onsubmit: move |event: FormEvent| {
                event.prevent_default();

                let query = match event.values().get("s") {
                    Some(val) => val.as_value(),
                    None => String::from(""),
                };

                info!({ query = %query }, "search submitted");
            },
            input {
                r#type: "search",
                name: "s",
                id: "s",
                class: "search-input border-around",
                required: true,
                placeholder: "Search…",
            }
            button {
                class: "search-submit",
                r#type: "submit",
                aria_label: "Search Submit",
                SearchIcon {}
            }
        }
    }
}

#[component]
pub fn SearchIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 22 22",
            role: "img",
            "aria-label": "Search",
            title { "Search" }
            path {
                fill_rule: "nonzero",
                d: "M14.906 16.32a8 8 0 1 1 1.414-1.414l3.751 3.751-1.414 1.414-3.751-3.751zM10 16a6 6 0 1 0 0-12 6 6 0 0 0 0 12z",
            }
        }
    }
}
