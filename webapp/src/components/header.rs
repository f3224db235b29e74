use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::error;

use crate::{
    Route,
    components::{
        logo::Logo,
        search_form::{SearchForm, SearchIcon},
    },
    shared::theme::{apply_color_scheme, store_color_scheme, stored_color_scheme},
};

#[component]
pub fn Header() -> Element {
    let mut color_scheme = use_signal(stored_color_scheme);
    let mut is_search_open = use_signal(|| false);

    rsx! {
        header { class: "header",
            div { class: "header-inner border-bottom",
                button {
                    class: "header-btn btn-scheme",
                    r#type: "button",
                    aria_label: "Reading Mode",
                    onclick: move |_| {
                        let scheme = color_scheme().toggled();

                        if let Err(err) = apply_color_scheme(scheme) {
                            error!("{err}");
                            return;
                        }

                        store_color_scheme(scheme);
                        color_scheme.set(scheme);
                    },
                    svg {
                        view_box: "0 0 22 22",
                        role: "img",
                        "aria-label": "Theme Toggle",
                        title { "Theme Toggle" }
                        circle { class: "outer", cx: "10", cy: "10", r: "8" }
                        circle { class: "inner", cx: "10", cy: "10", r: "6" }
                    }
                }

                Link { class: "header-home", to: Route::Home {},
                    Logo {}
                }

                button {
                    class: "header-btn btn-search",
                    r#type: "button",
                    aria_label: "Search",
                    aria_expanded: "{is_search_open()}",
                    onclick: move |_| is_search_open.toggle(),
                    SearchIcon {}
                }

                SearchForm { is_open: is_search_open() }
            }
        }
    }
}
