use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::warn;

use crate::{Route, shared::style};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "error-container",
            div { class: "error-content",
                h1 { class: "error-title", "404 — Page not found" }
                p { class: "intro-pretitle", "/{path}" }
                Link { to: Route::Home {}, class: "error-link", "Back to home" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BrokenSiteProps {
    message: String,
}

// rendered instead of the router when the site itself could not be set up
#[component]
pub fn BrokenSite(props: BrokenSiteProps) -> Element {
    rsx! {
        style { "{style::SITE_STYLES}" }
        div { class: "error-container",
            div { class: "error-content",
                h1 { class: "error-title", "Something went wrong" }
                p { class: "intro-pretitle", "{props.message}" }
                div { class: "error-actions",
                    button {
                        class: "error-button",
                        r#type: "button",
                        onclick: move |_| {
                            if let Some(window) = web_sys::window() {
                                if let Err(err) = window.location().reload() {
                                    warn!("failed to reload the page: {err:?}");
                                }
                            }
                        },
                        "Try again"
                    }
                }
            }
        }
    }
}
