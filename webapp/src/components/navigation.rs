use std::sync::Arc;

use common::config::{NavLink, SiteConfig};
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;

#[derive(Clone, PartialEq, Props)]
pub struct NavLinkItemProps {
    link: NavLink,
    #[props(into)]
    class: String,
    #[props(default)]
    onfollow: Option<EventHandler<()>>,
}

// NavLinkItem
//
// internal links go through the router and are marked active when they match the current
// route; anything off-site is a plain anchor with the configured target and rel
#[component]
pub fn NavLinkItem(props: NavLinkItemProps) -> Element {
    let link = props.link;
    let onfollow = props.onfollow;

    let current_path: Route = use_route();
    let class = if current_path.to_string() == link.href {
        format!("{} active", props.class)
    } else {
        props.class
    };

    if link.is_external() {
        return rsx! {
            a {
                class,
                href: "{link.href}",
                target: link.target.as_str(),
                rel: link.rel.clone().unwrap_or_default(),
                onclick: move |_| {
                    if let Some(handler) = onfollow {
                        handler.call(());
                    }
                },
                "{link.label}"
            }
        };
    }

    rsx! {
        Link {
            class,
            to: link.href.clone(),
            onclick: move |_| {
                if let Some(handler) = onfollow {
                    handler.call(());
                }
            },
            "{link.label}"
        }
    }
}

// Menu
//
// the collapsible main navigation below the header
#[component]
pub fn Menu() -> Element {
    let site = use_context::<Arc<SiteConfig>>();
    let mut is_open = use_signal(|| false);

    rsx! {
        div { class: if is_open() { "menu is-open" } else { "menu" },
            button {
                class: "menu-btn border-bottom",
                r#type: "button",
                aria_expanded: "{is_open()}",
                onclick: move |_| is_open.toggle(),
                "Menu"
            }
            nav { class: "menu-inner border-bottom",
                for link in site.navigation.iter().cloned() {
                    NavLinkItem {
                        key: "{link.href}",
                        link,
                        class: "menu-item",
                        onfollow: move |_| is_open.set(false),
                    }
                }
            }
        }
    }
}
