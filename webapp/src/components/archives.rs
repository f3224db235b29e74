use std::sync::Arc;

use common::config::SiteConfig;
use dioxus::prelude::*;

use crate::components::navigation::NavLinkItem;

#[component]
pub fn Archives() -> Element {
    let site = use_context::<Arc<SiteConfig>>();

    rsx! {
        nav { class: "archives",
            div { class: "archives-inner border-top",
                h2 { class: "archives-title", "Support What We Do" }
                NavLinkItem { link: site.membership.clone(), class: "button archives-button" }
            }
        }
    }
}
