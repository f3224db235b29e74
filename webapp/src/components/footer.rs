use std::sync::Arc;

use common::config::SiteConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::{logo::Logo, navigation::NavLinkItem},
};

#[component]
pub fn Footer() -> Element {
    let site = use_context::<Arc<SiteConfig>>();

    rsx! {
        footer { class: "footer",
            nav { class: "footer-links border-top",
                Link { class: "footer-home", to: Route::Home {},
                    Logo { class: "footer-logo" }
                }

                span { class: "footer-link-container",
                    for link in site.footer.iter().cloned() {
                        NavLinkItem { key: "{link.href}", link, class: "footer-link" }
                    }
                }

                span { class: "footer-link-container footer-socials",
                    for link in site.social.iter().cloned() {
                        NavLinkItem { key: "{link.href}", link, class: "footer-link footer-social" }
                    }
                }
            }
        }
    }
}
