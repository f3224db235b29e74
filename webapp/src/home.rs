use std::sync::Arc;

use common::config::SiteConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::content::{ContentEditor, ContentIntro},
};

#[derive(Clone, PartialEq, Props)]
struct FeatureCardProps {
    pretitle: &'static str,
    title: &'static str,
    target: Route,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    rsx! {
        article { class: "feature-card",
            small { class: "intro-pretitle", "{props.pretitle}" }
            h2 { class: "intro-title",
                Link { to: props.target, "{props.title}" }
            }
        }
    }
}

// the archives, newsletter and sponsors come from the layout; the home page itself only points
// at the current features
#[component]
pub fn Home() -> Element {
    let site = use_context::<Arc<SiteConfig>>();

    rsx! {
        div { class: "home",
            ContentIntro { title: site.name.clone() }

            ContentEditor {
                p { "{site.description}" }

                FeatureCard {
                    pretitle: "Interiors, Architecture",
                    title: "The Unfolding Home",
                    target: Route::Architecture {},
                }
                FeatureCard {
                    pretitle: "Moods",
                    title: "Flat White",
                    target: Route::Moods {},
                }
            }
        }
    }
}
