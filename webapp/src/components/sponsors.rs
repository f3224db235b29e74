use std::sync::Arc;

use common::{
    carousel::Carousel,
    config::{SiteConfig, SponsorLogo},
};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

fn logo_name(logo: SponsorLogo) -> &'static str {
    match logo {
        SponsorLogo::Ello => "Ello",
        SponsorLogo::Gestalten => "Gestalten",
    }
}

// Sponsors
//
// a strip of sponsors that steps forward on a timer.  the timer lives in a component future, so
// it stops with the component
#[component]
pub fn Sponsors() -> Element {
    let site = use_context::<Arc<SiteConfig>>();
    let entries = site.sponsors.entries.clone();
    let interval_ms = site.sponsors.interval_ms.get();

    let mut carousel =
        use_signal(|| Carousel::new(site.sponsors.entries.len(), site.sponsors.visible));

    use_future(move || async move {
        loop {
            TimeoutFuture::new(interval_ms).await;

            if carousel.peek().rotates() {
                carousel.write().advance();
            }
        }
    });

    let rotates = carousel.read().rotates();
    let visible: Vec<usize> = carousel.read().window().collect();

    rsx! {
        section { class: "sponsors",
            div { class: "sponsors-inner border-top",
                if rotates {
                    button {
                        class: "sponsor-step",
                        r#type: "button",
                        aria_label: "Previous sponsors",
                        onclick: move |_| carousel.write().retreat(),
                        "‹"
                    }
                }
                for (position, index) in visible.into_iter().enumerate() {
                    if let Some(sponsor) = entries.get(index) {
                        figure { key: "{position}-{sponsor.href}", class: "sponsor-container",
                            a {
                                class: "sponsor-link",
                                target: "_blank",
                                aria_label: "Visit Sponsor",
                                href: "{sponsor.href}",
                                rel: "noopener noreferrer",
                                span { class: "sponsor-logo", {logo_name(sponsor.logo)} }
                            }
                            figcaption { class: "sponsor-tagline", "{sponsor.tagline}" }
                        }
                    }
                }
                if rotates {
                    button {
                        class: "sponsor-step",
                        r#type: "button",
                        aria_label: "Next sponsors",
                        onclick: move |_| carousel.write().advance(),
                        "›"
                    }
                }
            }
        }
    }
}
