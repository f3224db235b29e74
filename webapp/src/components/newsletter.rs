use std::sync::Arc;

use api::newsletter::{SubscribeReq, subscribe};
use common::config::SiteConfig;
use dioxus::prelude::*;
use tracing::{info, warn};

#[component]
pub fn Newsletter() -> Element {
    let site = use_context::<Arc<SiteConfig>>();
    let status_signal = use_signal(|| String::from(""));

    let action = site.newsletter.action.clone();
    let placeholder = site.newsletter.placeholder.clone();

    rsx! {
        section { class: "newsletter",
            div { class: "newsletter-container border-top",
                form {
                    class: "newsletter-form",
                    onsubmit: move |event: FormEvent| {
                        event.prevent_default();

                        let action = action.clone();
                        let email = match event.values().get("email") {
                            Some(val) => val.as_value(),
                            None => String::from(""),
                        };

                        async move {
                            let mut status_signal = status_signal;

                            let req = match SubscribeReq::new(&email) {
                                Ok(req) => req,
                                Err(err) => {
                                    status_signal.set(err.to_string());
                                    return;
                                }
                            };

                            let result = match subscribe(&action, &req).await {
                                Ok(_) => {
                                    info!("newsletter subscription sent");
                                    String::from("Thanks! Check your inbox to confirm your subscription.")
                                }
                                Err(err) => {
                                    warn!("newsletter subscription failed: {err}");
                                    format!("Error subscribing: {err}")
                                }
                            };
                            status_signal.set(result);
                        }
                    },
                    input {
                        id: "bd-email",
                        name: "email",
                        r#type: "email",
                        class: "newsletter-input",
                        placeholder: "{placeholder}",
                        required: true,
                    }
                    label { class: "newsletter-label", r#for: "bd-email", "Email Address" }
                    input { r#type: "submit", value: "→", class: "newsletter-btn" }
                }
                span { class: "newsletter-status", "{status_signal()}" }
            }
        }
    }
}
