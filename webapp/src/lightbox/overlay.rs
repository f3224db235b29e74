use common::GalleryNavigator;
use dioxus::prelude::*;
use tracing::warn;

use crate::{lightbox::use_key_listener, shared::style};

#[derive(Clone, PartialEq, Props)]
pub struct LightboxProps {
    gallery: Signal<GalleryNavigator>,
}

// Lightbox
//
// the full-screen overlay for whichever image the navigator has open.  a click anywhere on the
// overlay, the zoomed image included, closes it; only the step buttons keep it open
#[component]
pub fn Lightbox(props: LightboxProps) -> Element {
    let mut gallery = props.gallery;

    use_key_listener(gallery);

    let (image, index, len, options) = {
        let nav = gallery.read();

        match (nav.active_item(), nav.active_index()) {
            (Some(image), Some(index)) => (image.clone(), index, nav.len(), nav.options().clone()),
            _ => return rsx! {},
        }
    };

    let position = index + 1;

    let mut step = move |evt: MouseEvent, forward: bool| {
        evt.stop_propagation();

        let result = if forward {
            gallery.write().next()
        } else {
            gallery.write().previous()
        };

        if let Err(err) = result {
            warn!("ignoring gallery step: {err}");
        }
    };

    rsx! {
        style { "{style::LIGHTBOX}" }
        div {
            class: "zoom-overlay",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{options.close_label}",
            onclick: move |_| {
                gallery.write().click_overlay();
            },
            img {
                class: "zoomed-image",
                src: "{image.src}",
                alt: "{image.alt}",
                width: "{image.width}",
                height: "{image.height}",
            }
            if len > 1 {
                button {
                    class: "zoom-step previous",
                    r#type: "button",
                    aria_label: "Previous image",
                    onclick: move |evt| step(evt, false),
                    "‹"
                }
                button {
                    class: "zoom-step next",
                    r#type: "button",
                    aria_label: "Next image",
                    onclick: move |evt| step(evt, true),
                    "›"
                }
                span { class: "zoom-counter", "{position} / {len}" }
            }
            if options.shows_close_button() {
                button {
                    class: "zoom-close",
                    r#type: "button",
                    aria_label: "{options.close_label}",
                    "×"
                }
            }
        }
    }
}
