use common::ImageItem;
use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ContentImageProps {
    image: ImageItem,
    #[props(default)]
    first: bool,
    #[props(default)]
    priority: bool,
    #[props(default)]
    onzoom: Option<EventHandler<()>>,
}

// ContentImage
//
// a figure whose wrapper reserves the image's aspect ratio before it loads.  when onzoom is set
// the wrapper is the zoom trigger and reports back to whichever gallery owns the image;
// otherwise the image is static
#[component]
pub fn ContentImage(props: ContentImageProps) -> Element {
    let image = props.image;
    let onzoom = props.onzoom;

    let figure_class = if props.first { "img-figure first-image" } else { "img-figure" };
    let wrapper_class = if onzoom.is_some() { "img-wrapper" } else { "img-wrapper static" };
    let padding = format!("padding-bottom: {:.4}%;", image.padding_bottom());
    let loading = if props.priority { "eager" } else { "lazy" };
    let href = onzoom.is_some().then_some("#");
    let zoom_label = onzoom.is_some().then(|| image.zoom_label());

    rsx! {
        figure { class: figure_class,
            a {
                class: wrapper_class,
                href,
                "data-orientation": image.orientation().as_str(),
                style: padding,
                aria_label: zoom_label,
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();

                    if let Some(handler) = onzoom {
                        handler.call(());
                    }
                },
                img {
                    class: "img",
                    src: "{image.src}",
                    alt: "{image.alt}",
                    width: "{image.width}",
                    height: "{image.height}",
                    loading,
                }
            }
            if let Some(caption) = image.caption.clone() {
                figcaption { "{caption}" }
            }
        }
    }
}
