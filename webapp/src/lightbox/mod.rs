use std::sync::Arc;

use common::{
    GalleryNavigator, GalleryOptions, config::SiteConfig, listener::ListenerSlot,
};
use dioxus::prelude::*;
use tracing::{error, warn};

use crate::{components::image::ContentImage, shared::style};

mod listener;
use listener::WindowKeyListener;

mod overlay;
pub use overlay::Lightbox;

// use_gallery
//
// one navigator per mounted gallery, built from the named gallery in the site config.  a name
// that is missing from the config yields an empty, inert gallery rather than a broken page
pub fn use_gallery(name: &'static str) -> Signal<GalleryNavigator> {
    let site = use_context::<Arc<SiteConfig>>();

    use_signal(move || match site.gallery(name) {
        Ok(gallery) => gallery.navigator(),
        Err(err) => {
            error!("{err}");
            GalleryNavigator::new(Vec::new(), GalleryOptions::default())
        }
    })
}

// use_key_listener
//
// keeps the window keydown handler registered exactly while the gallery's overlay is open.  the
// effect re-runs whenever the navigator changes; unmounting releases the handler no matter what
// state the gallery was left in
pub fn use_key_listener(gallery: Signal<GalleryNavigator>) {
    let mut slot = use_signal(ListenerSlot::<WindowKeyListener>::new);

    use_effect(move || {
        let open = gallery.read().is_open();

        if let Err(err) = slot.write().sync(open, || WindowKeyListener::attach(gallery)) {
            error!("gallery keyboard navigation unavailable: {err}");
        }
    });

    use_drop(move || {
        if let Ok(mut slot) = slot.try_write() {
            slot.release();
        }
    });
}

// thumbnail activation, carrying the thumbnail's own index
pub fn zoom(mut gallery: Signal<GalleryNavigator>, index: usize) {
    if let Err(err) = gallery.write().click_thumbnail(index) {
        warn!("ignoring thumbnail click: {err}");
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GallerySectionProps {
    gallery: Signal<GalleryNavigator>,
    start: usize,
    count: usize,
}

// GallerySection
//
// a grid of thumbnails for a contiguous slice of a gallery.  several sections can share one
// navigator, so an article can scatter its images between paragraphs and still step through all
// of them from one overlay.  thumbnails of a gallery with zoom disabled render as plain images
#[component]
pub fn GallerySection(props: GallerySectionProps) -> Element {
    let gallery = props.gallery;

    let images: Vec<(usize, common::ImageItem)> = gallery
        .read()
        .items()
        .iter()
        .cloned()
        .enumerate()
        .skip(props.start)
        .take(props.count)
        .collect();
    let zoomable = gallery.read().options().zooms_on_click();

    rsx! {
        style { "{style::GALLERY}" }
        div { class: "gallery",
            for (index, image) in images {
                if zoomable {
                    ContentImage {
                        key: "{index}",
                        image,
                        priority: index < 2,
                        onzoom: move |_| zoom(gallery, index),
                    }
                } else {
                    ContentImage { key: "{index}", image, priority: index < 2 }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GalleryProps {
    gallery: Signal<GalleryNavigator>,
}

// a whole gallery in one grid, with its overlay
#[component]
pub fn Gallery(props: GalleryProps) -> Element {
    let gallery = props.gallery;
    let count = gallery.read().len();

    rsx! {
        GallerySection { gallery, start: 0, count }
        Lightbox { gallery }
    }
}
