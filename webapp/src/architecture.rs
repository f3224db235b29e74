use dioxus::prelude::*;

use crate::{
    components::{
        content::{ContentEditor, ContentIntro, ContentMeta, EditorVariant, MetaItem},
        image::ContentImage,
    },
    lightbox::{GallerySection, Lightbox, use_gallery, zoom},
};

const ARCHITECTURE_GALLERY: &str = "architecture";

fn credits() -> Vec<MetaItem> {
    vec![
        MetaItem { title: "Location", text: Some("Słupsk, Poland"), link: None },
        MetaItem { title: "Architecture", text: None, link: Some(("ACOS", "http://acos.design/")) },
        MetaItem { title: "Website", text: None, link: Some(("acos.design", "http://acos.design/")) },
        MetaItem { title: "Photography", text: Some("PION Studio"), link: None },
    ]
}

// The Unfolding Home
//
// the article's images are split over four places in the text, but they all belong to one
// gallery, so the arrow keys walk through every image on the page
#[component]
pub fn Architecture() -> Element {
    let gallery = use_gallery(ARCHITECTURE_GALLERY);
    let lead = gallery.read().items().first().cloned();
    let zoomable = gallery.read().options().zooms_on_click();

    rsx! {
        div { class: "default",
            ContentIntro {
                pretitle: "Interiors, Architecture",
                title: "The Unfolding Home",
                author: "Words by Jillian Japka",
            }

            ContentEditor { variant: EditorVariant::Default,
                if let Some(image) = lead {
                    if zoomable {
                        ContentImage {
                            image,
                            first: true,
                            priority: true,
                            onzoom: move |_| zoom(gallery, 0),
                        }
                    } else {
                        ContentImage { image, first: true, priority: true }
                    }
                }

                p {
                    "There is perhaps nothing more true to minimalism than having something that serves multiple functions. The more multi-purpose an object is, the less need there is for more. "
                    a { href: "http://acos.design/", rel: "noopener noreferrer", target: "_blank", "ACOS" }
                    " took this concept and applied it to an entire home. Meet The Unfolding Home, a dwelling with no walls and no limits. The Unfolding Home is a living space designed to adapt to changing needs."
                }

                GallerySection { gallery, start: 1, count: 3 }

                p {
                    "ACOS's unique home features a completely open floor plan. The mass of the home is located in a central core, with the ability to fully circulate. Flexible screens allow areas of the home to be sectioned off for privacy. One side of the home holds the kitchen, and the other side holds the master bedroom, where it is most private. The rest of the space is used alternatively for a living room, library, guest room, and play area."
                }

                GallerySection { gallery, start: 4, count: 3 }

                p {
                    "The furniture in The Unfolding Home needs to be as multi-purpose as the walls around it. Extra-large shelving has room for anything that needs holding, whether it be art, plants, or books. Bench cushions can be easily swapped for a mattress for a bed. The chairs throughout the home match, so they can be added together for dining or separated and used where needed."
                }
                p {
                    "With the absence of walls, an interior could easily feel too open and cold. The Unfolding House counteracts this with soft textures and warm colours. Light tan hardwood floors are used throughout, balancing the effect of the white walls and dark cabinetry. Floor to ceiling curtains cover every window, bringing a remarkable amount of softness to the rooms. Additional warmth is provided by the brass fixtures and wooden furniture."
                }
                p {
                    "The Unfolding Home keeps the principles of minimalism close and proves that smart and simple can create the loveliest designs."
                }

                GallerySection { gallery, start: 7, count: 3 }
            }

            ContentMeta { items: credits() }

            Lightbox { gallery }
        }
    }
}
