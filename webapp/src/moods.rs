use dioxus::prelude::*;

use crate::{
    components::content::{ContentEditor, ContentIntro, EditorVariant},
    lightbox::{Gallery, use_gallery},
};

const MOODS_GALLERY: &str = "moods";

#[component]
pub fn Moods() -> Element {
    let gallery = use_gallery(MOODS_GALLERY);

    rsx! {
        div { class: "mood",
            ContentIntro {
                pretitle: "Moods",
                title: "Flat White",
                author: "Curated by Carl MH Barenbrug",
            }

            ContentEditor { variant: EditorVariant::Mood,
                p {
                    "No, this is not a curation of coffee. Rather, it is a celebration of white primary forms with clean geometric lines. White is synonymous with minimalism because it is a canvas from which to express the essence of something. White also just looks great with anything."
                }
            }

            ContentEditor { variant: EditorVariant::Gallery,
                Gallery { gallery }
            }
        }
    }
}
