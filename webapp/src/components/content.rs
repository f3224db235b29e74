use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct ContentIntroProps {
    #[props(default, into)]
    pretitle: Option<String>,
    #[props(into)]
    title: String,
    #[props(default, into)]
    author: Option<String>,
}

#[component]
pub fn ContentIntro(props: ContentIntroProps) -> Element {
    rsx! {
        div { class: "intro",
            if let Some(pretitle) = props.pretitle {
                small { class: "intro-pretitle", "{pretitle}" }
            }
            h1 { class: "intro-title", "{props.title}" }
            if let Some(author) = props.author {
                h2 { class: "intro-author", "{author}" }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorVariant {
    #[default]
    Default,
    Gallery,
    Mood,
}

impl EditorVariant {
    fn class(self) -> &'static str {
        match self {
            EditorVariant::Default => "editor default",
            EditorVariant::Gallery => "editor gallery",
            EditorVariant::Mood => "editor mood",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ContentEditorProps {
    #[props(default)]
    variant: EditorVariant,
    children: Element,
}

#[component]
pub fn ContentEditor(props: ContentEditorProps) -> Element {
    rsx! {
        div { class: props.variant.class(), {props.children} }
    }
}

// one row of the article's credits; a link wins over plain text when both are given
#[derive(Clone, Debug, PartialEq)]
pub struct MetaItem {
    pub title: &'static str,
    pub text: Option<&'static str>,
    pub link: Option<(&'static str, &'static str)>,
}

#[derive(Clone, PartialEq, Props)]
pub struct ContentMetaProps {
    items: Vec<MetaItem>,
}

#[component]
pub fn ContentMeta(props: ContentMetaProps) -> Element {
    rsx! {
        section { class: "meta",
            dl { class: "meta-content",
                for item in props.items {
                    div { key: "{item.title}", class: "meta-item",
                        dt { class: "meta-title", "{item.title}" }
                        dd { class: "meta-text",
                            match (item.link, item.text) {
                                (Some((label, href)), _) => rsx! {
                                    a { href, target: "_blank", rel: "noopener noreferrer", "{label}" }
                                },
                                (None, Some(text)) => rsx! { "{text}" },
                                (None, None) => rsx! {},
                            }
                        }
                    }
                }
            }
        }
    }
}
