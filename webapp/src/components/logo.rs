use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct LogoProps {
    #[props(default, into)]
    class: Option<String>,
}

#[component]
pub fn Logo(props: LogoProps) -> Element {
    let class = match props.class {
        Some(class) => format!("logo {class}"),
        None => String::from("logo"),
    };

    rsx! {
        svg {
            class,
            view_box: "0 0 53 52",
            role: "img",
            "aria-label": "Dogan Logo",
            title { "Dogan Logo" }
            path { d: "M52.8959305 51H46v-7l7-13-.1040695 20zM0 0h7v51H0V0zm24 44l3 8L53 0h-7L24 44z" }
        }
    }
}
