#![allow(non_snake_case)]
use std::sync::Arc;

use common::config::parse_site_config;
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error};

mod shared;
use shared::{style, theme::apply_stored_color_scheme};

mod components;
use components::layout::SiteLayout;

mod lightbox;

mod home;
use home::Home;

mod architecture;
use architecture::Architecture;

mod moods;
use moods::Moods;

mod not_found;
use not_found::{BrokenSite, NotFound};

// shipped next to the binary so that editors can change links, sponsors and galleries
// without touching any components
const SITE_CONFIG: &str = include_str!("../assets/site.toml");

#[derive(Clone)]
struct StartupError(String);

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    match parse_site_config(SITE_CONFIG) {
        Ok(site) => dioxus::LaunchBuilder::new().with_context(Arc::new(site)).launch(App),
        Err(err) => {
            error!("{err:#}");
            dioxus::LaunchBuilder::new()
                .with_context(StartupError(format!("{err:#}")))
                .launch(Broken)
        }
    }
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/architecture")]
        Architecture {},
        #[route("/moods")]
        Moods {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    use_hook(apply_stored_color_scheme);

    rsx! {
        style { "{style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}

#[component]
fn Broken() -> Element {
    let StartupError(message) = use_context::<StartupError>();

    rsx! {
        BrokenSite { message }
    }
}
