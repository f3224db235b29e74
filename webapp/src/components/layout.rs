use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::{
    Route,
    components::{
        archives::Archives, footer::Footer, header::Header, navigation::Menu,
        newsletter::Newsletter, sponsors::Sponsors,
    },
};

// chrome shared by every page; the routed page renders between the menu and the archives
#[component]
pub fn SiteLayout() -> Element {
    rsx! {
        Header {}
        Menu {}
        main { Outlet::<Route> {} }
        Archives {}
        Newsletter {}
        Sponsors {}
        Footer {}
    }
}
