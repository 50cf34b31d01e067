#![allow(non_snake_case)]
use dioxus::prelude::*;

use tracing::Level;

mod browser;

mod components;
use components::{
    navigation::NavBar,
    palette::{CommandPaletteModal, use_shortcuts},
    scroll::ScrollSpy,
};

mod portfolio;
use portfolio::Portfolio;

mod state;
use state::PageState;

mod style;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[component]
pub fn App() -> Element {
    use_context_provider(PageState::new);
    use_shortcuts();

    rsx! {
        style { "{style::PORTFOLIO_STYLES}" }
        ScrollSpy {}
        NavBar {}
        Portfolio {}
        CommandPaletteModal {}
    }
}
