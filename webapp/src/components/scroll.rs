use dioxus::prelude::*;

use common::i18n::{Text, tr};

use crate::{browser::listener::use_window_listener, state::PageState};

// scroll position tracking for the whole page
//
// owns the scroll and resize listeners; both are released when this
// component unmounts
#[component]
pub fn ScrollSpy() -> Element {
    let mut state = use_context::<PageState>();
    let language = state.language();

    use_window_listener("scroll", move |_| state.refresh_scroll());
    use_window_listener("resize", move |_| state.refresh_scroll());

    // the sections only exist after the first render
    use_effect(move || state.refresh_scroll());

    let metrics = *state.scroll.read();
    let progress = metrics.progress;

    rsx! {
        div { class: "scroll-progress", style: "width: {progress}%;" }

        if metrics.show_top_button {
            button {
                class: "icon-btn top-button",
                title: tr(language, Text::BackToTop),
                aria_label: tr(language, Text::BackToTop),
                onclick: move |_| state.scroll_to_top(),
                "↑"
            }
        }
    }
}
