use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use common::{
    Chord,
    i18n::{Text, tr},
};

use crate::{browser::listener::use_window_listener, state::PageState};

// global keyboard shortcuts; mounted once for the whole page
pub fn use_shortcuts() {
    let mut state = use_context::<PageState>();

    use_window_listener("keydown", move |event| {
        let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };

        let chord = Chord {
            key: event.key(),
            ctrl: event.ctrl_key(),
            meta: event.meta_key(),
            alt: event.alt_key(),
            shift: event.shift_key(),
        };

        if state.handle_key(&chord) {
            event.prevent_default();
        }
    });
}

#[component]
pub fn CommandPaletteModal() -> Element {
    let mut state = use_context::<PageState>();
    let language = state.language();

    let dispatcher = state.dispatcher.read();
    let palette = dispatcher.palette();

    if !palette.is_open() {
        return rsx! {};
    }

    let query = palette.query().to_owned();
    let highlighted = palette.highlighted();
    let labels: Vec<String> = palette.filtered().iter().map(|c| c.label.clone()).collect();
    drop(dispatcher);

    let empty = tr(language, Text::PaletteEmpty);

    rsx! {
        div { class: "overlay", onclick: move |_| state.close_palette() }
        div {
            class: "palette",
            role: "dialog",
            aria_label: tr(language, Text::PaletteHint),
            input {
                class: "palette-input",
                r#type: "text",
                placeholder: tr(language, Text::PalettePlaceholder),
                value: "{query}",
                onmounted: move |evt| async move {
                    let _ = evt.set_focus(true).await;
                },
                oninput: move |evt| state.set_query(&evt.value()),
            }
            if labels.is_empty() {
                div { class: "palette-empty", "{empty}" }
            } else {
                ul { class: "palette-list",
                    for (idx, label) in labels.into_iter().enumerate() {
                        li {
                            key: "{idx}-{label}",
                            class: if idx == highlighted { "palette-item highlighted" } else { "palette-item" },
                            onclick: move |_| state.select_command(idx),
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
