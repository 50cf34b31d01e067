use dioxus::prelude::*;

use common::{
    Action, Origin, Theme,
    i18n::{Text, tr},
};

use crate::state::PageState;

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<PageState>();
    let language = state.language();

    let (icon, label) = match state.preferences.read().theme() {
        Theme::Dark => ("☀", tr(language, Text::ThemeToLight)),
        Theme::Light => ("☾", tr(language, Text::ThemeToDark)),
    };

    rsx! {
        button {
            class: "icon-btn",
            title: label,
            aria_label: label,
            onclick: move |_| state.dispatch(Action::ToggleTheme, Origin::TopBar),
            "{icon}"
        }
    }
}

#[component]
pub fn LanguageToggle() -> Element {
    let mut state = use_context::<PageState>();
    let language = state.language();
    let next = language.toggled().as_str().to_uppercase();

    rsx! {
        button {
            class: "btn btn-ghost",
            title: tr(language, Text::SwitchLanguage),
            onclick: move |_| state.dispatch(Action::ToggleLanguage, Origin::TopBar),
            "{next}"
        }
    }
}
