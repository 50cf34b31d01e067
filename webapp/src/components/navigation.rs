use dioxus::prelude::*;

use common::{
    Action, Origin,
    drawer::CloseReason,
    i18n::{Text, tr},
    site::NavItem,
};

use crate::{
    components::toggles::{LanguageToggle, ThemeToggle},
    state::PageState,
};

#[derive(Clone, PartialEq, Props)]
struct NavLinkProps {
    item: NavItem,
    origin: Origin,
}

// a link to one section; highlighted while that section is active
#[component]
fn NavLink(props: NavLinkProps) -> Element {
    let mut state = use_context::<PageState>();
    let language = state.language();

    let id = props.item.id.clone();
    let origin = props.origin;
    let active = state.active.read().as_deref() == Some(id.as_str());

    rsx! {
        a {
            class: if active { "nav-link active" } else { "nav-link" },
            href: "#{props.item.id}",
            onclick: move |evt| {
                evt.prevent_default();
                state.dispatch(Action::ScrollTo(id.clone()), origin);
            },
            "{props.item.label.get(language)}"
        }
    }
}

#[component]
fn PaletteHint() -> Element {
    let mut state = use_context::<PageState>();
    let language = state.language();
    let shortcut = state.dispatcher.read().platform().shortcut_label();

    rsx! {
        button {
            class: "btn btn-ghost shortcut-hint",
            title: tr(language, Text::PaletteHint),
            onclick: move |_| state.open_palette(),
            kbd { "{shortcut}" }
        }
    }
}

// the small-viewport menu: overlay plus a side panel with the same links
#[component]
fn Drawer() -> Element {
    let mut state = use_context::<PageState>();
    let language = state.language();

    if !state.dispatcher.read().drawer().is_open() {
        return rsx! {};
    }

    let items = state.site.read().nav.clone();

    rsx! {
        div {
            class: "overlay",
            onclick: move |_| state.close_drawer(CloseReason::Overlay),
        }
        aside { class: "drawer",
            div { class: "drawer-header",
                button {
                    class: "icon-btn",
                    aria_label: tr(language, Text::CloseMenu),
                    onclick: move |_| state.close_drawer(CloseReason::CloseControl),
                    "✕"
                }
            }
            nav {
                for item in items.iter() {
                    NavLink { key: "{item.id}", item: item.clone(), origin: Origin::Drawer }
                }
            }
            div { class: "nav-actions",
                ThemeToggle {}
                LanguageToggle {}
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let mut state = use_context::<PageState>();
    let language = state.language();

    let site = state.site.read();
    let name = site.owner.name.clone();
    let items = site.nav.clone();
    let home = items.first().map(|item| item.id.clone());
    drop(site);

    rsx! {
        header { class: "app-header",
            div { class: "container nav-container",
                span {
                    class: "logo",
                    onclick: move |_| {
                        if let Some(home) = home.clone() {
                            state.dispatch(Action::ScrollTo(home), Origin::TopBar);
                        }
                    },
                    "{name}"
                }

                nav { class: "nav-links",
                    for item in items.iter() {
                        NavLink { key: "{item.id}", item: item.clone(), origin: Origin::TopBar }
                    }
                }

                div { class: "nav-actions",
                    PaletteHint {}
                    ThemeToggle {}
                    LanguageToggle {}
                    button {
                        class: "icon-btn nav-toggle",
                        aria_label: tr(language, Text::OpenMenu),
                        onclick: move |_| state.toggle_drawer(),
                        "☰"
                    }
                }
            }
        }
        Drawer {}
    }
}
