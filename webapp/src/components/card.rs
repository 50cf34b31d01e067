use dioxus::prelude::*;

use common::{Action, Origin, site::ContentCard};

use crate::state::PageState;

#[derive(Clone, PartialEq, Props)]
pub struct ContentCardViewProps {
    card: ContentCard,
}

#[component]
pub fn ContentCardView(props: ContentCardViewProps) -> Element {
    let mut state = use_context::<PageState>();
    let card = props.card;
    let link = card.link.clone();
    let target = card.link.clone().unwrap_or_default();

    rsx! {
        div { class: "card",
            h3 { class: "card-title",
                if let Some(link) = link.as_ref() {
                    a {
                        href: "{link}",
                        onclick: move |evt| {
                            evt.prevent_default();
                            state.dispatch(Action::OpenExternal(target.clone()), Origin::Page);
                        },
                        "{card.title}"
                    }
                } else {
                    "{card.title}"
                }
            }
            p { class: "card-meta", "{card.organization} | {card.dates}" }
            if !card.bullets.is_empty() {
                ul { class: "card-bullets",
                    for bullet in card.bullets.iter() {
                        li { "{bullet}" }
                    }
                }
            }
            if !card.tags.is_empty() {
                div { class: "tag-list",
                    for tag in card.tags.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
            }
        }
    }
}
