use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::callback::Interval;

use common::{
    Action, Origin,
    rotator::{ROTATION_INTERVAL_MS, Rotator},
    site::Testimonial,
};

use crate::state::PageState;

#[derive(Clone, PartialEq, Props)]
pub struct TestimonialsProps {
    testimonials: Vec<Testimonial>,
}

// one testimonial at a time, advancing on a timer
//
// the Interval is held by a hook and cancelled when it is dropped with the
// component
#[component]
pub fn Testimonials(props: TestimonialsProps) -> Element {
    let mut state = use_context::<PageState>();
    let count = props.testimonials.len();
    let mut rotator = use_signal(|| Rotator::new(count));

    use_hook(move || {
        Rc::new(Interval::new(ROTATION_INTERVAL_MS, move || {
            rotator.with_mut(|r| {
                r.advance();
            });
        }))
    });

    let index = rotator.read().index();
    let Some(current) = props.testimonials.get(index).cloned() else {
        return rsx! {};
    };

    let target = current.link.clone().unwrap_or_default();

    rsx! {
        div { class: "card testimonial",
            p { class: "testimonial-quote", "“{current.quote}”" }
            p { class: "testimonial-author", "{current.author}" }
            p { class: "card-meta", "{current.role}" }
            if let Some(contact) = current.contact.as_ref() {
                p { class: "card-meta", "{contact}" }
            }
            if let Some(profile) = current.link.as_ref() {
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| state.dispatch(Action::OpenExternal(target.clone()), Origin::Page),
                    "{profile}"
                }
            }
        }

        if count > 1 {
            div { class: "rotator-dots",
                for idx in 0..count {
                    button {
                        key: "{idx}",
                        class: if idx == index { "rotator-dot active" } else { "rotator-dot" },
                        onclick: move |_| rotator.with_mut(|r| r.select(idx)),
                    }
                }
            }
        }
    }
}
