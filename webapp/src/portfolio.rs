use dioxus::prelude::*;

use common::{
    Action, Origin,
    i18n::{Text, tr},
    site::{LinkKind, anchor},
};

use crate::{
    components::{card::ContentCardView, testimonials::Testimonials},
    state::PageState,
};

// the single page, top to bottom
//
// section ids come from site::anchor, which the site file's nav ids are
// validated against; the tracker and the dispatcher find sections by id
#[component]
pub fn Portfolio() -> Element {
    let mut state = use_context::<PageState>();
    let language = state.language();
    let site = state.site.read();

    let mail = site.mail_action();
    let contact_mail = mail.clone();
    let links = site.links.clone();

    rsx! {
        main {
            // Hero
            section { id: anchor::HOME, class: "hero",
                if let Some(photo) = site.owner.photo.as_ref() {
                    img { class: "hero-photo", src: "{photo}", alt: "{site.owner.name}" }
                }
                h1 { class: "hero-title", "{site.owner.name}" }
                p { class: "hero-subtitle", "{site.owner.tagline}" }
                div { class: "hero-actions",
                    button {
                        class: "btn btn-light",
                        onclick: move |_| state.dispatch(mail.clone(), Origin::Page),
                        {tr(language, Text::Email)}
                    }
                    for link in links.into_iter() {
                        HeroLink { key: "{link.url}", kind: link.kind, label: link.label.clone(), url: link.url.clone() }
                    }
                }
            }

            // About
            section { id: anchor::ABOUT, class: "page-section",
                div { class: "container",
                    h2 { class: "section-title", {tr(language, Text::AboutTitle)} }
                    p { class: "about-text", "{site.about}" }
                }
            }

            // Experience
            section { id: anchor::EXPERIENCE, class: "page-section alt",
                div { class: "container",
                    h2 { class: "section-title", {tr(language, Text::ExperienceTitle)} }
                    div { class: "card-grid",
                        for card in site.experience.iter() {
                            ContentCardView { key: "{card.title}", card: card.clone() }
                        }
                    }
                }
            }

            // Projects
            section { id: anchor::PROJECTS, class: "page-section",
                div { class: "container",
                    h2 { class: "section-title", {tr(language, Text::ProjectsTitle)} }
                    div { class: "card-grid",
                        for card in site.projects.iter() {
                            ContentCardView { key: "{card.title}", card: card.clone() }
                        }
                    }
                }
            }

            // Skills
            section { id: anchor::SKILLS, class: "page-section",
                div { class: "container",
                    h2 { class: "section-title", {tr(language, Text::SkillsTitle)} }
                    div { class: "skill-grid",
                        for skill in site.skills.iter() {
                            div { class: "card", "{skill}" }
                        }
                    }
                }
            }

            // Languages & strengths
            section { id: anchor::STRENGTHS, class: "page-section tint",
                div { class: "container",
                    h2 { class: "section-title", {tr(language, Text::LanguagesStrengthsTitle)} }
                    div { class: "card-grid",
                        div { class: "card",
                            h3 { class: "card-title", style: "text-align: center; margin-bottom: var(--space-4);",
                                {tr(language, Text::LanguagesTitle)}
                            }
                            ul { class: "plain-list",
                                for entry in site.languages.iter() {
                                    li { "{entry}" }
                                }
                            }
                        }
                        div { class: "card",
                            h3 { class: "card-title", style: "text-align: center; margin-bottom: var(--space-4);",
                                {tr(language, Text::StrengthsTitle)}
                            }
                            ul { class: "plain-list",
                                for entry in site.strengths.iter() {
                                    li { "{entry}" }
                                }
                            }
                        }
                    }
                }
            }

            // References
            section { id: anchor::REFERENCES, class: "page-section alt",
                div { class: "container",
                    h2 { class: "section-title", {tr(language, Text::ReferencesTitle)} }
                    Testimonials { testimonials: site.testimonials.clone() }
                }
            }

            // Blog
            section { id: anchor::BLOG, class: "page-section",
                div { class: "container",
                    h2 { class: "section-title", {tr(language, Text::BlogTitle)} }
                    div { class: "card-grid",
                        for post in site.blog.iter() {
                            div { key: "{post.title}", class: "card",
                                h3 { class: "card-title", "{post.title}" }
                                p { class: "card-meta", style: "margin: var(--space-2) 0;", "{post.summary}" }
                                if let Some(link) = post.link.clone() {
                                    ReadMore { url: link }
                                }
                            }
                        }
                    }
                }
            }

            // CV downloads
            section { id: anchor::CV, class: "page-section alt",
                div { class: "container",
                    h2 { class: "section-title", {tr(language, Text::CvTitle)} }
                    div { class: "button-row",
                        for document in site.documents.iter() {
                            DocumentButton { key: "{document.path}", label: document.label.clone(), path: document.path.clone() }
                        }
                    }
                }
            }

            // Contact
            section { id: anchor::CONTACT, class: "page-section contact",
                div { class: "container",
                    h2 { class: "section-title", {tr(language, Text::ContactTitle)} }
                    p { "{site.contact}" }
                    button {
                        class: "btn btn-light",
                        onclick: move |_| state.dispatch(contact_mail.clone(), Origin::Page),
                        {tr(language, Text::ContactMe)}
                    }
                }
            }
        }

        footer { class: "site-footer", "© {site.owner.name}" }
    }
}

#[derive(Clone, PartialEq, Props)]
struct HeroLinkProps {
    kind: LinkKind,
    label: String,
    url: String,
}

#[component]
fn HeroLink(props: HeroLinkProps) -> Element {
    let mut state = use_context::<PageState>();
    let url = props.url.clone();

    let icon = match props.kind {
        LinkKind::GitHub => "⌥",
        LinkKind::LinkedIn => "in",
        LinkKind::Other => "↗",
    };

    rsx! {
        button {
            class: "btn btn-light",
            onclick: move |_| state.dispatch(Action::OpenExternal(url.clone()), Origin::Page),
            span { "{icon}" }
            "{props.label}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ReadMoreProps {
    url: String,
}

#[component]
fn ReadMore(props: ReadMoreProps) -> Element {
    let mut state = use_context::<PageState>();
    let language = state.language();
    let url = props.url.clone();

    rsx! {
        a {
            href: "{props.url}",
            onclick: move |evt| {
                evt.prevent_default();
                state.dispatch(Action::OpenExternal(url.clone()), Origin::Page);
            },
            {tr(language, Text::ReadMore)}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct DocumentButtonProps {
    label: String,
    path: String,
}

// a plain download link; the browser saves the file instead of navigating
#[component]
fn DocumentButton(props: DocumentButtonProps) -> Element {
    rsx! {
        a {
            class: "btn",
            href: "{props.path}",
            download: "",
            "⬇ {props.label}"
        }
    }
}
