use std::collections::HashSet;

use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::{
    dispatch::Action,
    i18n::{Text, tr},
    palette::Command,
    preference::Language,
};

// section anchors end up as element ids and in #fragments
pub const ANCHOR_REGEX: &str = r"^[a-z][a-z0-9-]*$";

pub const SITE_TOML: &str = include_str!("../site.toml");

// element ids of the sections the page renders
pub mod anchor {
    pub const HOME: &str = "home";
    pub const ABOUT: &str = "about";
    pub const EXPERIENCE: &str = "experience";
    pub const PROJECTS: &str = "projects";
    pub const SKILLS: &str = "skills";
    pub const STRENGTHS: &str = "strengths";
    pub const REFERENCES: &str = "references";
    pub const BLOG: &str = "blog";
    pub const CV: &str = "cv";
    pub const CONTACT: &str = "contact";
}

// in page order; every nav id must be one of these
pub const PAGE_SECTIONS: [&str; 10] = [
    anchor::HOME,
    anchor::ABOUT,
    anchor::EXPERIENCE,
    anchor::PROJECTS,
    anchor::SKILLS,
    anchor::STRENGTHS,
    anchor::REFERENCES,
    anchor::BLOG,
    anchor::CV,
    anchor::CONTACT,
];

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Localized {
    pub en: String,
    pub de: String,
}

impl Localized {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::De => &self.de,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NavItem {
    pub id: String,
    pub label: Localized,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Owner {
    pub name: String,
    pub tagline: String,
    pub email: String,
    #[serde(default)]
    pub mail_subject: String,
    pub photo: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub enum LinkKind {
    GitHub,
    LinkedIn,
    Other,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ProfileLink {
    pub kind: LinkKind,
    pub label: String,
    pub url: String,
}

// experience, project, education and certification entries all share this shape
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ContentCard {
    pub title: String,
    pub organization: String,
    pub dates: String,
    #[serde(default)]
    pub bullets: Vec<String>,
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub contact: Option<String>,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BlogPost {
    pub title: String,
    pub summary: String,
    pub link: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CvDocument {
    pub label: String,
    pub path: String,
}

// site content
//
// static, read-only data for every section of the page
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Site {
    pub owner: Owner,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
    pub nav: Vec<NavItem>,
    pub about: String,
    #[serde(default)]
    pub experience: Vec<ContentCard>,
    #[serde(default)]
    pub projects: Vec<ContentCard>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub blog: Vec<BlogPost>,
    #[serde(default)]
    pub documents: Vec<CvDocument>,
    pub contact: String,
}

// the content lives under a [site] table so the file can grow other tables
#[derive(Debug, Deserialize, Serialize)]
struct TomlSiteFile {
    site: Site,
}

impl Site {
    pub fn builtin() -> Result<Self> {
        Site::from_toml(SITE_TOML)
    }

    #[instrument(level=Level::DEBUG, skip(doc))]
    pub fn from_toml(doc: &str) -> Result<Self> {
        debug!("parsing site file");

        let data: TomlSiteFile = toml::from_str(doc)
            .map_err(|err| anyhow::Error::msg(format!("failed to parse site file: {err}")))?;

        data.site.validate()?;

        Ok(data.site)
    }

    pub fn validate(&self) -> Result<()> {
        let anchor = Regex::new(ANCHOR_REGEX)?;
        let mut seen = HashSet::new();

        for item in self.nav.iter() {
            if !anchor.is_match(&item.id) {
                return Err(anyhow::Error::msg(format!(
                    "invalid section id \"{}\"",
                    item.id
                )));
            }

            if !PAGE_SECTIONS.contains(&item.id.as_str()) {
                return Err(anyhow::Error::msg(format!(
                    "no page section for nav id \"{}\"",
                    item.id
                )));
            }

            if !seen.insert(item.id.as_str()) {
                return Err(anyhow::Error::msg(format!(
                    "duplicate section id \"{}\"",
                    item.id
                )));
            }
        }

        if self.owner.email.trim().is_empty() {
            return Err(anyhow::Error::msg("owner email is empty"));
        }

        Ok(())
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.nav.iter().map(|n| n.id.clone()).collect()
    }

    pub fn link(&self, kind: LinkKind) -> Option<&ProfileLink> {
        self.links.iter().find(|l| l.kind == kind)
    }

    pub fn mail_action(&self) -> Action {
        Action::ComposeMail {
            to: self.owner.email.clone(),
            subject: self.owner.mail_subject.clone(),
        }
    }

    // every palette entry, in display order
    pub fn commands(&self, language: Language) -> Vec<Command> {
        let mut commands: Vec<Command> = self
            .nav
            .iter()
            .map(|item| {
                Command::new(
                    format!("{} {}", tr(language, Text::GoTo), item.label.get(language)),
                    Action::ScrollTo(item.id.clone()),
                )
                .keywords([item.id.clone(), item.label.en.clone(), item.label.de.clone()])
            })
            .collect();

        commands.push(
            Command::new(tr(language, Text::ToggleThemeCommand), Action::ToggleTheme)
                .keywords(["dark", "light", "theme"]),
        );
        commands.push(
            Command::new(tr(language, Text::ToggleLanguageCommand), Action::ToggleLanguage)
                .keywords(["language", "english", "deutsch"]),
        );

        for link in self.links.iter() {
            commands.push(
                Command::new(
                    format!("{} {}", tr(language, Text::OpenCommand), link.label),
                    Action::OpenExternal(link.url.clone()),
                )
                .keywords([link.url.clone()]),
            );
        }

        commands.push(
            Command::new(tr(language, Text::SendEmailCommand), self.mail_action())
                .keywords(["mail", "contact", self.owner.email.as_str()]),
        );

        for document in self.documents.iter() {
            commands.push(
                Command::new(
                    format!("{} {}", tr(language, Text::DownloadCommand), document.label),
                    Action::OpenDocument(document.path.clone()),
                )
                .keywords(["cv", "resume", "pdf"]),
            );
        }

        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::filter;

    const MINIMAL: &str = r#"
[site]
about = "about"
contact = "contact"

[site.owner]
name = "Someone"
tagline = "Engineer"
email = "someone@example.com"

[[site.nav]]
id = "home"
label = { en = "Home", de = "Start" }

[[site.nav]]
id = "contact"
label = { en = "Contact", de = "Kontakt" }
"#;

    #[test]
    fn builtin_site_parses() {
        let site = Site::builtin().expect("embedded site file is valid");

        assert_eq!(site.owner.name, "Suprabhat");
        assert_eq!(site.experience.len(), 4);
        assert_eq!(site.projects.len(), 4);
        assert_eq!(site.skills.len(), 6);
        assert_eq!(site.testimonials.len(), 2);
        assert_eq!(site.documents.len(), 3);
        assert_eq!(site.section_ids().first().map(String::as_str), Some("home"));
        assert!(site.link(LinkKind::GitHub).is_some());
    }

    #[test]
    fn optional_lists_default_to_empty() {
        let site = Site::from_toml(MINIMAL).expect("minimal site parses");

        assert!(site.experience.is_empty());
        assert!(site.links.is_empty());
        assert_eq!(site.owner.mail_subject, "");
        assert_eq!(site.section_ids(), vec!["home", "contact"]);
    }

    #[test]
    fn rejects_bad_anchor() {
        let doc = MINIMAL.replace("id = \"contact\"", "id = \"Contact Me\"");
        assert!(Site::from_toml(&doc).is_err());
    }

    #[test]
    fn rejects_duplicate_anchor() {
        let doc = MINIMAL.replace("id = \"contact\"", "id = \"home\"");
        let err = Site::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn builtin_nav_targets_rendered_sections() {
        let site = Site::builtin().expect("embedded site file is valid");

        assert_eq!(
            site.section_ids(),
            vec![
                anchor::HOME,
                anchor::ABOUT,
                anchor::EXPERIENCE,
                anchor::PROJECTS,
                anchor::SKILLS,
                anchor::REFERENCES,
                anchor::BLOG,
                anchor::CV,
                anchor::CONTACT,
            ]
        );
    }

    #[test]
    fn rejects_nav_without_section() {
        let doc = MINIMAL.replace("id = \"contact\"", "id = \"gallery\"");
        let err = Site::from_toml(&doc).unwrap_err();
        assert!(err.to_string().contains("no page section"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(Site::from_toml("[site").is_err());
    }

    #[test]
    fn commands_follow_language() {
        let site = Site::from_toml(MINIMAL).expect("minimal site parses");

        let english = site.commands(Language::En);
        let german = site.commands(Language::De);

        assert_eq!(english[0].label, "Go to Home");
        assert_eq!(german[0].label, "Gehe zu Start");
        assert_eq!(english.len(), german.len());
    }

    #[test]
    fn contact_command_found_by_substring() {
        let site = Site::from_toml(MINIMAL).expect("minimal site parses");
        let commands = site.commands(Language::En);

        let found = filter(&commands, "go to cont");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].action, Action::ScrollTo("contact".into()));
    }
}
