use crate::preference::Language;

// interface strings; page content itself is not translated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Text {
    AboutTitle,
    ExperienceTitle,
    ProjectsTitle,
    SkillsTitle,
    LanguagesStrengthsTitle,
    LanguagesTitle,
    StrengthsTitle,
    ReferencesTitle,
    BlogTitle,
    ReadMore,
    CvTitle,
    ContactTitle,
    ContactMe,
    Email,
    OpenMenu,
    CloseMenu,
    BackToTop,
    ThemeToLight,
    ThemeToDark,
    SwitchLanguage,
    PaletteHint,
    PalettePlaceholder,
    PaletteEmpty,
    GoTo,
    ToggleThemeCommand,
    ToggleLanguageCommand,
    SendEmailCommand,
    DownloadCommand,
    OpenCommand,
}

pub fn tr(language: Language, text: Text) -> &'static str {
    match language {
        Language::En => english(text),
        Language::De => german(text),
    }
}

fn english(text: Text) -> &'static str {
    match text {
        Text::AboutTitle => "About Me",
        Text::ExperienceTitle => "Experience",
        Text::ProjectsTitle => "Key Projects",
        Text::SkillsTitle => "Technical Skills",
        Text::LanguagesStrengthsTitle => "Languages & Strengths",
        Text::LanguagesTitle => "Languages",
        Text::StrengthsTitle => "Strengths",
        Text::ReferencesTitle => "References",
        Text::BlogTitle => "Blog & Insights",
        Text::ReadMore => "Read More →",
        Text::CvTitle => "Download My CV",
        Text::ContactTitle => "Get In Touch",
        Text::ContactMe => "Contact Me",
        Text::Email => "Email",
        Text::OpenMenu => "Open menu",
        Text::CloseMenu => "Close menu",
        Text::BackToTop => "Back to top",
        Text::ThemeToLight => "Light mode",
        Text::ThemeToDark => "Dark mode",
        Text::SwitchLanguage => "Deutsch",
        Text::PaletteHint => "Quick actions",
        Text::PalettePlaceholder => "Type a command or search…",
        Text::PaletteEmpty => "No matching commands",
        Text::GoTo => "Go to",
        Text::ToggleThemeCommand => "Toggle theme",
        Text::ToggleLanguageCommand => "Toggle language",
        Text::SendEmailCommand => "Send an email",
        Text::DownloadCommand => "Download",
        Text::OpenCommand => "Open",
    }
}

fn german(text: Text) -> &'static str {
    match text {
        Text::AboutTitle => "Über mich",
        Text::ExperienceTitle => "Berufserfahrung",
        Text::ProjectsTitle => "Wichtige Projekte",
        Text::SkillsTitle => "Technische Kenntnisse",
        Text::LanguagesStrengthsTitle => "Sprachen & Stärken",
        Text::LanguagesTitle => "Sprachen",
        Text::StrengthsTitle => "Stärken",
        Text::ReferencesTitle => "Referenzen",
        Text::BlogTitle => "Blog & Einblicke",
        Text::ReadMore => "Weiterlesen →",
        Text::CvTitle => "Lebenslauf herunterladen",
        Text::ContactTitle => "Kontakt aufnehmen",
        Text::ContactMe => "Kontakt",
        Text::Email => "E-Mail",
        Text::OpenMenu => "Menü öffnen",
        Text::CloseMenu => "Menü schließen",
        Text::BackToTop => "Nach oben",
        Text::ThemeToLight => "Heller Modus",
        Text::ThemeToDark => "Dunkler Modus",
        Text::SwitchLanguage => "English",
        Text::PaletteHint => "Schnellaktionen",
        Text::PalettePlaceholder => "Befehl eingeben oder suchen…",
        Text::PaletteEmpty => "Keine passenden Befehle",
        Text::GoTo => "Gehe zu",
        Text::ToggleThemeCommand => "Design wechseln",
        Text::ToggleLanguageCommand => "Sprache wechseln",
        Text::SendEmailCommand => "E-Mail senden",
        Text::DownloadCommand => "Herunterladen",
        Text::OpenCommand => "Öffnen",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::{MemoryBackend, PreferenceStore};

    const SAMPLE: [Text; 4] = [Text::AboutTitle, Text::ContactTitle, Text::CvTitle, Text::GoTo];

    fn render(language: Language) -> Vec<&'static str> {
        SAMPLE.iter().map(|t| tr(language, *t)).collect()
    }

    #[test]
    fn locales_differ() {
        assert_ne!(render(Language::En), render(Language::De));
    }

    #[test]
    fn toggling_twice_restores_strings() {
        let mut store = PreferenceStore::load(MemoryBackend::new(), false);
        let before = render(store.language());

        store.toggle_language();
        assert_ne!(render(store.language()), before);

        store.toggle_language();
        assert_eq!(render(store.language()), before);
    }
}
