use std::{cell::RefCell, collections::HashMap, fmt};

use tracing::{Level, debug, instrument};

// storage keys
//
// these are the literal local storage keys, with no prefix, so that the stored
// layout is exactly theme -> light|dark and lang -> en|de
pub const THEME_KEY: &str = "theme";
pub const LANGUAGE_KEY: &str = "lang";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreferenceKind {
    Theme,
    Language,
}

impl PreferenceKind {
    pub fn key(self) -> &'static str {
        match self {
            PreferenceKind::Theme => THEME_KEY,
            PreferenceKind::Language => LANGUAGE_KEY,
        }
    }
}

// the current value of both preferences, handed to subscribers after every write
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub language: Language,
}

// persistent key/value storage
//
// reads that fail for any reason are reported as None, and writes are
// best-effort; the browser implementation lives in the webapp
pub trait PreferenceBackend {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);
}

// in-memory backend, used off the browser and in tests
#[derive(Debug, Default)]
pub struct MemoryBackend {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(items: &[(&str, &str)]) -> Self {
        let backend = Self::new();
        for (key, value) in items {
            backend.set(key, value);
        }
        backend
    }
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}

impl<B: PreferenceBackend + ?Sized> PreferenceBackend for std::rc::Rc<B> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(PreferenceKind, &Preferences)>;

// PreferenceStore
//
// the single writer for theme and language.  every accepted write goes to the
// backend first and then to the subscribers, synchronously and in registration
// order, so the presentation attribute is updated before set() returns
pub struct PreferenceStore<B: PreferenceBackend> {
    backend: B,
    current: Preferences,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    // load both preferences, falling back to the system hint for the theme
    pub fn load(backend: B, system_prefers_dark: bool) -> Self {
        let current = Preferences {
            theme: initial_theme(&backend, system_prefers_dark),
            language: initial_language(&backend),
        };

        debug!(theme = %current.theme, language = %current.language, "loaded preferences");

        PreferenceStore {
            backend,
            current,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get_initial(&self, kind: PreferenceKind, system_prefers_dark: bool) -> &'static str {
        match kind {
            PreferenceKind::Theme => initial_theme(&self.backend, system_prefers_dark).as_str(),
            PreferenceKind::Language => initial_language(&self.backend).as_str(),
        }
    }

    pub fn current(&self) -> Preferences {
        self.current
    }

    pub fn theme(&self) -> Theme {
        self.current.theme
    }

    pub fn language(&self) -> Language {
        self.current.language
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // returns false (and changes nothing) when value is not a member of kind
    #[instrument(level=Level::DEBUG, skip(self))]
    pub fn set(&mut self, kind: PreferenceKind, value: &str) -> bool {
        match kind {
            PreferenceKind::Theme => match Theme::parse(value) {
                Some(theme) => self.current.theme = theme,
                None => {
                    debug!("ignoring invalid theme");
                    return false;
                }
            },
            PreferenceKind::Language => match Language::parse(value) {
                Some(language) => self.current.language = language,
                None => {
                    debug!("ignoring invalid language");
                    return false;
                }
            },
        }

        self.backend.set(kind.key(), value);
        self.notify(kind);
        true
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.set(PreferenceKind::Theme, theme.as_str());
    }

    pub fn set_language(&mut self, language: Language) {
        self.set(PreferenceKind::Language, language.as_str());
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.current.theme.toggled());
        self.current.theme
    }

    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.current.language.toggled());
        self.current.language
    }

    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(PreferenceKind, &Preferences) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    // push the current state to every subscriber, e.g. to paint the initial theme
    pub fn replay(&mut self) {
        self.notify(PreferenceKind::Theme);
        self.notify(PreferenceKind::Language);
    }

    fn notify(&mut self, kind: PreferenceKind) {
        let current = self.current;
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(kind, &current);
        }
    }
}

impl<B: PreferenceBackend + fmt::Debug> fmt::Debug for PreferenceStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("backend", &self.backend)
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn initial_theme<B: PreferenceBackend + ?Sized>(backend: &B, system_prefers_dark: bool) -> Theme {
    match backend.get(THEME_KEY).as_deref().and_then(Theme::parse) {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

fn initial_language<B: PreferenceBackend + ?Sized>(backend: &B) -> Language {
    backend
        .get(LANGUAGE_KEY)
        .as_deref()
        .and_then(Language::parse)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn system_dark_used_without_persisted_theme() {
        let store = PreferenceStore::load(MemoryBackend::new(), true);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.get_initial(PreferenceKind::Theme, true), "dark");
    }

    #[test]
    fn persisted_theme_overrides_system_hint() {
        let backend = Rc::new(MemoryBackend::new());

        let mut store = PreferenceStore::load(backend.clone(), true);
        store.set_theme(Theme::Light);

        // reload with the system still asking for dark
        let reloaded = PreferenceStore::load(backend.clone(), true);
        assert_eq!(reloaded.theme(), Theme::Light);
        assert_eq!(backend.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn malformed_values_are_treated_as_absent() {
        let backend = MemoryBackend::with(&[(THEME_KEY, "purple"), (LANGUAGE_KEY, "fr")]);
        let store = PreferenceStore::load(backend, false);

        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.language(), Language::En);
    }

    #[test]
    fn invalid_set_is_ignored() {
        let backend = Rc::new(MemoryBackend::new());
        let mut store = PreferenceStore::load(backend.clone(), false);

        let notified = Rc::new(RefCell::new(0));
        let counter = notified.clone();
        store.subscribe(move |_, _| *counter.borrow_mut() += 1);

        assert!(!store.set(PreferenceKind::Language, "dark"));
        assert!(!store.set(PreferenceKind::Theme, "DARK"));

        assert_eq!(store.current(), Preferences::default());
        assert_eq!(backend.get(THEME_KEY), None);
        assert_eq!(*notified.borrow(), 0);
    }

    #[test]
    fn subscribers_see_each_write_before_set_returns() {
        let mut store = PreferenceStore::load(MemoryBackend::new(), false);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let id = store.subscribe(move |kind, prefs| log.borrow_mut().push((kind, *prefs)));

        store.toggle_theme();
        assert_eq!(seen.borrow().last().map(|(_, p)| p.theme), Some(Theme::Dark));

        store.toggle_language();
        assert_eq!(
            seen.borrow().last().copied(),
            Some((
                PreferenceKind::Language,
                Preferences {
                    theme: Theme::Dark,
                    language: Language::De
                }
            ))
        );

        store.unsubscribe(id);
        store.toggle_theme();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn last_write_wins() {
        let backend = Rc::new(MemoryBackend::new());
        let mut store = PreferenceStore::load(backend.clone(), false);

        store.set(PreferenceKind::Theme, "dark");
        store.set(PreferenceKind::Theme, "light");
        store.set(PreferenceKind::Theme, "dark");

        assert_eq!(PreferenceStore::load(backend, false).theme(), Theme::Dark);
    }

    #[test]
    fn language_toggle_round_trip() {
        let mut store = PreferenceStore::load(MemoryBackend::new(), false);
        let start = store.language();

        store.toggle_language();
        assert_ne!(store.language(), start);
        store.toggle_language();
        assert_eq!(store.language(), start);
    }
}
