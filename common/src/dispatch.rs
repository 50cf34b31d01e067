use tracing::{Level, debug, instrument};

use crate::{
    drawer::{CloseReason, Drawer, ScrollLock},
    palette::{Chord, CommandPalette, KeyOutcome, Platform},
    preference::{PreferenceBackend, PreferenceStore},
};

// everything a user can do on the page
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    ScrollTo(String),
    ToggleTheme,
    ToggleLanguage,
    OpenExternal(String),
    ComposeMail { to: String, subject: String },
    OpenDocument(String),
}

impl Action {
    pub fn is_navigation(&self) -> bool {
        !matches!(self, Action::ToggleTheme | Action::ToggleLanguage)
    }
}

// where an action was triggered from; only used for logging, every origin
// behaves the same
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    TopBar,
    Drawer,
    Palette,
    Page,
}

// browser-level side effects
//
// all of these are fire-and-forget, the dispatcher never looks at whether the
// navigation actually happened
pub trait Navigator {
    // smooth scroll so the top of the section meets the top of the viewport
    fn scroll_to(&self, section: &str);

    fn scroll_to_top(&self);

    // new tab/window
    fn open_external(&self, url: &str);

    fn compose_mail(&self, href: &str);

    fn open_document(&self, path: &str);
}

pub fn mailto(to: &str, subject: &str) -> String {
    if subject.is_empty() {
        format!("mailto:{to}")
    } else {
        format!("mailto:{to}?subject={}", urlencoding::encode(subject))
    }
}

// Dispatcher
//
// owns the drawer and the palette, so that closing both after a navigation is
// not something each call site has to remember
pub struct Dispatcher<N: Navigator, L: ScrollLock + Clone> {
    navigator: N,
    drawer: Drawer<L>,
    palette: CommandPalette,
    platform: Platform,
}

impl<N: Navigator, L: ScrollLock + Clone> Dispatcher<N, L> {
    pub fn new(navigator: N, lock: L, palette: CommandPalette, platform: Platform) -> Self {
        Dispatcher {
            navigator,
            drawer: Drawer::new(lock),
            palette,
            platform,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn drawer(&self) -> &Drawer<L> {
        &self.drawer
    }

    pub fn drawer_mut(&mut self) -> &mut Drawer<L> {
        &mut self.drawer
    }

    pub fn palette(&self) -> &CommandPalette {
        &self.palette
    }

    pub fn palette_mut(&mut self) -> &mut CommandPalette {
        &mut self.palette
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    #[instrument(level=Level::DEBUG, skip(self, preferences))]
    pub fn dispatch<B: PreferenceBackend>(
        &mut self,
        action: &Action,
        origin: Origin,
        preferences: &mut PreferenceStore<B>,
    ) {
        if !self.navigate(action, origin) {
            apply_preference(action, preferences);
        }
    }

    // the navigation half of dispatch; preference toggles are left alone and
    // reported as false, so callers that only hold the dispatcher can tell
    // when the preference store is needed
    pub fn navigate(&mut self, action: &Action, origin: Origin) -> bool {
        match action {
            Action::ScrollTo(section) => self.navigator.scroll_to(section),
            Action::OpenExternal(url) => self.navigator.open_external(url),
            Action::ComposeMail { to, subject } => {
                self.navigator.compose_mail(&mailto(to, subject))
            }
            Action::OpenDocument(path) => self.navigator.open_document(path),
            Action::ToggleTheme | Action::ToggleLanguage => return false,
        }

        debug!(?origin, "navigated");
        self.drawer.close(CloseReason::Navigation);
        self.palette.close();
        true
    }

    pub fn scroll_to_top(&mut self) {
        self.navigator.scroll_to_top();
        self.drawer.close(CloseReason::Navigation);
    }

    // feed a global keydown through the palette; returns true if the event
    // should not reach the browser
    pub fn handle_key<B: PreferenceBackend>(
        &mut self,
        chord: &Chord,
        preferences: &mut PreferenceStore<B>,
    ) -> bool {
        match self.palette.handle_key(chord, self.platform) {
            KeyOutcome::Ignored => false,
            KeyOutcome::Handled => true,
            KeyOutcome::Execute(action) => {
                debug!(?action, "executing palette action");
                self.dispatch(&action, Origin::Palette, preferences);
                true
            }
        }
    }

    // the index-th row of the palette's filtered list, e.g. from a click
    pub fn select<B: PreferenceBackend>(
        &mut self,
        index: usize,
        preferences: &mut PreferenceStore<B>,
    ) -> bool {
        match self.palette.select(index) {
            Some(action) => {
                self.dispatch(&action, Origin::Palette, preferences);
                true
            }
            None => false,
        }
    }
}

// the toggle half of dispatch; returns false for navigation actions
pub fn apply_preference<B: PreferenceBackend>(
    action: &Action,
    preferences: &mut PreferenceStore<B>,
) -> bool {
    match action {
        Action::ToggleTheme => {
            preferences.toggle_theme();
            true
        }
        Action::ToggleLanguage => {
            preferences.toggle_language();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        drawer::tests::FlagLock,
        palette::Command,
        preference::{MemoryBackend, Theme},
    };

    #[derive(Debug, Default)]
    pub(crate) struct RecordingNavigator {
        pub(crate) calls: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn scroll_to(&self, section: &str) {
            self.calls.borrow_mut().push(format!("scroll:{section}"));
        }

        fn scroll_to_top(&self) {
            self.calls.borrow_mut().push("top".into());
        }

        fn open_external(&self, url: &str) {
            self.calls.borrow_mut().push(format!("open:{url}"));
        }

        fn compose_mail(&self, href: &str) {
            self.calls.borrow_mut().push(href.to_owned());
        }

        fn open_document(&self, path: &str) {
            self.calls.borrow_mut().push(format!("doc:{path}"));
        }
    }

    fn commands() -> Vec<Command> {
        vec![
            Command::new("Go to Home", Action::ScrollTo("home".into())),
            Command::new("Go to Contact", Action::ScrollTo("contact".into())),
            Command::new("Toggle theme", Action::ToggleTheme),
        ]
    }

    fn setup() -> (
        Dispatcher<RecordingNavigator, FlagLock>,
        FlagLock,
        PreferenceStore<MemoryBackend>,
    ) {
        let lock = FlagLock::default();
        let dispatcher = Dispatcher::new(
            RecordingNavigator::default(),
            lock.clone(),
            CommandPalette::new(commands()),
            Platform::Other,
        );
        (dispatcher, lock, PreferenceStore::load(MemoryBackend::new(), false))
    }

    #[test]
    fn navigating_from_drawer_closes_it_and_unlocks() {
        let (mut dispatcher, lock, mut prefs) = setup();

        dispatcher.drawer_mut().open();
        assert!(lock.locked());

        dispatcher.dispatch(&Action::ScrollTo("projects".into()), Origin::Drawer, &mut prefs);

        assert!(!dispatcher.drawer().is_open());
        assert!(!lock.locked());
        assert_eq!(*dispatcher.navigator().calls.borrow(), vec!["scroll:projects"]);
    }

    #[test]
    fn every_origin_scrolls_the_same_way() {
        let (mut dispatcher, _, mut prefs) = setup();
        let action = Action::ScrollTo("contact".into());

        for origin in [Origin::TopBar, Origin::Drawer, Origin::Palette, Origin::Page] {
            dispatcher.dispatch(&action, origin, &mut prefs);
        }

        assert_eq!(dispatcher.navigator().calls.borrow().len(), 4);
        assert!(dispatcher.navigator().calls.borrow().iter().all(|c| c == "scroll:contact"));
    }

    #[test]
    fn toggles_leave_drawer_open() {
        let (mut dispatcher, lock, mut prefs) = setup();

        dispatcher.drawer_mut().open();
        dispatcher.dispatch(&Action::ToggleTheme, Origin::Drawer, &mut prefs);

        assert_eq!(prefs.theme(), Theme::Dark);
        assert!(dispatcher.drawer().is_open());
        assert!(lock.locked());
        assert!(dispatcher.navigator().calls.borrow().is_empty());
    }

    #[test]
    fn palette_enter_executes_and_closes() {
        let (mut dispatcher, _, mut prefs) = setup();

        assert!(dispatcher.handle_key(&Chord::ctrl("k"), &mut prefs));
        assert!(dispatcher.palette().is_open());

        dispatcher.palette_mut().set_query("cont");
        assert!(dispatcher.handle_key(&Chord::key("Enter"), &mut prefs));

        assert!(!dispatcher.palette().is_open());
        assert_eq!(*dispatcher.navigator().calls.borrow(), vec!["scroll:contact"]);
    }

    #[test]
    fn palette_theme_toggle_closes_palette() {
        let (mut dispatcher, _, mut prefs) = setup();

        dispatcher.palette_mut().open();
        dispatcher.palette_mut().set_query("theme");
        assert!(dispatcher.select(0, &mut prefs));

        assert!(!dispatcher.palette().is_open());
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn unrelated_keys_pass_through() {
        let (mut dispatcher, _, mut prefs) = setup();
        assert!(!dispatcher.handle_key(&Chord::key("a"), &mut prefs));
        assert!(!dispatcher.handle_key(&Chord::key("Escape"), &mut prefs));
    }

    #[test]
    fn navigate_skips_toggles() {
        let (mut dispatcher, lock, mut prefs) = setup();

        dispatcher.drawer_mut().open();
        assert!(!dispatcher.navigate(&Action::ToggleLanguage, Origin::Drawer));
        assert!(dispatcher.drawer().is_open());
        assert!(lock.locked());

        assert!(dispatcher.navigate(&Action::ScrollTo("cv".into()), Origin::Drawer));
        assert!(!dispatcher.drawer().is_open());
        assert!(!lock.locked());

        assert!(!apply_preference(&Action::ScrollTo("cv".into()), &mut prefs));
        assert!(apply_preference(&Action::ToggleTheme, &mut prefs));
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn mail_and_external_links() {
        let (mut dispatcher, _, mut prefs) = setup();

        dispatcher.dispatch(
            &Action::ComposeMail {
                to: "me@example.com".into(),
                subject: "Hello there".into(),
            },
            Origin::Page,
            &mut prefs,
        );
        dispatcher.dispatch(&Action::OpenExternal("https://github.com".into()), Origin::Page, &mut prefs);
        dispatcher.dispatch(&Action::OpenDocument("/cv.pdf".into()), Origin::Page, &mut prefs);

        assert_eq!(
            *dispatcher.navigator().calls.borrow(),
            vec![
                "mailto:me@example.com?subject=Hello%20there",
                "open:https://github.com",
                "doc:/cv.pdf",
            ]
        );
    }

    #[test]
    fn mailto_without_subject() {
        assert_eq!(mailto("a@b.c", ""), "mailto:a@b.c");
        assert_eq!(mailto("a@b.c", "Hi & bye"), "mailto:a@b.c?subject=Hi%20%26%20bye");
    }

    #[test]
    fn mailto_subject_encodes_utf8_and_reserved() {
        assert_eq!(
            mailto("a@b.c", "Grüße?a=b"),
            "mailto:a@b.c?subject=Gr%C3%BC%C3%9Fe%3Fa%3Db"
        );
        assert_eq!(mailto("a@b.c", "v1.0_x~y-z"), "mailto:a@b.c?subject=v1.0_x~y-z");
    }
}
