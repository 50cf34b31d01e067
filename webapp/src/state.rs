use dioxus::prelude::*;
use tracing::{debug, error, info};

use common::{
    Action, Chord, CommandPalette, Dispatcher, Language, Origin, PreferenceStore, ScrollMetrics,
    SectionTracker, Site, drawer::CloseReason, palette::KeyOutcome,
};

use crate::browser::{
    dom::{self, BodyScrollLock, WebNavigator},
    storage::LocalStorageBackend,
};

pub type WebPreferences = PreferenceStore<LocalStorageBackend>;
pub type WebDispatcher = Dispatcher<WebNavigator, BodyScrollLock>;

// PageState
//
// every piece of mutable page state, provided once through context by App.
// the tracker is not reactive (it changes on every scroll event); only the
// active id it produces is
#[derive(Clone, Copy)]
pub struct PageState {
    pub site: Signal<Site>,
    pub preferences: Signal<WebPreferences>,
    pub dispatcher: Signal<WebDispatcher>,
    pub active: Signal<Option<String>>,
    pub scroll: Signal<ScrollMetrics>,
    tracker: CopyValue<SectionTracker>,
}

impl PageState {
    pub fn new() -> Self {
        let site = match Site::builtin() {
            Ok(site) => site,
            Err(err) => {
                error!("failed to load site content: {err}");
                panic!("failed to load site content: {err}")
            }
        };

        let mut preferences = PreferenceStore::load(LocalStorageBackend, dom::prefers_dark());
        preferences.subscribe(|_, prefs| dom::apply_preferences(prefs));
        preferences.replay();

        let platform = dom::platform();
        let palette = CommandPalette::new(site.commands(preferences.language()));
        let dispatcher = Dispatcher::new(WebNavigator, BodyScrollLock, palette, platform);
        let tracker = SectionTracker::new(site.section_ids());

        info!(
            sections = tracker.sections().len(),
            theme = %preferences.theme(),
            language = %preferences.language(),
            "page state ready"
        );

        PageState {
            site: Signal::new(site),
            preferences: Signal::new(preferences),
            dispatcher: Signal::new(dispatcher),
            active: Signal::new(None),
            scroll: Signal::new(ScrollMetrics::default()),
            tracker: CopyValue::new(tracker),
        }
    }

    pub fn language(&self) -> Language {
        self.preferences.read().language()
    }

    // only preference toggles write the preference store, so navigation and
    // palette input do not re-render the readers of the language or theme
    pub fn dispatch(&mut self, action: Action, origin: Origin) {
        if action.is_navigation() {
            self.dispatcher.write().navigate(&action, origin);
            return;
        }

        let before = self.preferences.peek().language();
        {
            let mut preferences = self.preferences.write();
            self.dispatcher
                .write()
                .dispatch(&action, origin, &mut *preferences);
        }
        self.refresh_commands(before);
    }

    // returns true if the key was consumed
    pub fn handle_key(&mut self, chord: &Chord) -> bool {
        {
            let dispatcher = self.dispatcher.peek();
            if !dispatcher.palette().wants_key(chord, dispatcher.platform()) {
                return false;
            }
        }

        let outcome = {
            let mut dispatcher = self.dispatcher.write();
            let platform = dispatcher.platform();
            dispatcher.palette_mut().handle_key(chord, platform)
        };

        match outcome {
            KeyOutcome::Ignored => false,
            KeyOutcome::Handled => true,
            KeyOutcome::Execute(action) => {
                self.dispatch(action, Origin::Palette);
                true
            }
        }
    }

    pub fn select_command(&mut self, index: usize) {
        let action = self.dispatcher.write().palette_mut().select(index);
        if let Some(action) = action {
            self.dispatch(action, Origin::Palette);
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.dispatcher.write().palette_mut().set_query(query);
    }

    pub fn open_palette(&mut self) {
        self.dispatcher.write().palette_mut().open();
    }

    pub fn close_palette(&mut self) {
        self.dispatcher.write().palette_mut().close();
    }

    pub fn toggle_drawer(&mut self) {
        self.dispatcher.write().drawer_mut().toggle();
    }

    pub fn close_drawer(&mut self, reason: CloseReason) {
        self.dispatcher.write().drawer_mut().close(reason);
    }

    pub fn scroll_to_top(&mut self) {
        self.dispatcher.write().scroll_to_top();
    }

    // re-measure the window and feed the section boxes to the tracker
    pub fn refresh_scroll(&mut self) {
        if let Some(metrics) = dom::scroll_metrics() {
            if *self.scroll.peek() != metrics {
                self.scroll.set(metrics);
            }
        }

        let (bounds, viewport) = dom::section_bounds(self.tracker.read().sections());
        let active = self
            .tracker
            .write()
            .recompute(&bounds, viewport)
            .map(str::to_owned);

        if *self.active.peek() != active {
            debug!(?active, "active section changed");
            self.active.set(active);
        }
    }

    // palette labels are localized, so they follow the language preference
    fn refresh_commands(&mut self, before: Language) {
        let language = self.preferences.peek().language();
        if language != before {
            let commands = self.site.peek().commands(language);
            self.dispatcher.write().palette_mut().set_commands(commands);
        }
    }
}
