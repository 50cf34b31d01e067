use tracing::debug;

use crate::dispatch::Action;

// platform for the shortcut modifier; apple keyboards use the command key
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Platform {
    Apple,
    #[default]
    Other,
}

impl Platform {
    // from navigator.platform or the user agent string
    pub fn detect(hint: &str) -> Self {
        let hint = hint.to_lowercase();
        if ["mac", "iphone", "ipad", "ipod"].iter().any(|p| hint.contains(p)) {
            Platform::Apple
        } else {
            Platform::Other
        }
    }

    pub fn shortcut_label(self) -> &'static str {
        match self {
            Platform::Apple => "⌘K",
            Platform::Other => "Ctrl+K",
        }
    }
}

// a keydown, reduced to what the palette cares about
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Chord {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Chord {
    pub fn key(key: &str) -> Self {
        Chord {
            key: key.to_owned(),
            ..Default::default()
        }
    }

    pub fn ctrl(key: &str) -> Self {
        Chord {
            ctrl: true,
            ..Chord::key(key)
        }
    }

    pub fn meta(key: &str) -> Self {
        Chord {
            meta: true,
            ..Chord::key(key)
        }
    }

    pub fn is_palette_toggle(&self, platform: Platform) -> bool {
        let modifier = match platform {
            Platform::Apple => self.meta,
            Platform::Other => self.ctrl,
        };

        modifier && !self.alt && self.key.eq_ignore_ascii_case("k")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Command {
    pub label: String,
    pub keywords: Vec<String>,
    pub action: Action,
}

impl Command {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Command {
            label: label.into(),
            keywords: Vec::new(),
            action,
        }
    }

    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    // case-insensitive substring match on the label or any keyword
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.label.to_lowercase().contains(&query)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(&query))
    }
}

// what the caller should do after a key was handled
#[derive(Clone, Debug, PartialEq)]
pub enum KeyOutcome {
    // not ours, let the browser have it
    Ignored,
    // palette state changed, swallow the event
    Handled,
    // run this action; the palette has already closed
    Execute(Action),
}

// CommandPalette
//
// the open flag, the query and the highlighted row.  the highlight always
// indexes into the filtered list and is reset whenever the query changes
#[derive(Clone, Debug, Default)]
pub struct CommandPalette {
    commands: Vec<Command>,
    open: bool,
    query: String,
    highlighted: usize,
}

impl CommandPalette {
    pub fn new(commands: Vec<Command>) -> Self {
        CommandPalette {
            commands,
            ..Default::default()
        }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    // e.g. after a language switch; the open state survives
    pub fn set_commands(&mut self, commands: Vec<Command>) {
        self.commands = commands;
        self.highlighted = 0;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.highlighted = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.highlighted = 0;
    }

    pub fn toggle(&mut self) {
        if self.open { self.close() } else { self.open() }
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_owned();
        self.highlighted = 0;
    }

    pub fn filtered(&self) -> Vec<&Command> {
        filter(&self.commands, &self.query)
    }

    pub fn move_highlight(&mut self, delta: isize) {
        let len = self.filtered().len();
        if len == 0 {
            self.highlighted = 0;
            return;
        }

        let len = len as isize;
        self.highlighted = (self.highlighted as isize + delta).rem_euclid(len) as usize;
    }

    // pick the index-th row of the filtered list; closes the palette on success
    pub fn select(&mut self, index: usize) -> Option<Action> {
        let action = self.filtered().get(index).map(|c| c.action.clone())?;

        debug!(?action, "palette selection");
        self.close();
        Some(action)
    }

    // true if handle_key would do anything with this chord
    pub fn wants_key(&self, chord: &Chord, platform: Platform) -> bool {
        if chord.is_palette_toggle(platform) {
            return true;
        }

        self.open && matches!(chord.key.as_str(), "Escape" | "ArrowDown" | "ArrowUp" | "Enter")
    }

    // global key handling
    //
    // the toggle chord works whether or not the palette is open, and escape
    // closes it regardless of where focus is
    pub fn handle_key(&mut self, chord: &Chord, platform: Platform) -> KeyOutcome {
        if !self.wants_key(chord, platform) {
            return KeyOutcome::Ignored;
        }

        if chord.is_palette_toggle(platform) {
            self.toggle();
            return KeyOutcome::Handled;
        }

        match chord.key.as_str() {
            "Escape" => {
                self.close();
                KeyOutcome::Handled
            }
            "ArrowDown" => {
                self.move_highlight(1);
                KeyOutcome::Handled
            }
            "ArrowUp" => {
                self.move_highlight(-1);
                KeyOutcome::Handled
            }
            "Enter" => match self.select(self.highlighted) {
                Some(action) => KeyOutcome::Execute(action),
                None => KeyOutcome::Handled,
            },
            _ => KeyOutcome::Ignored,
        }
    }
}

pub fn filter<'a>(commands: &'a [Command], query: &str) -> Vec<&'a Command> {
    commands.iter().filter(|c| c.matches(query)).collect()
}
