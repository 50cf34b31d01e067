// platform-independent state for the portfolio page
//
// nothing in here touches the browser: storage, scroll locking and navigation
// are traits that the webapp implements against web-sys, and that the tests
// implement with plain in-memory types
pub mod dispatch;
pub mod drawer;
pub mod i18n;
pub mod palette;
pub mod preference;
pub mod rotator;
pub mod site;
pub mod tracker;

pub use dispatch::{Action, Dispatcher, Navigator, Origin};
pub use drawer::{Drawer, ScrollLock};
pub use palette::{Chord, Command, CommandPalette, Platform};
pub use preference::{Language, PreferenceBackend, PreferenceKind, PreferenceStore, Theme};
pub use site::Site;
pub use tracker::{Rect, ScrollMetrics, SectionTracker};
