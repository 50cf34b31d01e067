use std::collections::HashMap;

use gloo_console::error as console_error;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
    Window, window,
};

use common::{
    Navigator, Platform, ScrollLock, Theme,
    preference::Preferences,
    tracker::{Rect, ScrollMetrics},
};

fn document() -> Option<Document> {
    window()?.document()
}

// the OS-level dark mode hint; anything unavailable counts as "no"
pub fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

pub fn platform() -> Platform {
    window()
        .and_then(|w| w.navigator().platform().ok())
        .map(|p| Platform::detect(&p))
        .unwrap_or_default()
}

// presentation attributes on <html>, re-applied after every preference write
pub fn apply_preferences(prefs: &Preferences) {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };

    let dark = prefs.theme == Theme::Dark;

    let result = root
        .set_attribute("data-theme", prefs.theme.as_str())
        .and_then(|_| root.class_list().toggle_with_force("dark", dark).map(|_| ()))
        .and_then(|_| root.set_attribute("lang", prefs.language.as_str()));

    if let Err(err) = result {
        console_error!(format!("Failed to apply preferences: {err:?}"));
    }
}

// vertical scroll state of the window
pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = window()?;

    let offset = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let document_height = window.document()?.document_element()?.scroll_height() as f64;

    Some(ScrollMetrics::measure(offset, document_height, viewport))
}

// bounding boxes of the given sections, relative to the viewport, plus the
// viewport itself; ids with no element yet are left out
pub fn section_bounds(ids: &[String]) -> (HashMap<String, Rect>, Rect) {
    let viewport_height = window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);

    let mut bounds = HashMap::new();

    if let Some(document) = document() {
        for id in ids.iter() {
            if let Some(element) = document.get_element_by_id(id) {
                let rect = element.get_bounding_client_rect();
                bounds.insert(id.clone(), Rect::new(rect.top(), rect.height()));
            }
        }
    }

    (bounds, Rect::new(0.0, viewport_height))
}

fn open_in_new_context(window: &Window, url: &str) {
    if let Err(err) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
        console_error!(format!("Failed to open {url}: {err:?}"));
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WebNavigator;

impl Navigator for WebNavigator {
    fn scroll_to(&self, section: &str) {
        let Some(element) = document().and_then(|d| d.get_element_by_id(section)) else {
            debug!(section, "no element to scroll to");
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);

        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn scroll_to_top(&self) {
        let Some(window) = window() else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);

        window.scroll_to_with_scroll_to_options(&options);
    }

    fn open_external(&self, url: &str) {
        if let Some(window) = window() {
            open_in_new_context(&window, url);
        }
    }

    fn compose_mail(&self, href: &str) {
        if let Some(window) = window() {
            if let Err(err) = window.location().set_href(href) {
                console_error!(format!("Failed to open mail client: {err:?}"));
            }
        }
    }

    // same as following a download link
    fn open_document(&self, path: &str) {
        let Some(document) = document() else {
            return;
        };

        let anchor = match document.create_element("a") {
            Ok(anchor) => anchor,
            Err(err) => {
                console_error!(format!("Failed to create download link: {err:?}"));
                return;
            }
        };

        let result = anchor
            .set_attribute("href", path)
            .and_then(|_| anchor.set_attribute("download", ""));

        if let Err(err) = result {
            console_error!(format!("Failed to prepare download of {path}: {err:?}"));
            return;
        }

        match anchor.dyn_into::<HtmlElement>() {
            Ok(anchor) => anchor.click(),
            Err(_) => console_error!(format!("Failed to download {path}")),
        }
    }
}

// locks page scrolling behind the drawer by hiding overflow on <body>
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollLock;

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        if let Some(body) = document().and_then(|d| d.body()) {
            if let Err(err) = body.style().set_property("overflow", "hidden") {
                console_error!(format!("Failed to lock page scrolling: {err:?}"));
            }
        }
    }

    fn unlock(&self) {
        if let Some(body) = document().and_then(|d| d.body()) {
            if let Err(err) = body.style().remove_property("overflow") {
                console_error!(format!("Failed to unlock page scrolling: {err:?}"));
            }
        }
    }
}
