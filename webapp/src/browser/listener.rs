use std::rc::Rc;

use dioxus::prelude::*;
use gloo_console::error as console_error;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Event, window};

// an event listener on the window that is removed when dropped
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, callback: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = window()?;
        let closure = Closure::<dyn FnMut(Event)>::new(callback);

        if let Err(err) =
            window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            console_error!(format!("Failed to listen for {event}: {err:?}"));
            return None;
        }

        Some(WindowListener { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }
}

// attach a window listener for the lifetime of the calling component
//
// the listener lives in a hook, so it is detached when the component unmounts
pub fn use_window_listener<F>(event: &'static str, callback: F)
where
    F: FnMut(Event) + 'static,
{
    use_hook(move || Rc::new(WindowListener::new(event, callback)));
}
