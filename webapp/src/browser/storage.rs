use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use common::PreferenceBackend;

// local storage, keyed without a prefix so the stored values are exactly the
// preference strings (theme -> dark, lang -> de)
//
// failures are logged to the console and otherwise treated as an absent value
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageBackend;

impl PreferenceBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).unwrap_or_else(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        })
    }

    fn set(&self, key: &str, value: &str) {
        LocalStorage::raw()
            .set_item(key, value)
            .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
    }
}
