//! Local Storage Helpers
//!
//! Thin wrappers over `window.localStorage` for persisted UI preferences.

pub fn local_get(key: &str) -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(key).ok()?
}

pub fn local_set(key: &str, value: &str) {
    let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    else {
        return;
    };
    let _ = storage.set_item(key, value);
}
