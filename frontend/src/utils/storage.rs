//! Persisted key/value storage for the session.
//!
//! In the browser this is `window.localStorage`; on the host (tests, SSR)
//! a process-local map stands in so the same call sites keep working.

#[cfg(target_arch = "wasm32")]
pub fn get_item(key: &str) -> Option<String> {
    let storage = local_storage()?;
    storage.get_item(key).ok().flatten()
}

#[cfg(target_arch = "wasm32")]
pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn remove_item(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
mod host {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn get_item(key: &str) -> Option<String> {
        STORE.with(|store| store.borrow().get(key).cloned())
    }

    pub fn set_item(key: &str, value: &str) {
        STORE.with(|store| {
            store.borrow_mut().insert(key.to_string(), value.to_string());
        });
    }

    pub fn remove_item(key: &str) {
        STORE.with(|store| {
            store.borrow_mut().remove(key);
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use host::{get_item, remove_item, set_item};

pub fn take_item(key: &str) -> Option<String> {
    let value = get_item(key)?;
    remove_item(key);
    Some(value)
}
