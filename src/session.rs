//! Persistence of the logged-in user across page reloads.
//!
//! The browser's `sessionStorage` sits behind [`SessionStorage`] so that the
//! store degrades to memory when storage is unavailable, and so tests can
//! substitute [`MemoryStorage`].
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use leptos::logging::warn;
use crate::config::{FIRST_NAME_KEY, USERNAME_KEY};
use crate::models::session::Session;

/// String key/value area. Writes never fail from the caller's point of view.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Non-persistent storage. Clones share the same entries.
#[derive(Clone, Default, Debug)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// `window.sessionStorage`.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// `None` outside a browser or when the page may not use storage.
    pub fn session() -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            match web_sys::window().map(|window| window.session_storage()) {
                Some(Ok(Some(storage))) => Some(Self { storage }),
                _ => {
                    warn!("[SESSION] sessionStorage unavailable, session will not survive a reload");
                    None
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            warn!("[SESSION] failed to write {}: {:?}", key, err);
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.storage.remove_item(key) {
            warn!("[SESSION] failed to remove {}: {:?}", key, err);
        }
    }
}

/// Mirrors the in-memory [`Session`] into a [`SessionStorage`].
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(backend: impl SessionStorage + 'static) -> Self {
        Self { backend: Rc::new(backend) }
    }

    /// Browser session storage, or memory when it cannot be reached.
    pub fn browser() -> Self {
        match BrowserStorage::session() {
            Some(storage) => Self::new(storage),
            None => Self::new(MemoryStorage::default()),
        }
    }

    pub fn load(&self) -> Option<Session> {
        let username = self.backend.get(USERNAME_KEY)?;
        let first_name = self.backend.get(FIRST_NAME_KEY).unwrap_or_default();
        Some(Session::logged_in(username, first_name))
    }

    pub fn save(&self, username: &str, first_name: &str) {
        self.backend.set(USERNAME_KEY, username);
        self.backend.set(FIRST_NAME_KEY, first_name);
    }

    pub fn clear(&self) {
        self.backend.remove(USERNAME_KEY);
        self.backend.remove(FIRST_NAME_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_storage_loads_nothing() {
        let store = SessionStore::new(MemoryStorage::default());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_then_load_from_a_fresh_store() {
        let storage = MemoryStorage::default();
        SessionStore::new(storage.clone()).save("jdoe", "Jane");

        // a reload builds a new store over the same storage area
        let reloaded = SessionStore::new(storage.clone());
        assert_eq!(reloaded.load(), Some(Session::logged_in("jdoe", "Jane")));
        assert_eq!(storage.get("username").as_deref(), Some("jdoe"));
        assert_eq!(storage.get("firstname").as_deref(), Some("Jane"));
    }

    #[test]
    fn missing_first_name_is_empty() {
        let storage = MemoryStorage::default();
        storage.set(USERNAME_KEY, "jdoe");
        let session = SessionStore::new(storage).load().unwrap();
        assert_eq!(session.first_name, "");
        assert!(session.is_logged_in);
    }

    #[test]
    fn clear_removes_both_fields() {
        let storage = MemoryStorage::default();
        let store = SessionStore::new(storage.clone());
        store.save("jdoe", "Jane");
        store.clear();
        assert_eq!(store.load(), None);
        assert_eq!(storage.get(FIRST_NAME_KEY), None);
    }

    #[test]
    fn browser_store_degrades_to_memory_off_the_web() {
        let store = SessionStore::browser();
        store.save("jdoe", "Jane");
        assert_eq!(store.load(), Some(Session::logged_in("jdoe", "Jane")));
    }
}
