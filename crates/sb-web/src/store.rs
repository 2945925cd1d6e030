//! Observable role store
//!
//! The selected role is the only state shared across views. It lives in a
//! reactive signal (the in-session change broadcast) backed by a pluggable
//! persistence backend, so views get updates without a reload and tests
//! run against an in-memory backend instead of the browser.

use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use sb_core::Role;
use std::rc::Rc;

/// Storage key holding the raw role string
pub const ROLE_STORAGE_KEY: &str = "skillbridge.role";

/// Where the role string persists between sessions
pub trait RoleBackend {
    fn load(&self) -> Option<String>;
    fn store(&self, value: &str);
}

/// Browser localStorage backend
///
/// Reads and writes the raw string, not a JSON encoding, so the stored
/// value is exactly the role name.
pub struct BrowserBackend;

impl RoleBackend for BrowserBackend {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(ROLE_STORAGE_KEY).ok().flatten()
    }

    fn store(&self, value: &str) {
        if LocalStorage::raw().set_item(ROLE_STORAGE_KEY, value).is_err() {
            tracing::warn!("role not persisted; storage unavailable");
        }
    }
}

#[derive(Clone)]
pub struct RoleStore {
    backend: Rc<dyn RoleBackend>,
    role: RwSignal<Option<Role>>,
}

impl RoleStore {
    /// Build a store over a backend, reading the persisted role up front
    ///
    /// An unparseable stored value reads as no selection.
    pub fn new(backend: Rc<dyn RoleBackend>) -> RoleStore {
        let initial = backend.load().and_then(|raw| Role::parse(&raw));
        RoleStore {
            backend,
            role: create_rw_signal(initial),
        }
    }

    pub fn browser() -> RoleStore {
        RoleStore::new(Rc::new(BrowserBackend))
    }

    /// Current selection; reactive when read inside a tracking scope
    pub fn role(&self) -> Option<Role> {
        self.role.get()
    }

    /// Persist a new selection and notify every observer
    pub fn set(&self, role: Role) {
        self.backend.store(role.as_str());
        self.role.set(Some(role));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryBackend {
        value: RefCell<Option<String>>,
    }

    impl RoleBackend for MemoryBackend {
        fn load(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn store(&self, value: &str) {
            *self.value.borrow_mut() = Some(value.to_string());
        }
    }

    #[test]
    fn test_set_then_get_in_same_session() {
        let runtime = create_runtime();
        let store = RoleStore::new(Rc::new(MemoryBackend::default()));
        assert_eq!(store.role(), None);
        store.set(Role::Industry);
        assert_eq!(store.role(), Some(Role::Industry));
        runtime.dispose();
    }

    #[test]
    fn test_selection_survives_a_reload() {
        let runtime = create_runtime();
        let backend = Rc::new(MemoryBackend::default());
        let store = RoleStore::new(backend.clone());
        store.set(Role::Industry);
        // A fresh store over the same backend is what a page reload sees.
        let reloaded = RoleStore::new(backend);
        assert_eq!(reloaded.role(), Some(Role::Industry));
        runtime.dispose();
    }

    #[test]
    fn test_garbage_in_storage_reads_as_unselected() {
        let runtime = create_runtime();
        let backend = Rc::new(MemoryBackend::default());
        backend.store("Superhero");
        let store = RoleStore::new(backend);
        assert_eq!(store.role(), None);
        runtime.dispose();
    }

    #[test]
    fn test_reselection_overwrites() {
        let runtime = create_runtime();
        let store = RoleStore::new(Rc::new(MemoryBackend::default()));
        store.set(Role::Student);
        store.set(Role::Institute);
        assert_eq!(store.role(), Some(Role::Institute));
        runtime.dispose();
    }
}
