use std::rc::Rc;

use crate::utils::storage::{KeyValueStore, MemoryStorage, StorageError};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const ROLE_KEY: &str = "role";

/// Persists the bearer token and role between visits.
#[derive(Clone)]
pub struct TokenStore {
    backend: Rc<dyn KeyValueStore>,
}

impl TokenStore {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::default())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        Self::new(crate::utils::storage::BrowserStorage)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        Self::in_memory()
    }

    pub fn token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    pub fn set_token(&self, token: &str) -> Result<(), StorageError> {
        self.backend.set(ACCESS_TOKEN_KEY, token)
    }

    pub fn remove_token(&self) -> Result<(), StorageError> {
        self.backend.remove(ACCESS_TOKEN_KEY)
    }

    pub fn role(&self) -> Option<String> {
        self.read(ROLE_KEY)
    }

    pub fn set_role(&self, role: &str) -> Result<(), StorageError> {
        self.backend.set(ROLE_KEY, role)
    }

    pub fn remove_role(&self) -> Result<(), StorageError> {
        self.backend.remove(ROLE_KEY)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(err) => {
                log::warn!("Failed to read {} from storage: {}", key, err);
                None
            }
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::detect()
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_store_survives_a_new_handle() {
        let store = TokenStore::detect();
        store.set_token("jwt-browser").unwrap();
        store.set_role("HOME_CARE").unwrap();

        let reopened = TokenStore::detect();
        assert_eq!(reopened.token().as_deref(), Some("jwt-browser"));
        assert_eq!(reopened.role().as_deref(), Some("HOME_CARE"));

        reopened.remove_token().unwrap();
        reopened.remove_role().unwrap();
        assert!(store.token().is_none());
    }
}
