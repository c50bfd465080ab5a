// ============================================================================
// TOKEN STORAGE - Persistencia del token entre recargas
// ============================================================================
// En el navegador: localStorage (valor en crudo, sin JSON). En tests y
// fuera de wasm: memoria.
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

pub trait TokenStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

#[derive(Default)]
pub struct MemoryTokenStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), String> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::LocalTokenStorage;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::TokenStorage;
    use gloo_storage::{LocalStorage, Storage};

    /// localStorage del navegador
    #[derive(Default)]
    pub struct LocalTokenStorage;

    impl TokenStorage for LocalTokenStorage {
        fn load(&self, key: &str) -> Option<String> {
            LocalStorage::raw().get_item(key).ok().flatten()
        }

        fn save(&self, key: &str, value: &str) -> Result<(), String> {
            LocalStorage::raw()
                .set_item(key, value)
                .map_err(|_| "Error guardando en localStorage".to_string())
        }

        fn remove(&self, key: &str) -> Result<(), String> {
            LocalStorage::raw()
                .remove_item(key)
                .map_err(|_| "Error eliminando de localStorage".to_string())
        }
    }
}
