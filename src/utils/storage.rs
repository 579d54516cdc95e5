use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};

/// Almacenamiento persistente de un valor string por clave.
/// El token se guarda tal cual (sin comillas JSON) para ser compatible con
/// `localStorage.getItem("access_token")` del lado de la página.
pub trait TokenStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// localStorage del navegador
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStorage;

impl TokenStorage for LocalTokenStorage {
    fn load(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok()?
    }

    fn store(&self, key: &str, value: &str) -> Result<(), String> {
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

/// Storage en memoria. Los clones comparten el mismo mapa, así que un
/// "reload" simulado puede volver a leer lo que persistió la instancia anterior.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
