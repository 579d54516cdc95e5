// ============================================================================
// SESSION STATE - Token store (única fuente de verdad de "hay usuario")
// ============================================================================
// get / set / clear sobre un TokenStorage persistente. Cada set/clear notifica
// a los subscribers (los affordances de login/logout se refrescan ahí).
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::state::reactivity::Subscribers;
use crate::utils::{TokenStorage, TOKEN_STORAGE_KEY};

/// Estado derivado del token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Anonymous,
    Authenticated,
}

impl AuthStatus {
    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }
}

/// Handle clonable del token de sesión
#[derive(Clone)]
pub struct SessionState {
    token: Rc<RefCell<Option<String>>>,
    storage: Rc<dyn TokenStorage>,
    subscribers: Subscribers<AuthStatus>,
}

impl SessionState {
    /// Cargar el token persistido (una sola vez, al arrancar).
    /// No se revalida contra el backend: eso ocurre en la primera mutación.
    pub fn load(storage: Rc<dyn TokenStorage>) -> Self {
        let token = storage
            .load(TOKEN_STORAGE_KEY)
            .filter(|t| !t.trim().is_empty());

        if token.is_some() {
            log::info!("💾 [SESSION] Token encontrado en storage, arrancando autenticado");
        } else {
            log::info!("👤 [SESSION] Sin token en storage, arrancando anónimo");
        }

        Self {
            token: Rc::new(RefCell::new(token)),
            storage,
            subscribers: Subscribers::new(),
        }
    }

    pub fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn status(&self) -> AuthStatus {
        if self.token.borrow().is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status().is_authenticated()
    }

    /// Guardar token (memoria + storage) y notificar
    pub fn set(&self, token: String) {
        if let Err(e) = self.storage.store(TOKEN_STORAGE_KEY, &token) {
            log::error!("❌ [SESSION] Error persistiendo token: {}", e);
        }
        *self.token.borrow_mut() = Some(token);
        self.subscribers.notify(&AuthStatus::Authenticated);
    }

    /// Borrar token (memoria + storage) y notificar
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(TOKEN_STORAGE_KEY) {
            log::error!("❌ [SESSION] Error eliminando token: {}", e);
        }
        *self.token.borrow_mut() = None;
        self.subscribers.notify(&AuthStatus::Anonymous);
    }

    /// Suscribirse a cambios de estado de autenticación
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&AuthStatus) + 'static,
    {
        self.subscribers.subscribe(callback);
    }
}
