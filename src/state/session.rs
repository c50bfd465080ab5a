// ============================================================================
// SESSION STORE - Token de acceso del usuario
// ============================================================================
// Un único token, inyectado donde haga falta (ApiClient, AuthService, vistas).
// Se persiste en el TokenStorage; `clear()` además vuelve al login.
// ============================================================================

use std::rc::Rc;

use crate::state::reactivity::{Observable, ReactiveState, SubscriptionId};
use crate::state::route::{Navigator, Route};
use crate::state::storage::TokenStorage;

#[derive(Clone)]
pub struct SessionStore {
    token: ReactiveState<Option<String>>,
    storage: Rc<dyn TokenStorage>,
    navigator: Rc<dyn Navigator>,
    storage_key: String,
}

impl SessionStore {
    /// Crea el store recuperando el token persistido (si existe)
    pub fn new(
        storage: Rc<dyn TokenStorage>,
        navigator: Rc<dyn Navigator>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let restored = storage.load(&storage_key).filter(|t| !t.is_empty());
        if restored.is_some() {
            log::info!("🔑 Token restaurado desde el almacenamiento");
        }
        Self {
            token: ReactiveState::new(restored),
            storage,
            navigator,
            storage_key,
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        if let Err(e) = self.storage.save(&self.storage_key, &token) {
            // El token sigue válido en memoria durante esta sesión
            log::warn!("⚠️ No se pudo persistir el token: {}", e);
        }
        self.token.set(Some(token));
    }

    /// Logout: borra el token y navega al login
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.storage_key) {
            log::warn!("⚠️ No se pudo borrar el token persistido: {}", e);
        }
        self.token.set(None);
        log::info!("👋 Sesión cerrada");
        self.navigator.navigate(Route::Login);
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) -> SubscriptionId {
        self.token.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.token.unsubscribe(id);
    }
}

impl Observable for SessionStore {
    fn observe(&self, callback: Rc<dyn Fn()>) -> SubscriptionId {
        self.token.observe(callback)
    }

    fn unobserve(&self, id: SubscriptionId) {
        self.token.unobserve(id);
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage) && self.token() == other.token()
    }
}
