// ============================================================================
// BROWSER NAVIGATOR - History API
// ============================================================================
// Cada navegación crea una entrada de historial y emite `routechange`; el
// botón atrás/adelante llega como `popstate`.
// ============================================================================

use wasm_bindgen::JsValue;

use crate::dom::events::dispatch_window_event;
use crate::state::{Navigator, Route};

pub const ROUTE_CHANGE_EVENT: &str = "routechange";
pub const POP_STATE_EVENT: &str = "popstate";

#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl BrowserNavigator {
    pub fn current_path() -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    pub fn current_route() -> Route {
        Route::from_path(&Self::current_path())
    }

    fn push_url(url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let pushed = window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(url)));
        match pushed {
            Ok(()) => dispatch_window_event(ROUTE_CHANGE_EVENT),
            Err(e) => log::error!("❌ Error navegando a {}: {:?}", url, e),
        }
    }
}

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: Route) {
        if Self::current_path() == route.path() && self.current_query().is_empty() {
            return;
        }
        log::info!("🧭 Navegando a {}", route.path());
        Self::push_url(route.path());
    }

    fn current_query(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|search| search.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    fn push_query(&self, query: &str) {
        let path = Self::current_path();
        if query.is_empty() {
            Self::push_url(&path);
        } else {
            Self::push_url(&format!("{}?{}", path, query));
        }
    }
}
