// ============================================================================
// APP CONTEXT - Servicios compartidos por todas las vistas
// ============================================================================
// Se construye una vez en `App` y baja a las vistas como prop.
// ============================================================================

use std::rc::Rc;

use crate::config::CONFIG;
use crate::dom::BrowserNavigator;
use crate::services::{ApiClient, AuthService, GlooTransport, ProductService, QueryClient, QueryOptions};
use crate::state::{LocalTokenStorage, Navigator, SessionStore};

#[derive(Clone)]
pub struct AppContext {
    pub session: SessionStore,
    pub queries: QueryClient,
    pub auth: AuthService,
    pub products: ProductService,
    pub navigator: Rc<dyn Navigator>,
}

impl AppContext {
    pub fn new() -> Self {
        let navigator: Rc<dyn Navigator> = Rc::new(BrowserNavigator);
        let session = SessionStore::new(
            Rc::new(LocalTokenStorage),
            navigator.clone(),
            CONFIG.token_storage_key.clone(),
        );
        let api = ApiClient::new(CONFIG.api_base_url.clone(), session.clone(), Rc::new(GlooTransport::new()));
        let queries = QueryClient::new(QueryOptions::from(&CONFIG.query));
        let auth = AuthService::new(api.clone(), queries.clone(), CONFIG.login_expires_in_mins);
        let products = ProductService::new(api);

        log::info!("⚙️ API: {}", CONFIG.api_base_url);
        Self {
            session,
            queries,
            auth,
            products,
            navigator,
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        self.queries == other.queries && Rc::ptr_eq(&self.navigator, &other.navigator)
    }
}
