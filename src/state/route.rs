// ============================================================================
// ROUTES - Vistas de la aplicación y guardia de autenticación
// ============================================================================

/// Vista de primer nivel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Products,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard => "/dashboard",
            Route::Products => "/products",
        }
    }

    /// Rutas desconocidas caen en el dashboard (la guardia decide después)
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "" | "/login" => Route::Login,
            "/products" => Route::Products,
            _ => Route::Dashboard,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }

    /// Ruta efectiva según haya o no token
    pub fn guard(requested: Route, authenticated: bool) -> Route {
        match (requested, authenticated) {
            (route, false) if route.requires_auth() => Route::Login,
            (Route::Login, true) => Route::Dashboard,
            (route, _) => route,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Dashboard => "Dashboard",
            Route::Products => "Products",
        }
    }
}

/// Navegación y acceso a la query string de la URL actual.
/// En el navegador lo implementa `BrowserNavigator` (History API).
pub trait Navigator {
    fn navigate(&self, route: Route);
    /// Query string actual, sin `?`
    fn current_query(&self) -> String;
    /// Sustituye la query string creando una entrada de historial
    fn push_query(&self, query: &str);
}
