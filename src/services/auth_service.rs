use crate::error::{AppError, HttpErrorKind};
use crate::models::{AuthUser, LoginRequest};
use crate::services::api_client::ApiClient;
use crate::services::endpoint::Endpoint;
use crate::services::query_client::QueryClient;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login / logout contra `POST /auth/login`
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    queries: QueryClient,
    expires_in_mins: Option<u32>,
}

impl AuthService {
    pub fn new(api: ApiClient, queries: QueryClient, expires_in_mins: Option<u32>) -> Self {
        Self {
            api,
            queries,
            expires_in_mins,
        }
    }

    /// Autentica y guarda el token en la sesión. Sin token no hay login.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthUser, AppError> {
        log::info!("🔐 Login para usuario: {}", username);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            expires_in_mins: self.expires_in_mins,
        };

        let user: AuthUser = match self.api.send_json(&Endpoint::Login, &request).await {
            Ok(user) => user,
            Err(e) if e.kind == HttpErrorKind::Status && e.is_client_error() => {
                log::warn!("⚠️ Credenciales rechazadas para {}: {}", username, e.message);
                // Sin mensaje del servidor se usa el genérico
                let generic = e.status.map(|code| format!("HTTP {}", code));
                let message = if Some(&e.message) == generic.as_ref() {
                    INVALID_CREDENTIALS.to_string()
                } else {
                    e.message
                };
                return Err(AppError::Auth(message));
            }
            Err(e) => {
                log::error!("❌ Error en login: {}", e);
                return Err(AppError::Network(e));
            }
        };

        match user.token.as_deref().filter(|token| !token.is_empty()) {
            Some(token) => {
                self.api.session().set_token(token);
                log::info!("✅ Login exitoso: {}", user.display_name());
                Ok(user)
            }
            None => {
                log::error!("❌ Respuesta de login sin token");
                Err(AppError::Auth(INVALID_CREDENTIALS.to_string()))
            }
        }
    }

    /// Borra caché y token; la sesión navega al login
    pub fn logout(&self) {
        self.queries.clear();
        self.api.session().clear();
    }
}
