// ============================================================================
// API CLIENT - Comunicación HTTP con el catálogo
// ============================================================================
// Sin lógica de negocio: monta la URL, adjunta el token de la sesión y
// normaliza cualquier fallo a HttpError.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::HttpError;
use crate::models::ApiMessage;
use crate::services::endpoint::Endpoint;
use crate::services::transport::{HttpRequest, HttpResponse, Transport};
use crate::state::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: SessionStore, transport: Rc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into(),
            session,
            transport,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, HttpError> {
        self.request(endpoint, None).await
    }

    pub async fn send_json<B, T>(&self, endpoint: &Endpoint, body: &B) -> Result<T, HttpError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_string(body)
            .map_err(|e| HttpError::decode(format!("Serialization error: {}", e)))?;
        self.request(endpoint, Some(body)).await
    }

    /// Petición genérica. Sin reintentos: eso lo decide QueryClient.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        body: Option<String>,
    ) -> Result<T, HttpError> {
        let response = self.execute(endpoint, body).await?;
        serde_json::from_str::<T>(&response.body).map_err(|e| {
            HttpError::decode(format!("Parse error en /{}: {}", endpoint.segments().join("/"), e))
        })
    }

    /// Respuesta 2xx sin decodificar; cualquier otro código es HttpError
    pub async fn execute(&self, endpoint: &Endpoint, body: Option<String>) -> Result<HttpResponse, HttpError> {
        let url = self.url_for(endpoint)?;
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        let method = endpoint.method();
        log::debug!("🌐 {} {}", method.as_str(), url);

        let response = self
            .transport
            .send(HttpRequest {
                method,
                url: url.to_string(),
                headers,
                body,
            })
            .await?;

        if !response.is_success() {
            let err = status_error(&response);
            log::warn!("⚠️ {} {} -> {}: {}", method.as_str(), url.path(), response.status, err.message);
            return Err(err);
        }
        Ok(response)
    }

    /// URL absoluta: base configurada + segmentos codificados + query
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url, HttpError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| HttpError::network(format!("URL base inválida '{}': {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| HttpError::network(format!("URL base sin rutas: {}", self.base_url)))?
            .pop_if_empty()
            .extend(endpoint.segments());

        let query = endpoint.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }
}

// `{"message": "..."}` si el servidor lo envía; si no, el código HTTP
fn status_error(response: &HttpResponse) -> HttpError {
    let message = serde_json::from_str::<ApiMessage>(&response.body)
        .map(|body| body.message)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("HTTP {}", response.status));
    HttpError::status(response.status, message)
}
