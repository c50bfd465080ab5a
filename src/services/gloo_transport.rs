// ============================================================================
// GLOO TRANSPORT - Fetch del navegador vía gloo-net
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};

use crate::error::HttpError;
use crate::services::transport::{HttpRequest, HttpResponse, Method, Transport};

#[derive(Clone, Copy, Default)]
pub struct GlooTransport;

impl GlooTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let mut builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = match request.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| HttpError::network(format!("Request build error: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| HttpError::network(format!("Network error: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HttpError::network(format!("Error leyendo respuesta: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
