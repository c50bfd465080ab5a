// ============================================================================
// PRODUCT SERVICE - Endpoints del catálogo
// ============================================================================

use crate::error::HttpError;
use crate::models::{Category, DeletedProduct, ProductPage, UserPage};
use crate::services::api_client::ApiClient;
use crate::services::endpoint::Endpoint;

#[derive(Clone)]
pub struct ProductService {
    api: ApiClient,
}

impl ProductService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Página de productos para cualquiera de los tres listados
    /// (`Products`, `SearchProducts`, `ProductsByCategory`)
    pub async fn page(&self, endpoint: &Endpoint) -> Result<ProductPage, HttpError> {
        let page: ProductPage = self.api.get(endpoint).await?;
        log::info!("📦 {} productos (total {})", page.products.len(), page.total);
        Ok(page)
    }

    pub async fn categories(&self) -> Result<Vec<Category>, HttpError> {
        self.api.get(&Endpoint::Categories).await
    }

    /// Cualquier 2xx cuenta como borrado. El cuerpo es opcional: si no
    /// trae un `DeletedProduct` reconocible se devuelve `None`.
    pub async fn delete(&self, id: u64) -> Result<Option<DeletedProduct>, HttpError> {
        log::info!("🗑️ Eliminando producto {}", id);
        let response = self.api.execute(&Endpoint::DeleteProduct { id }, None).await?;
        let deleted = serde_json::from_str::<DeletedProduct>(&response.body).ok();
        match &deleted {
            Some(deleted) if !deleted.is_deleted => {
                log::warn!("⚠️ El servidor no confirmó el borrado de {}", id);
            }
            Some(_) => {}
            None => log::debug!("📭 Borrado de {} sin cuerpo reconocible", id),
        }
        Ok(deleted)
    }

    /// Muestra para las estadísticas del dashboard
    pub async fn stats_sample(&self, limit: u32) -> Result<ProductPage, HttpError> {
        self.page(&Endpoint::Products { limit, skip: 0 }).await
    }

    pub async fn users_total(&self) -> Result<u64, HttpError> {
        let users: UserPage = self.api.get(&Endpoint::Users { limit: 1 }).await?;
        Ok(users.total)
    }
}
