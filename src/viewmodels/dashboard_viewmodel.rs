// ============================================================================
// DASHBOARD VIEWMODEL - Estadísticas del catálogo
// ============================================================================
// Dos consultas en caché (`products-stats`, `users-stats`); las métricas se
// calculan en cliente sobre la muestra de productos.
// ============================================================================

use crate::error::{AppError, HttpError};
use crate::models::{DashboardStats, ProductPage, QueryKey};
use crate::services::query_client::QueryClient;
use crate::services::ProductService;

pub const PRODUCTS_STATS_ROOT: &str = "products-stats";
pub const USERS_STATS_ROOT: &str = "users-stats";

#[derive(Clone)]
pub struct DashboardViewModel {
    queries: QueryClient,
    products: ProductService,
    sample_size: u32,
    low_stock_threshold: u32,
}

impl DashboardViewModel {
    pub fn new(queries: QueryClient, products: ProductService, sample_size: u32, low_stock_threshold: u32) -> Self {
        Self {
            queries,
            products,
            sample_size,
            low_stock_threshold,
        }
    }

    pub fn keys() -> [QueryKey; 2] {
        [QueryKey::new(PRODUCTS_STATS_ROOT), QueryKey::new(USERS_STATS_ROOT)]
    }

    /// Carga ambas consultas en paralelo y calcula las estadísticas
    pub async fn load(&self) -> Result<DashboardStats, String> {
        let [products_key, users_key] = Self::keys();
        let sample_size = self.sample_size;

        let products = self.products.clone();
        let sample = self.queries.fetch(products_key, move || {
            let products = products.clone();
            async move { products.stats_sample(sample_size).await }
        });
        let users = self.products.clone();
        let total_users = self.queries.fetch(users_key, move || {
            let users = users.clone();
            async move { users.users_total().await }
        });

        let (sample, total_users): (Result<ProductPage, HttpError>, Result<u64, HttpError>) =
            futures::join!(sample, total_users);
        let sample = sample.map_err(|e| AppError::from(e).user_message())?;
        let total_users = total_users.map_err(|e| AppError::from(e).user_message())?;

        Ok(self.compute(&sample, total_users))
    }

    /// Estadísticas con lo que haya en caché; `None` hasta tener ambas
    pub fn stats(&self) -> Option<DashboardStats> {
        let [products_key, users_key] = Self::keys();
        let sample = self.queries.peek::<ProductPage>(&products_key).data?;
        let total_users = self.queries.peek::<u64>(&users_key).data?;
        Some(self.compute(&sample, total_users))
    }

    /// Primer error de cualquiera de las dos consultas
    pub fn error(&self) -> Option<String> {
        let [products_key, users_key] = Self::keys();
        self.queries
            .peek::<ProductPage>(&products_key)
            .error
            .or_else(|| self.queries.peek::<u64>(&users_key).error)
    }

    fn compute(&self, sample: &ProductPage, total_users: u64) -> DashboardStats {
        DashboardStats::compute(sample.total, total_users, &sample.products, self.low_stock_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::Method;
    use crate::testing::{harness, Harness};
    use futures::executor::block_on;
    use serde_json::json;

    fn view_model(h: &Harness) -> DashboardViewModel {
        DashboardViewModel::new(h.client.clone(), ProductService::new(h.api.clone()), 100, 10)
    }

    fn script(h: &Harness) {
        h.transport.reply(
            Method::Get,
            "/products?limit=100&skip=0",
            200,
            json!({
                "products": [
                    {"id": 1, "title": "Mascara", "price": 10.0, "stock": 5, "category": "beauty", "rating": 4.5},
                    {"id": 2, "title": "Sofa", "price": 300.0, "stock": 50, "category": "furniture", "rating": 3.9}
                ],
                "total": 194, "skip": 0, "limit": 100
            }),
        );
        h.transport.reply(Method::Get, "/users?limit=1", 200, json!({"users": [], "total": 208}));
    }

    #[test]
    fn loads_and_computes_stats() {
        let h = harness();
        script(&h);
        let vm = view_model(&h);

        let stats = block_on(vm.load()).unwrap();

        assert_eq!(stats.total_products, 194);
        assert_eq!(stats.total_users, 208);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.average_price, "155.00");
        assert_eq!(vm.stats(), Some(stats));
    }

    #[test]
    fn second_load_hits_cache() {
        let h = harness();
        script(&h);
        let vm = view_model(&h);

        block_on(vm.load()).unwrap();
        block_on(vm.load()).unwrap();

        assert_eq!(h.transport.calls().len(), 2);
    }

    #[test]
    fn failure_is_reported_as_message() {
        let h = harness();
        h.transport.reply(Method::Get, "/products?limit=100&skip=0", 500, json!({"message": "boom"}));
        h.transport.reply(Method::Get, "/users?limit=1", 200, json!({"total": 3}));
        let vm = view_model(&h);

        assert_eq!(block_on(vm.load()), Err("boom".to_string()));
        assert_eq!(vm.stats(), None);
        assert_eq!(vm.error().as_deref(), Some("boom"));
    }
}
