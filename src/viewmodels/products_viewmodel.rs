// ============================================================================
// PRODUCTS VIEWMODEL - Estado de la vista de productos
// ============================================================================
// Filtros (espejados en la URL) + borrado pendiente. Los datos viven en el
// QueryClient; aquí solo se deriva la clave, el endpoint y la paginación.
// ============================================================================

use std::rc::Rc;

use crate::error::AppError;
use crate::models::{Category, FilterChange, FilterState, ProductPage, QueryKey};
use crate::services::query_client::{QueryClient, QueryResult};
use crate::services::{Endpoint, ProductService};
use crate::state::{Navigator, Observable, ReactiveState, SubscriptionId};

pub const PRODUCTS_ROOT: &str = "products";
pub const CATEGORIES_ROOT: &str = "categories";

#[derive(Clone, Debug, PartialEq, Default)]
pub struct ProductsViewState {
    pub filter: FilterState,
    /// Producto esperando confirmación de borrado
    pub pending_deletion: Option<u64>,
    pub delete_error: Option<String>,
    pub deleting: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub skip: u64,
    pub total: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub first_item: u64,
    pub last_item: u64,
}

impl Pagination {
    /// `total` es el de la última respuesta correcta; sin datos, 0
    pub fn compute(page: u32, limit: u32, total: u64) -> Self {
        let page = page.max(1);
        let skip = (page as u64 - 1) * limit as u64;
        let end = skip + limit as u64;
        let (first_item, last_item) = if total == 0 {
            (0, 0)
        } else {
            (skip + 1, end.min(total))
        };

        Self {
            page,
            limit,
            skip,
            total,
            has_previous: page > 1,
            has_next: end < total,
            first_item,
            last_item,
        }
    }
}

#[derive(Clone)]
pub struct ProductsViewModel {
    state: ReactiveState<ProductsViewState>,
    queries: QueryClient,
    products: ProductService,
    navigator: Rc<dyn Navigator>,
    page_size: u32,
}

impl ProductsViewModel {
    /// Estado inicial leído de la query string actual
    pub fn new(
        queries: QueryClient,
        products: ProductService,
        navigator: Rc<dyn Navigator>,
        page_size: u32,
    ) -> Self {
        let filter = FilterState::from_query(&navigator.current_query());
        Self {
            state: ReactiveState::new(ProductsViewState {
                filter,
                ..ProductsViewState::default()
            }),
            queries,
            products,
            navigator,
            page_size: page_size.max(1),
        }
    }

    pub fn state(&self) -> ProductsViewState {
        self.state.get()
    }

    pub fn filter(&self) -> FilterState {
        self.state.get().filter
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) -> SubscriptionId {
        self.state.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.state.unsubscribe(id);
    }

    pub fn set_filter(&self, change: FilterChange) {
        let next = self.filter().apply(change);
        let query = next.to_query();
        // Estado antes que URL: el `routechange` resultante ya no cambia nada
        self.state.update(|state| state.filter = next);
        self.navigator.push_query(&query);
    }

    /// Atrás/adelante o navegación a `/products`: la URL manda, sin volver
    /// a escribirla
    pub fn sync_from_query(&self, query: &str) {
        let filter = FilterState::from_query(query);
        if filter != self.filter() {
            log::debug!("🔙 Filtros restaurados desde la URL: {}", query);
            self.state.update(|state| state.filter = filter);
        }
    }

    /// `["products", search, category, page]`
    pub fn query_key(&self) -> QueryKey {
        let filter = self.filter();
        QueryKey::new(PRODUCTS_ROOT)
            .with(filter.search)
            .with(filter.category)
            .with(filter.page)
    }

    /// Búsqueda > categoría > listado completo
    pub fn endpoint(&self) -> Endpoint {
        let filter = self.filter();
        let limit = self.page_size;
        let skip = filter.skip(limit);

        if !filter.search.is_empty() {
            Endpoint::SearchProducts {
                query: filter.search,
                limit,
                skip,
            }
        } else if !filter.category.is_empty() {
            Endpoint::ProductsByCategory {
                slug: filter.category,
                limit,
                skip,
            }
        } else {
            Endpoint::Products { limit, skip }
        }
    }

    pub async fn load_products(&self) -> Result<ProductPage, String> {
        let endpoint = self.endpoint();
        let service = self.products.clone();
        self.queries
            .fetch(self.query_key(), move || {
                let service = service.clone();
                let endpoint = endpoint.clone();
                async move { service.page(&endpoint).await }
            })
            .await
            .map_err(|e| AppError::from(e).user_message())
    }

    pub async fn load_categories(&self) -> Result<Vec<Category>, String> {
        let service = self.products.clone();
        self.queries
            .fetch(QueryKey::new(CATEGORIES_ROOT), move || {
                let service = service.clone();
                async move { service.categories().await }
            })
            .await
            .map_err(|e| AppError::from(e).user_message())
    }

    pub fn products(&self) -> QueryResult<ProductPage> {
        self.queries.peek(&self.query_key())
    }

    pub fn categories(&self) -> QueryResult<Vec<Category>> {
        self.queries.peek(&QueryKey::new(CATEGORIES_ROOT))
    }

    pub fn pagination(&self) -> Pagination {
        let total = self.products().data.map(|page| page.total).unwrap_or(0);
        Pagination::compute(self.filter().page, self.page_size, total)
    }

    pub fn next_page(&self) {
        let pagination = self.pagination();
        if pagination.has_next {
            self.set_filter(FilterChange::Page(pagination.page + 1));
        }
    }

    pub fn previous_page(&self) {
        let pagination = self.pagination();
        if pagination.has_previous {
            self.set_filter(FilterChange::Page(pagination.page - 1));
        }
    }

    pub fn request_delete(&self, id: u64) {
        self.state.update(|state| {
            state.pending_deletion = Some(id);
            state.delete_error = None;
        });
    }

    pub fn cancel_delete(&self) {
        self.state.update(|state| {
            state.pending_deletion = None;
            state.delete_error = None;
        });
    }

    /// Borra el producto pendiente. Si falla, el borrado sigue pendiente y
    /// la lista en caché no cambia.
    pub async fn confirm_delete(&self) -> Result<(), String> {
        let Some(id) = self.state.get().pending_deletion else {
            return Ok(());
        };
        self.state.update(|state| {
            state.deleting = true;
            state.delete_error = None;
        });

        let result = self
            .queries
            .mutate(
                || self.products.delete(id),
                |queries, _| {
                    queries.invalidate(&QueryKey::new(PRODUCTS_ROOT));
                },
            )
            .await;

        match result {
            Ok(deleted) => {
                match deleted {
                    Some(deleted) => log::info!("✅ Producto eliminado: {} ({})", deleted.title, id),
                    None => log::info!("✅ Producto {} eliminado", id),
                }
                self.state.update(|state| {
                    state.pending_deletion = None;
                    state.deleting = false;
                });
                if let Err(e) = self.load_products().await {
                    log::warn!("⚠️ No se pudo recargar la lista tras el borrado: {}", e);
                }
                Ok(())
            }
            Err(e) => {
                let message = AppError::from(e).user_message();
                self.state.update(|state| {
                    state.deleting = false;
                    state.delete_error = Some(message.clone());
                });
                Err(message)
            }
        }
    }
}

impl Observable for ProductsViewModel {
    fn observe(&self, callback: Rc<dyn Fn()>) -> SubscriptionId {
        self.state.observe(callback)
    }

    fn unobserve(&self, id: SubscriptionId) {
        self.state.unobserve(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::Method;
    use crate::testing::{harness, harness_with_query, Harness};
    use futures::executor::block_on;
    use serde_json::{json, Value};
    use std::cell::Cell;

    fn view_model(h: &Harness) -> ProductsViewModel {
        ProductsViewModel::new(
            h.client.clone(),
            ProductService::new(h.api.clone()),
            h.navigator.clone(),
            10,
        )
    }

    fn page_json(ids: &[u64], total: u64, skip: u64) -> Value {
        let products: Vec<Value> = ids
            .iter()
            .map(|id| json!({"id": id, "title": format!("Product {}", id), "price": 9.99, "stock": 20, "category": "beauty"}))
            .collect();
        json!({"products": products, "total": total, "skip": skip, "limit": 10})
    }

    #[test]
    fn initial_state_comes_from_url() {
        let h = harness_with_query("?search=phone&page=2");
        let vm = view_model(&h);

        let filter = vm.filter();
        assert_eq!(filter.search, "phone");
        assert_eq!(filter.category, "");
        assert_eq!(filter.page, 2);
        assert_eq!(vm.state().pending_deletion, None);
    }

    #[test]
    fn filter_changes_reset_page_and_update_url() {
        let h = harness_with_query("?page=4");
        let vm = view_model(&h);

        vm.set_filter(FilterChange::Category("beauty".into()));
        assert_eq!(vm.filter().page, 1);
        vm.set_filter(FilterChange::Page(3));
        vm.set_filter(FilterChange::Search("red".into()));
        assert_eq!(vm.filter().page, 1);
        vm.set_filter(FilterChange::Page(0));
        assert_eq!(vm.filter().page, 1);

        assert_eq!(
            h.navigator.pushed_queries().last().map(String::as_str),
            Some("search=red&category=beauty&page=1")
        );
    }

    #[test]
    fn sync_from_query_does_not_write_url() {
        let h = harness();
        let vm = view_model(&h);

        vm.sync_from_query("?category=laptops&page=2");

        assert_eq!(vm.filter().category, "laptops");
        assert_eq!(vm.filter().page, 2);
        assert!(h.navigator.pushed_queries().is_empty());
    }

    #[test]
    fn bare_route_navigation_resets_filters() {
        let h = harness_with_query("?search=phone&category=beauty&page=3");
        let vm = view_model(&h);
        let notified = Rc::new(Cell::new(0));
        let counter = notified.clone();
        vm.observe(Rc::new(move || counter.set(counter.get() + 1)));

        // Eco de nuestro propio push: sin cambios
        vm.set_filter(FilterChange::Page(4));
        vm.sync_from_query(&h.navigator.current_query());
        assert_eq!(notified.get(), 1);

        vm.sync_from_query("");
        let filter = vm.filter();
        assert_eq!(filter.search, "");
        assert_eq!(filter.category, "");
        assert_eq!(filter.page, 1);
        assert_eq!(notified.get(), 2);
        assert_eq!(h.navigator.pushed_queries().len(), 1);
    }

    #[test]
    fn search_wins_over_category() {
        let h = harness_with_query("?search=lamp&category=furniture&page=3");
        let vm = view_model(&h);

        assert_eq!(
            vm.endpoint(),
            Endpoint::SearchProducts { query: "lamp".into(), limit: 10, skip: 20 }
        );

        vm.set_filter(FilterChange::Search(String::new()));
        assert_eq!(
            vm.endpoint(),
            Endpoint::ProductsByCategory { slug: "furniture".into(), limit: 10, skip: 0 }
        );

        vm.set_filter(FilterChange::Category(String::new()));
        assert_eq!(vm.endpoint(), Endpoint::Products { limit: 10, skip: 0 });
    }

    #[test]
    fn query_key_tracks_filters() {
        let h = harness_with_query("?search=a&category=b&page=2");
        let vm = view_model(&h);
        assert_eq!(
            vm.query_key(),
            QueryKey::new("products").with("a").with("b").with(2u32)
        );
    }

    #[test]
    fn pagination_bounds() {
        let first = Pagination::compute(1, 10, 25);
        assert_eq!((first.first_item, first.last_item), (1, 10));
        assert!(!first.has_previous);
        assert!(first.has_next);

        let last = Pagination::compute(3, 10, 25);
        assert_eq!((last.first_item, last.last_item), (21, 25));
        assert!(last.has_previous);
        assert!(!last.has_next);

        let empty = Pagination::compute(1, 10, 0);
        assert_eq!((empty.first_item, empty.last_item), (0, 0));
        assert!(!empty.has_next);
    }

    #[test]
    fn pagination_uses_loaded_total() {
        let h = harness();
        h.transport.reply(Method::Get, "/products?limit=10&skip=0", 200, page_json(&[1, 2], 25, 0));
        let vm = view_model(&h);

        assert!(!vm.pagination().has_next);
        block_on(vm.load_products()).unwrap();
        assert!(vm.pagination().has_next);

        vm.next_page();
        assert_eq!(vm.filter().page, 2);
        vm.previous_page();
        assert_eq!(vm.filter().page, 1);
        vm.previous_page();
        assert_eq!(vm.filter().page, 1);
    }

    #[test]
    fn concurrent_loads_share_one_request() {
        let h = harness();
        h.transport.set_delay(true);
        h.transport.reply(Method::Get, "/products?limit=10&skip=0", 200, page_json(&[1], 1, 0));
        let vm = view_model(&h);

        let (a, b) = block_on(async { futures::join!(vm.load_products(), vm.load_products()) });

        assert_eq!(a, b);
        assert_eq!(h.transport.call_count(Method::Get, "/products?limit=10&skip=0"), 1);
    }

    #[test]
    fn categories_are_cached() {
        let h = harness();
        h.transport.reply(Method::Get, "/products/categories", 200, json!(["beauty", "home-decoration"]));
        let vm = view_model(&h);

        block_on(vm.load_categories()).unwrap();
        let categories = block_on(vm.load_categories()).unwrap();

        assert_eq!(categories[1].name, "Home Decoration");
        assert_eq!(vm.categories().data.map(|c| c.len()), Some(2));
        assert_eq!(h.transport.call_count(Method::Get, "/products/categories"), 1);
    }

    #[test]
    fn confirmed_delete_invalidates_and_refetches() {
        let h = harness();
        h.transport.reply(Method::Get, "/products?limit=10&skip=0", 200, page_json(&[1, 2, 3], 3, 0));
        h.transport.reply(Method::Get, "/products?limit=10&skip=0", 200, page_json(&[1, 2], 2, 0));
        h.transport.reply(Method::Delete, "/products/3", 200, json!({"id": 3, "title": "Product 3", "isDeleted": true}));
        let vm = view_model(&h);
        block_on(vm.load_products()).unwrap();

        vm.request_delete(3);
        block_on(vm.confirm_delete()).unwrap();

        let state = vm.state();
        assert_eq!(state.pending_deletion, None);
        assert!(!state.deleting);
        let products = vm.products();
        assert!(!products.is_stale);
        assert_eq!(products.data.map(|p| p.total), Some(2));
        assert_eq!(h.transport.call_count(Method::Get, "/products?limit=10&skip=0"), 2);
    }

    #[test]
    fn delete_with_bare_success_body_still_refreshes() {
        for body in [json!({}), json!(null), json!({"message": "Product deleted"})] {
            let h = harness();
            h.transport.reply(Method::Get, "/products?limit=10&skip=0", 200, page_json(&[1, 2, 3], 3, 0));
            h.transport.reply(Method::Get, "/products?limit=10&skip=0", 200, page_json(&[1, 2], 2, 0));
            h.transport.reply(Method::Delete, "/products/3", 200, body);
            let vm = view_model(&h);
            block_on(vm.load_products()).unwrap();

            vm.request_delete(3);
            assert_eq!(block_on(vm.confirm_delete()), Ok(()));

            let state = vm.state();
            assert_eq!(state.pending_deletion, None);
            assert_eq!(state.delete_error, None);
            assert_eq!(vm.products().data.map(|p| p.total), Some(2));
            assert_eq!(h.transport.call_count(Method::Get, "/products?limit=10&skip=0"), 2);
        }
    }

    #[test]
    fn failed_delete_keeps_pending_and_list() {
        let h = harness();
        h.transport.reply(Method::Get, "/products?limit=10&skip=0", 200, page_json(&[1, 2, 3], 3, 0));
        h.transport.reply(Method::Delete, "/products/3", 500, json!({"message": "Delete failed"}));
        let vm = view_model(&h);
        block_on(vm.load_products()).unwrap();

        vm.request_delete(3);
        let err = block_on(vm.confirm_delete()).unwrap_err();

        assert_eq!(err, "Delete failed");
        let state = vm.state();
        assert_eq!(state.pending_deletion, Some(3));
        assert_eq!(state.delete_error.as_deref(), Some("Delete failed"));
        assert!(!state.deleting);
        assert_eq!(vm.products().data.map(|p| p.products.len()), Some(3));
        assert!(!vm.products().is_stale);
        assert_eq!(h.transport.call_count(Method::Delete, "/products/3"), 1);
        assert_eq!(h.transport.call_count(Method::Get, "/products?limit=10&skip=0"), 1);
    }

    #[test]
    fn confirm_without_pending_is_noop() {
        let h = harness();
        let vm = view_model(&h);
        assert_eq!(block_on(vm.confirm_delete()), Ok(()));
        assert!(h.transport.calls().is_empty());
    }

    #[test]
    fn cancel_clears_error() {
        let h = harness();
        h.transport.fail(Method::Delete, "/products/5", "offline");
        let vm = view_model(&h);

        vm.request_delete(5);
        assert!(block_on(vm.confirm_delete()).is_err());
        vm.cancel_delete();

        let state = vm.state();
        assert_eq!(state.pending_deletion, None);
        assert_eq!(state.delete_error, None);
    }
}
