// ============================================================================
// ENDPOINTS - Contrato REST del catálogo
// ============================================================================

use crate::services::transport::Method;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Products { limit: u32, skip: u64 },
    SearchProducts { query: String, limit: u32, skip: u64 },
    ProductsByCategory { slug: String, limit: u32, skip: u64 },
    Categories,
    DeleteProduct { id: u64 },
    Users { limit: u32 },
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login => Method::Post,
            Endpoint::DeleteProduct { .. } => Method::Delete,
            _ => Method::Get,
        }
    }

    /// Segmentos de ruta sin codificar; ApiClient los codifica al montar la URL
    pub fn segments(&self) -> Vec<String> {
        match self {
            Endpoint::Login => vec!["auth".into(), "login".into()],
            Endpoint::Products { .. } => vec!["products".into()],
            Endpoint::SearchProducts { .. } => vec!["products".into(), "search".into()],
            Endpoint::ProductsByCategory { slug, .. } => {
                vec!["products".into(), "category".into(), slug.clone()]
            }
            Endpoint::Categories => vec!["products".into(), "categories".into()],
            Endpoint::DeleteProduct { id } => vec!["products".into(), id.to_string()],
            Endpoint::Users { .. } => vec!["users".into()],
        }
    }

    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Endpoint::Products { limit, skip } | Endpoint::ProductsByCategory { limit, skip, .. } => {
                vec![("limit", limit.to_string()), ("skip", skip.to_string())]
            }
            Endpoint::SearchProducts { query, limit, skip } => vec![
                ("q", query.clone()),
                ("limit", limit.to_string()),
                ("skip", skip.to_string()),
            ],
            Endpoint::Users { limit } => vec![("limit", limit.to_string())],
            Endpoint::Login | Endpoint::Categories | Endpoint::DeleteProduct { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods() {
        assert_eq!(Endpoint::Login.method(), Method::Post);
        assert_eq!(Endpoint::DeleteProduct { id: 3 }.method(), Method::Delete);
        assert_eq!(Endpoint::Categories.method(), Method::Get);
    }

    #[test]
    fn search_carries_query_and_paging() {
        let endpoint = Endpoint::SearchProducts { query: "phone".into(), limit: 10, skip: 20 };
        assert_eq!(endpoint.segments(), vec!["products", "search"]);
        assert_eq!(
            endpoint.query(),
            vec![("q", "phone".to_string()), ("limit", "10".to_string()), ("skip", "20".to_string())]
        );
    }
}
