use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub discount_percentage: Option<f64>,
}

impl Product {
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.stock < threshold
    }
}

/// Página de productos. La devuelven `/products`, `/products/search` y
/// `/products/category/{slug}`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// Respuesta de `DELETE /products/{id}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeletedProduct {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub deleted_on: Option<String>,
}
