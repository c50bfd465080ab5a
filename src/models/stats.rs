// ============================================================================
// DASHBOARD STATS - Agregados sobre una muestra de productos
// ============================================================================

use crate::models::product::Product;

const TOP_CATEGORIES: usize = 5;
const TOP_RATED: usize = 10;
const TITLE_MAX_CHARS: usize = 15;

/// Una barra del gráfico. `key` es único dentro de la serie; `name` puede
/// repetirse (títulos truncados).
#[derive(Clone, PartialEq, Debug)]
pub struct ChartPoint {
    pub key: String,
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    fn labelled(name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        Self { key: name.clone(), name, value }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct DashboardStats {
    pub total_products: u64,
    pub total_users: u64,
    pub low_stock: usize,
    /// Precio medio con dos decimales ("0.00" si la muestra está vacía)
    pub average_price: String,
    pub top_categories: Vec<ChartPoint>,
    pub price_ranges: Vec<ChartPoint>,
    pub top_rated: Vec<ChartPoint>,
}

impl DashboardStats {
    pub fn compute(
        total_products: u64,
        total_users: u64,
        products: &[Product],
        low_stock_threshold: u32,
    ) -> Self {
        let low_stock = products
            .iter()
            .filter(|p| p.is_low_stock(low_stock_threshold))
            .count();

        let sum: f64 = products.iter().map(|p| p.price).sum();
        let average = sum / products.len().max(1) as f64;

        Self {
            total_products,
            total_users,
            low_stock,
            average_price: format!("{:.2}", average),
            top_categories: top_categories(products),
            price_ranges: price_ranges(products),
            top_rated: top_rated(products),
        }
    }
}

// Conteo por categoría en orden de primera aparición
fn top_categories(products: &[Product]) -> Vec<ChartPoint> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for product in products {
        match counts.iter_mut().find(|(name, _)| *name == product.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((product.category.clone(), 1)),
        }
    }
    counts
        .into_iter()
        .take(TOP_CATEGORIES)
        .map(|(name, count)| ChartPoint::labelled(name, count as f64))
        .collect()
}

fn price_ranges(products: &[Product]) -> Vec<ChartPoint> {
    let count = |predicate: &dyn Fn(f64) -> bool| {
        products.iter().filter(|p| predicate(p.price)).count() as f64
    };
    vec![
        ChartPoint::labelled("$0-50", count(&|price| price <= 50.0)),
        ChartPoint::labelled("$51-200", count(&|price| price > 50.0 && price <= 200.0)),
        ChartPoint::labelled("$201-500", count(&|price| price > 200.0 && price <= 500.0)),
        ChartPoint::labelled("$500+", count(&|price| price > 500.0)),
    ]
}

fn top_rated(products: &[Product]) -> Vec<ChartPoint> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    // sort_by es estable: empates conservan el orden original
    sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    sorted
        .into_iter()
        .take(TOP_RATED)
        .map(|p| ChartPoint {
            key: p.id.to_string(),
            name: p.title.chars().take(TITLE_MAX_CHARS).collect(),
            value: p.rating,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, category: &str, price: f64, stock: u32, rating: f64) -> Product {
        Product {
            id,
            title: format!("Product number {id} deluxe"),
            description: String::new(),
            price,
            stock,
            category: category.into(),
            rating,
            thumbnail: String::new(),
            brand: None,
            discount_percentage: None,
        }
    }

    #[test]
    fn cards_and_buckets() {
        let products = vec![
            product(1, "beauty", 10.0, 5, 4.0),
            product(2, "beauty", 50.0, 50, 3.0),
            product(3, "laptops", 51.0, 9, 4.5),
            product(4, "laptops", 500.0, 10, 2.0),
            product(5, "phones", 999.99, 100, 5.0),
        ];

        let stats = DashboardStats::compute(194, 208, &products, 10);

        assert_eq!(stats.total_products, 194);
        assert_eq!(stats.total_users, 208);
        assert_eq!(stats.low_stock, 2);
        assert_eq!(stats.average_price, "322.20");

        let ranges: Vec<f64> = stats.price_ranges.iter().map(|p| p.value).collect();
        assert_eq!(ranges, vec![2.0, 1.0, 1.0, 1.0]);

        let categories: Vec<(&str, f64)> = stats
            .top_categories
            .iter()
            .map(|p| (p.name.as_str(), p.value))
            .collect();
        assert_eq!(categories, vec![("beauty", 2.0), ("laptops", 2.0), ("phones", 1.0)]);
    }

    #[test]
    fn empty_sample_averages_to_zero() {
        let stats = DashboardStats::compute(0, 0, &[], 10);
        assert_eq!(stats.average_price, "0.00");
        assert!(stats.top_categories.is_empty());
        assert!(stats.top_rated.is_empty());
    }

    #[test]
    fn top_lists_are_capped() {
        let products: Vec<Product> = (0..12)
            .map(|i| product(i, &format!("cat-{i}"), 1.0, 1, i as f64 / 2.0))
            .collect();
        let stats = DashboardStats::compute(12, 0, &products, 10);

        assert_eq!(stats.top_categories.len(), 5);
        assert_eq!(stats.top_categories[0].name, "cat-0");
        assert_eq!(stats.top_rated.len(), 10);
        assert_eq!(stats.top_rated[0].value, 5.5);
        assert_eq!(stats.top_rated[0].name.chars().count(), 15);
    }

    #[test]
    fn top_rated_keys_stay_distinct_for_shared_title_prefixes() {
        let products: Vec<Product> = ["Samsung Galaxy S7", "Samsung Galaxy S8", "Samsung Galaxy S10"]
            .into_iter()
            .enumerate()
            .map(|(i, title)| Product {
                title: title.into(),
                ..product(i as u64 + 1, "smartphones", 499.0, 20, 4.0)
            })
            .collect();
        let stats = DashboardStats::compute(3, 0, &products, 10);

        let names: Vec<&str> = stats.top_rated.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Samsung Galaxy ", "Samsung Galaxy ", "Samsung Galaxy "]);
        let keys: Vec<&str> = stats.top_rated.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }

    #[test]
    fn label_series_key_by_label() {
        let stats = DashboardStats::compute(0, 0, &[product(1, "beauty", 10.0, 5, 4.0)], 10);
        assert_eq!(stats.top_categories[0].key, "beauty");
        let keys: Vec<&str> = stats.price_ranges.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["$0-50", "$51-200", "$201-500", "$500+"]);
    }
}
