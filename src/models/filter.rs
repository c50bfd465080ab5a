// ============================================================================
// FILTER STATE - Estado de filtros de la vista de productos
// ============================================================================
// La URL es la única persistencia de la vista: `?search=&category=&page=`.
// `to_query` / `from_query` son puras y no tocan el navegador.
// ============================================================================

use url::form_urlencoded;

pub const PARAM_SEARCH: &str = "search";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_PAGE: &str = "page";

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FilterState {
    pub search: String,
    pub category: String,
    /// Siempre >= 1
    pub page: u32,
}

/// Cambio iniciado por el usuario
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FilterChange {
    Search(String),
    Category(String),
    Page(u32),
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: String::new(),
            page: 1,
        }
    }
}

impl FilterState {
    /// Aplica un cambio. Todo cambio que no sea de página vuelve a la página 1.
    pub fn apply(&self, change: FilterChange) -> FilterState {
        let mut next = self.clone();
        match change {
            FilterChange::Search(search) => {
                next.search = search;
                next.page = 1;
            }
            FilterChange::Category(category) => {
                next.category = category;
                next.page = 1;
            }
            FilterChange::Page(page) => {
                next.page = page.max(1);
            }
        }
        next
    }

    /// Offset de la página actual para un tamaño de página dado
    pub fn skip(&self, limit: u32) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(limit)
    }

    /// Serializa a query string (sin `?`). Se omiten los filtros vacíos.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            serializer.append_pair(PARAM_SEARCH, &self.search);
        }
        if !self.category.is_empty() {
            serializer.append_pair(PARAM_CATEGORY, &self.category);
        }
        serializer.append_pair(PARAM_PAGE, &self.page.to_string());
        serializer.finish()
    }

    /// Lee el estado desde una query string, con o sin `?` inicial.
    /// Parámetros ausentes o inválidos toman el valor por defecto; si un
    /// parámetro se repite gana la primera aparición.
    pub fn from_query(query: &str) -> FilterState {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut search = None;
        let mut category = None;
        let mut page = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                PARAM_SEARCH if search.is_none() => search = Some(value.into_owned()),
                PARAM_CATEGORY if category.is_none() => category = Some(value.into_owned()),
                PARAM_PAGE if page.is_none() => page = Some(value.trim().parse::<u32>().unwrap_or(1)),
                _ => {}
            }
        }

        FilterState {
            search: search.unwrap_or_default(),
            category: category.unwrap_or_default(),
            page: page.unwrap_or(1).max(1),
        }
    }
}
