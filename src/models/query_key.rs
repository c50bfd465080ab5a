use std::fmt;

/// Segmento de una clave de consulta
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum KeySegment {
    Text(String),
    Number(u64),
}

impl From<&str> for KeySegment {
    fn from(value: &str) -> Self {
        KeySegment::Text(value.to_string())
    }
}

impl From<String> for KeySegment {
    fn from(value: String) -> Self {
        KeySegment::Text(value)
    }
}

impl From<&String> for KeySegment {
    fn from(value: &String) -> Self {
        KeySegment::Text(value.clone())
    }
}

impl From<u32> for KeySegment {
    fn from(value: u32) -> Self {
        KeySegment::Number(u64::from(value))
    }
}

impl From<u64> for KeySegment {
    fn from(value: u64) -> Self {
        KeySegment::Number(value)
    }
}

/// Identificador determinista de un recurso cacheable,
/// p. ej. `["products", search, category, page]`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct QueryKey(Vec<KeySegment>);

impl QueryKey {
    pub fn new(root: impl Into<KeySegment>) -> Self {
        QueryKey(vec![root.into()])
    }

    pub fn with(mut self, segment: impl Into<KeySegment>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Coincidencia por segmentos completos: `["products"]` es prefijo de
    /// `["products", "", "", 1]` pero no de `["products-stats"]`.
    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match segment {
                KeySegment::Text(text) => write!(f, "{:?}", text)?,
                KeySegment::Number(number) => write!(f, "{}", number)?,
            }
        }
        f.write_str("]")
    }
}
