use serde::{Deserialize, Deserializer, Serialize};

/// Categoría normalizada a `{slug, name}`.
///
/// `GET /products/categories` devuelve objetos `{slug, name, url}` o, en
/// versiones antiguas del API, cadenas sueltas. Ambas formas se reducen a
/// este tipo al deserializar.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct Category {
    pub slug: String,
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Object {
        slug: String,
        #[serde(default)]
        name: Option<String>,
    },
    Slug(String),
}

impl Category {
    pub fn from_slug(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            name: title_case(slug),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawCategory::deserialize(deserializer)? {
            RawCategory::Object { slug, name } => match name {
                Some(name) if !name.is_empty() => Category { slug, name },
                _ => Category::from_slug(&slug),
            },
            RawCategory::Slug(slug) => Category::from_slug(&slug),
        })
    }
}

// "home-decoration" -> "Home Decoration"
fn title_case(slug: &str) -> String {
    slug.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
