//! Store category service.

use async_trait::async_trait;
use tracing::instrument;

use full_colombiano_core::{CategoryId, StoreCategory};

use super::{MockLatency, ServiceError};

/// `(id, name, slug, description)` for each store category.
const CATEGORIES: &[(&str, &str, &str, Option<&str>)] = &[
    ("1", "Moda y accesorios", "moda-y-accesorios", Some("Ropa, calzado, bolsos y joyería")),
    ("2", "Alimentos y bebidas", "alimentos-y-bebidas", Some("Café, cacao, dulces típicos y bebidas")),
    ("3", "Artesanías", "artesanias", Some("Mochilas, sombreros, cerámica y tejidos hechos a mano")),
    ("4", "Hogar y decoración", "hogar-y-decoracion", Some("Muebles, textiles y objetos decorativos")),
    ("5", "Belleza y cuidado personal", "belleza-y-cuidado-personal", None),
    ("6", "Tecnología", "tecnologia", Some("Electrónica, accesorios y gadgets")),
    ("7", "Deportes y aire libre", "deportes-y-aire-libre", None),
    ("8", "Juguetes y bebés", "juguetes-y-bebes", None),
    ("9", "Mascotas", "mascotas", Some("Alimento, accesorios y cuidado para mascotas")),
    ("10", "Salud y bienestar", "salud-y-bienestar", None),
];

/// Source of marketplace store categories.
#[async_trait]
pub trait CategoryService: Send + Sync {
    /// All store categories, in display order.
    async fn categories(&self) -> Result<Vec<StoreCategory>, ServiceError>;

    /// A single category, if it exists.
    async fn category(&self, id: &CategoryId) -> Result<Option<StoreCategory>, ServiceError>;
}

/// Category service answering from a static list after a simulated delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCategoryService {
    latency: MockLatency,
}

impl MockCategoryService {
    #[must_use]
    pub const fn new(latency: MockLatency) -> Self {
        Self { latency }
    }
}

fn to_category(row: &(&str, &str, &str, Option<&str>)) -> StoreCategory {
    let (id, name, slug, description) = *row;
    StoreCategory {
        id: CategoryId::new(id),
        name: name.to_string(),
        slug: slug.to_string(),
        description: description.map(str::to_string),
    }
}

#[async_trait]
impl CategoryService for MockCategoryService {
    #[instrument(skip(self))]
    async fn categories(&self) -> Result<Vec<StoreCategory>, ServiceError> {
        self.latency.wait().await;
        Ok(CATEGORIES.iter().map(to_category).collect())
    }

    #[instrument(skip(self, id), fields(category_id = %id))]
    async fn category(&self, id: &CategoryId) -> Result<Option<StoreCategory>, ServiceError> {
        self.latency.wait().await;
        Ok(CATEGORIES
            .iter()
            .find(|(code, ..)| *code == id.as_str())
            .map(to_category))
    }
}
