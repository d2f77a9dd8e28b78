//! Store categories used to classify seller storefronts.

use serde::{Deserialize, Serialize};

use super::id::CategoryId;

/// A marketplace store category (e.g. "Moda y accesorios").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreCategory {
    pub id: CategoryId,
    pub name: String,
    /// URL-safe identifier used in marketplace filters.
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
