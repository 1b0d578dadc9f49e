use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of a caller-supplied catalog (opportunity type, LGA, ...)
///
/// Catalogs are injected per call and never cached by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            definition: None,
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }
}

/// Check whether `id` names an entry of `catalog` (exact match)
pub fn catalog_contains(catalog: &[CatalogEntry], id: &str) -> bool {
    catalog.iter().any(|entry| entry.id == id)
}
