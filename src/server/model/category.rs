//! Category domain model.
//!
//! Categories are seeded at migration time and read-only from the API; the model is
//! only ever built from entities and flattened into the id-to-name mapping.

use std::collections::BTreeMap;

/// A named grouping for questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    /// Display name (the `type` column).
    pub kind: String,
}

impl Category {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            kind: entity.kind,
        }
    }

    /// Flattens categories into the `{id: type}` mapping returned by the API.
    pub fn into_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
        categories.into_iter().map(|c| (c.id, c.kind)).collect()
    }
}
