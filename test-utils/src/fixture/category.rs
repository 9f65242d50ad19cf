//! Category fixtures for creating in-memory test data.

use entity::category;

/// Default test category display name.
pub const DEFAULT_KIND: &str = "Science";

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - kind: `"Science"`
pub fn entity() -> category::Model {
    category::Model {
        id: 1,
        kind: DEFAULT_KIND.to_string(),
    }
}

/// Creates a category entity builder for customization.
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder::default()
}

/// Builder for creating customized category entity models.
pub struct CategoryEntityBuilder {
    id: i32,
    kind: String,
}

impl Default for CategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            kind: DEFAULT_KIND.to_string(),
        }
    }
}

impl CategoryEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn build(self) -> category::Model {
        category::Model {
            id: self.id,
            kind: self.kind,
        }
    }
}
