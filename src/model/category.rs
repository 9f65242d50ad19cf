use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Response for `GET /categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoriesDto {
    pub success: bool,
    /// Category display names keyed by category id.
    pub categories: BTreeMap<i32, String>,
}
