use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::model::api::present;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id as stored text.
    pub category: String,
    pub difficulty: i32,
}

/// Response for `GET /questions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedQuestionsDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    /// Number of questions across all pages.
    pub total_questions: u64,
    pub categories: BTreeMap<i32, String>,
    /// Always null; listing spans all categories.
    pub current_category: Option<i32>,
}

/// Response for search and per-category listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionListDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
    pub current_category: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedQuestionDto {
    pub success: bool,
    pub created: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeletedQuestionDto {
    pub success: bool,
    pub deleted: i32,
}

/// Request body for `POST /questions`.
///
/// Fields are kept as raw JSON so validation can apply the truthiness rules to
/// whatever the client sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub answer: Option<Value>,
    /// Category id, as a string or an integer.
    #[serde(default)]
    pub category: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
}

/// Request body for `POST /questions/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    /// `None` when the key is absent; `Some(Value::Null)` when sent as null.
    #[serde(rename = "searchTerm", default, deserialize_with = "present")]
    pub search_term: Option<Value>,
}
