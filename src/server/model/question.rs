//! Question domain models and parameters.
//!
//! Provides the question domain model, the paginated listing model and the validated
//! parameter types for creation and search. Validation lives in the `from_dto`
//! constructors so controllers hand the service layer only well-formed input.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::{
    model::question::{CreateQuestionDto, QuestionDto, SearchQuestionsDto},
    server::error::{validation::ValidationError, AppError},
};

/// A single trivia item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id as text; may reference a category that does not exist.
    pub category: String,
    pub difficulty: i32,
}

impl Question {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::question::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            category: entity.category,
            difficulty: entity.difficulty,
        }
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// One page of questions along with the listing context.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Number of questions across all pages.
    pub total: u64,
    /// Every category as `{id: type}`.
    pub categories: BTreeMap<i32, String>,
}

/// Validated input for creating a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateQuestionParams {
    pub question: String,
    pub answer: String,
    /// Category id as it will be stored.
    pub category: String,
    pub difficulty: i32,
}

impl CreateQuestionParams {
    /// Applies the creation rules to a request body.
    ///
    /// Rules are checked in field order and the first failure is returned.
    ///
    /// # Returns
    /// - `Ok(CreateQuestionParams)` - Every field present, truthy and well-typed
    /// - `Err(ValidationError)` - The rule that rejected the body
    pub fn from_dto(dto: CreateQuestionDto) -> Result<Self, ValidationError> {
        Ok(Self {
            question: question_rule(dto.question)?,
            answer: answer_rule(dto.answer)?,
            category: category_rule(dto.category)?,
            difficulty: difficulty_rule(dto.difficulty)?,
        })
    }
}

/// Validated input for a question search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuestionsParams {
    /// Substring to look for; empty matches every question.
    pub term: String,
}

impl SearchQuestionsParams {
    /// Extracts the search term.
    ///
    /// # Returns
    /// - `Ok(SearchQuestionsParams)` - `searchTerm` was a string (possibly empty)
    /// - `Err(AppError::BadRequest)` - `searchTerm` key absent
    /// - `Err(AppError::UnprocessableEntity)` - `searchTerm` present but not a string
    pub fn from_dto(dto: SearchQuestionsDto) -> Result<Self, AppError> {
        match dto.search_term {
            None => Err(AppError::BadRequest(
                "Search body is missing searchTerm".to_string(),
            )),
            Some(Value::String(term)) => Ok(Self { term }),
            Some(other) => Err(AppError::UnprocessableEntity(format!(
                "searchTerm must be a string, got {}",
                other
            ))),
        }
    }
}

/// JSON truthiness: null, false, 0, "", [] and {} are all falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn truthy(value: Option<Value>) -> Option<Value> {
    value.filter(is_truthy)
}

fn question_rule(value: Option<Value>) -> Result<String, ValidationError> {
    match truthy(value) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(ValidationError::QuestionRequired),
    }
}

fn answer_rule(value: Option<Value>) -> Result<String, ValidationError> {
    match truthy(value) {
        Some(Value::String(s)) => Ok(s),
        _ => Err(ValidationError::AnswerRequired),
    }
}

fn category_rule(value: Option<Value>) -> Result<String, ValidationError> {
    match truthy(value) {
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(ValidationError::CategoryRequired),
    }
}

fn difficulty_rule(value: Option<Value>) -> Result<i32, ValidationError> {
    let difficulty = match truthy(value) {
        Some(Value::Number(n)) => n.as_i64().and_then(|d| i32::try_from(d).ok()),
        Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
        _ => None,
    };

    difficulty
        .filter(|d| *d != 0)
        .ok_or(ValidationError::DifficultyRequired)
}
