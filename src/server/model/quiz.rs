//! Quiz play parameters.
//!
//! Quiz sessions are stateless: the caller resubmits the ids it has already seen on
//! every turn, together with the category it is playing.

use serde_json::Value;

use crate::{model::quiz::PlayQuizDto, server::error::AppError};

/// Which questions a quiz draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizCategory {
    /// Every question regardless of category.
    All,
    /// Questions whose stored category text equals this id.
    Only(String),
}

/// Validated input for one quiz turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayQuizParams {
    /// Question ids to exclude from the draw.
    pub previous_questions: Vec<i32>,
    pub category: QuizCategory,
}

impl PlayQuizParams {
    /// Interprets a raw quiz request body.
    ///
    /// The body must be a JSON object with at least one key; anything else is
    /// unprocessable. The object is then read as a `PlayQuizDto`.
    ///
    /// # Returns
    /// - `Ok(PlayQuizParams)` - Parameters ready for candidate selection
    /// - `Err(AppError::UnprocessableEntity)` - Empty or non-object body, or a field of
    ///   the wrong shape
    pub fn from_body(body: Value) -> Result<Self, AppError> {
        match &body {
            Value::Object(map) if !map.is_empty() => {}
            other => {
                return Err(AppError::UnprocessableEntity(format!(
                    "Quiz body must be a non-empty object, got {}",
                    other
                )))
            }
        }

        let dto: PlayQuizDto = serde_json::from_value(body)
            .map_err(|e| AppError::UnprocessableEntity(e.to_string()))?;

        Self::from_dto(dto)
    }

    /// Interprets the fields of a quiz request.
    ///
    /// - `previous_questions` absent is an empty list; otherwise it must be an array of
    ///   integers.
    /// - `quiz_category` absent or `null`, or an object whose `id` is `0`, `"0"` or
    ///   `""`, selects all categories; any other integer or string `id` filters by it.
    ///
    /// # Returns
    /// - `Ok(PlayQuizParams)` - Parameters ready for candidate selection
    /// - `Err(AppError::UnprocessableEntity)` - A field of the wrong shape
    pub fn from_dto(dto: PlayQuizDto) -> Result<Self, AppError> {
        let previous_questions = match dto.previous_questions {
            None => Vec::new(),
            Some(Value::Array(ids)) => ids
                .iter()
                .map(question_id)
                .collect::<Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(AppError::UnprocessableEntity(format!(
                    "previous_questions must be an array, got {}",
                    other
                )))
            }
        };

        let category = match dto.quiz_category {
            None | Some(Value::Null) => QuizCategory::All,
            Some(Value::Object(map)) => match map.get("id") {
                Some(id) => category_filter(id)?,
                None => {
                    return Err(AppError::UnprocessableEntity(
                        "quiz_category is missing id".to_string(),
                    ))
                }
            },
            Some(other) => {
                return Err(AppError::UnprocessableEntity(format!(
                    "quiz_category must be an object, got {}",
                    other
                )))
            }
        };

        Ok(Self {
            previous_questions,
            category,
        })
    }
}

fn question_id(value: &Value) -> Result<i32, AppError> {
    value
        .as_i64()
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(|| {
            AppError::UnprocessableEntity(format!("Invalid question id in previous_questions: {}", value))
        })
}

fn category_filter(id: &Value) -> Result<QuizCategory, AppError> {
    let id = match id {
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => {
            return Err(AppError::UnprocessableEntity(format!(
                "quiz_category id must be an integer or string, got {}",
                other
            )))
        }
    };

    if id.is_empty() || id == "0" {
        Ok(QuizCategory::All)
    } else {
        Ok(QuizCategory::Only(id))
    }
}
