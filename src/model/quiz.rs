use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::model::{api::present, question::QuestionDto};

/// Request body for `POST /quizzes`.
///
/// Both fields separate an absent key (`None`) from an explicit null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PlayQuizDto {
    /// Ids of questions already asked in this quiz.
    #[serde(default, deserialize_with = "present")]
    pub previous_questions: Option<Value>,
    /// `{"id": .., "type": ..}`; an id of 0 or a null value means all categories.
    #[serde(default, deserialize_with = "present")]
    pub quiz_category: Option<Value>,
}

/// Response for `POST /quizzes`. `question` is null once the quiz is exhausted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuizQuestionDto {
    pub success: bool,
    pub question: Option<QuestionDto>,
}
