use thiserror::Error;

/// Rules a new question must satisfy, one variant per rule.
///
/// Each field must be present and truthy: empty strings, zero and null are rejected
/// alongside missing keys. A difficulty of 0 is therefore invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Question text must be a non-empty string")]
    QuestionRequired,

    #[error("Answer must be a non-empty string")]
    AnswerRequired,

    #[error("Category must be a non-empty string or a non-zero integer")]
    CategoryRequired,

    #[error("Difficulty must be a non-zero integer")]
    DifficultyRequired,
}
