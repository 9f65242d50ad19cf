//! Question fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating question entity models without database
//! insertion. These are useful for unit testing selection logic and as factory defaults.

use entity::question;

/// Default test question text.
pub const DEFAULT_QUESTION: &str = "What is the largest planet in our solar system?";

/// Default test answer.
pub const DEFAULT_ANSWER: &str = "Jupiter";

/// Default category id, as stored text.
pub const DEFAULT_CATEGORY: &str = "1";

/// Default difficulty.
pub const DEFAULT_DIFFICULTY: i32 = 3;

/// Creates a question entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - question: `"What is the largest planet in our solar system?"`
/// - answer: `"Jupiter"`
/// - category: `"1"`
/// - difficulty: `3`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let question = fixture::question::entity();
/// assert_eq!(question.answer, "Jupiter");
/// ```
pub fn entity() -> question::Model {
    question::Model {
        id: 1,
        question: DEFAULT_QUESTION.to_string(),
        answer: DEFAULT_ANSWER.to_string(),
        category: DEFAULT_CATEGORY.to_string(),
        difficulty: DEFAULT_DIFFICULTY,
    }
}

/// Creates a question entity builder for customization.
pub fn entity_builder() -> QuestionEntityBuilder {
    QuestionEntityBuilder::default()
}

/// Builder for creating customized question entity models.
///
/// All fields have sensible defaults that can be overridden.
pub struct QuestionEntityBuilder {
    id: i32,
    question: String,
    answer: String,
    category: String,
    difficulty: i32,
}

impl Default for QuestionEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            question: DEFAULT_QUESTION.to_string(),
            answer: DEFAULT_ANSWER.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

impl QuestionEntityBuilder {
    /// Sets the question ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the question text.
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    /// Sets the answer text.
    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    /// Sets the category reference.
    ///
    /// # Arguments
    /// - `category` - Category id as text; it is not checked against any category row
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the difficulty.
    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Builds and returns the question entity model.
    pub fn build(self) -> question::Model {
        question::Model {
            id: self.id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
