//! Question factory for creating test question entities.
//!
//! Provides factory methods for inserting question entities with sensible defaults.
//! Default values are sourced from the question fixture; the question text is made
//! unique per factory so searches in tests only match what they expect.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test questions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::question::QuestionFactory;
///
/// let question = QuestionFactory::new(&db)
///     .question("What is the capital of Spain?")
///     .answer("Madrid")
///     .category("3")
///     .build()
///     .await?;
/// ```
pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::question::Model,
}

impl<'a> QuestionFactory<'a> {
    /// Creates a new QuestionFactory with default values from the fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::question::entity_builder()
            .question(format!("Question {}?", id))
            .build();

        Self { db, entity }
    }

    /// Sets the question text.
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.entity.question = question.into();
        self
    }

    /// Sets the answer text.
    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.entity.answer = answer.into();
        self
    }

    /// Sets the category reference as stored text.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.entity.category = category.into();
        self
    }

    /// Sets the difficulty.
    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.entity.difficulty = difficulty;
        self
    }

    /// Builds and inserts the question entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::question::Model)` - Created question entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::question::Model, DbErr> {
        entity::question::ActiveModel {
            id: ActiveValue::NotSet,
            question: ActiveValue::Set(self.entity.question),
            answer: ActiveValue::Set(self.entity.answer),
            category: ActiveValue::Set(self.entity.category),
            difficulty: ActiveValue::Set(self.entity.difficulty),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a question with default values in the given category.
///
/// # Arguments
/// - `db` - Database connection
/// - `category_id` - Category id stored as the question's category text
///
/// # Returns
/// - `Ok(entity::question::Model)` - Created question entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_question(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::question::Model, DbErr> {
    QuestionFactory::new(db)
        .category(category_id.to_string())
        .build()
        .await
}
