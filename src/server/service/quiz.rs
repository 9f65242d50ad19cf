pub mod picker;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::question::QuestionRepository,
    error::AppError,
    model::{question::Question, quiz::PlayQuizParams},
    service::quiz::picker::QuestionPicker,
};

pub struct QuizService<'a> {
    db: &'a DatabaseConnection,
    picker: &'a QuestionPicker,
}

impl<'a> QuizService<'a> {
    pub fn new(db: &'a DatabaseConnection, picker: &'a QuestionPicker) -> Self {
        Self { db, picker }
    }

    /// Draws the next quiz question.
    ///
    /// Candidates are the questions in the requested category (or all of them) whose
    /// ids are not in `previous_questions`; one is chosen uniformly at random.
    ///
    /// # Returns
    /// - `Ok(Some(Question))` - A question the caller has not seen yet
    /// - `Ok(None)` - Every candidate has already been asked
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn next_question(
        &self,
        params: PlayQuizParams,
    ) -> Result<Option<Question>, AppError> {
        let repo = QuestionRepository::new(self.db);

        let candidates = repo
            .get_quiz_candidates(&params.category, &params.previous_questions)
            .await?;

        Ok(self.picker.pick(candidates).map(Question::from_entity))
    }
}
