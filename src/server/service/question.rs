use sea_orm::DatabaseConnection;

use crate::server::{
    config::QUESTIONS_PER_PAGE,
    data::question::QuestionRepository,
    error::AppError,
    model::{
        category::Category,
        question::{CreateQuestionParams, Question, QuestionPage, SearchQuestionsParams},
    },
    service::category::CategoryService,
};

pub struct QuestionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of questions with the total count and the category mapping.
    ///
    /// # Arguments
    /// - `page` - One-based page number
    ///
    /// # Returns
    /// - `Ok(QuestionPage)` - Non-empty page of at most `QUESTIONS_PER_PAGE` questions
    /// - `Err(AppError::NotFound)` - Page is below 1 or past the last question
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_paginated(&self, page: i64) -> Result<QuestionPage, AppError> {
        if page < 1 {
            return Err(AppError::NotFound(format!("Page {} does not exist", page)));
        }

        let repo = QuestionRepository::new(self.db);

        let (questions, total) = repo
            .get_page((page - 1) as u64, QUESTIONS_PER_PAGE)
            .await?;

        if questions.is_empty() {
            return Err(AppError::NotFound(format!("Page {} has no questions", page)));
        }

        let categories = CategoryService::new(self.db).get_all().await?;

        Ok(QuestionPage {
            questions: questions.into_iter().map(Question::from_entity).collect(),
            total,
            categories: Category::into_map(categories),
        })
    }

    /// Creates a new question and returns it with its generated id
    pub async fn create(&self, params: CreateQuestionParams) -> Result<Question, AppError> {
        let repo = QuestionRepository::new(self.db);

        let question = repo.create(params).await?;

        Ok(Question::from_entity(question))
    }

    /// Deletes a question
    ///
    /// # Returns
    /// - `Ok(id)` - The id of the deleted question
    /// - `Err(AppError::UnprocessableEntity)` - No question has this id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<i32, AppError> {
        let repo = QuestionRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::UnprocessableEntity(format!(
                "Question {} does not exist",
                id
            )));
        }

        Ok(id)
    }

    /// Searches question text for a case-insensitive substring
    pub async fn search(&self, params: SearchQuestionsParams) -> Result<Vec<Question>, AppError> {
        let repo = QuestionRepository::new(self.db);

        let questions = repo.search(&params.term).await?;

        Ok(questions.into_iter().map(Question::from_entity).collect())
    }

    /// Gets every question in a category
    ///
    /// # Returns
    /// - `Ok(Vec<Question>)` - Questions whose category text equals the id (may be empty)
    /// - `Err(AppError::NotFound)` - No category has this id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_by_category(&self, category_id: i32) -> Result<Vec<Question>, AppError> {
        let category = CategoryService::new(self.db).get_by_id(category_id).await?;

        if category.is_none() {
            return Err(AppError::NotFound(format!(
                "Category {} does not exist",
                category_id
            )));
        }

        let repo = QuestionRepository::new(self.db);

        let questions = repo.get_by_category(&category_id.to_string()).await?;

        Ok(questions.into_iter().map(Question::from_entity).collect())
    }
}
