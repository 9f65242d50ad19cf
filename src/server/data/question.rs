use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{question::CreateQuestionParams, quiz::QuizCategory};

pub struct QuestionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of questions ordered by id, together with the total question count.
    ///
    /// # Arguments
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((questions, total))` - Questions on the page (empty past the last page, or
    ///   when the page offset does not fit in a `u64`) and the number of questions
    ///   across all pages
    /// - `Err(DbErr)` - Database error
    pub async fn get_page(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::question::Model>, u64), DbErr> {
        let paginator = entity::prelude::Question::find()
            .order_by_asc(entity::question::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;

        let in_range = page
            .checked_mul(per_page)
            .is_some_and(|offset| offset < total);
        if !in_range {
            return Ok((Vec::new(), total));
        }

        let questions = paginator.fetch_page(page).await?;

        Ok((questions, total))
    }

    /// Inserts a new question and returns it with its generated id
    pub async fn create(
        &self,
        params: CreateQuestionParams,
    ) -> Result<entity::question::Model, DbErr> {
        entity::question::ActiveModel {
            question: ActiveValue::Set(params.question),
            answer: ActiveValue::Set(params.answer),
            category: ActiveValue::Set(params.category),
            difficulty: ActiveValue::Set(params.difficulty),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Deletes a question by ID in a single statement
    ///
    /// # Returns
    /// - `Ok(true)` - A question was deleted
    /// - `Ok(false)` - No question has this id
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Question::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Finds questions whose text contains `term`, ignoring case.
    ///
    /// Case folding uses Unicode lowercase on both sides, so the match runs over the
    /// loaded rows rather than in SQL (SQLite's `LOWER` only folds ASCII). The term is
    /// matched literally and an empty term matches every question. Results are ordered
    /// by id.
    pub async fn search(&self, term: &str) -> Result<Vec<entity::question::Model>, DbErr> {
        let term = term.to_lowercase();

        let questions = entity::prelude::Question::find()
            .order_by_asc(entity::question::Column::Id)
            .all(self.db)
            .await?;

        Ok(questions
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&term))
            .collect())
    }

    /// Gets all questions whose stored category equals `category`, ordered by id
    pub async fn get_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<entity::question::Model>, DbErr> {
        entity::prelude::Question::find()
            .filter(entity::question::Column::Category.eq(category))
            .order_by_asc(entity::question::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets questions eligible for the next quiz turn.
    ///
    /// Applies the category filter, then excludes every id in `exclude`.
    pub async fn get_quiz_candidates(
        &self,
        category: &QuizCategory,
        exclude: &[i32],
    ) -> Result<Vec<entity::question::Model>, DbErr> {
        let mut query = entity::prelude::Question::find();

        if let QuizCategory::Only(id) = category {
            query = query.filter(entity::question::Column::Category.eq(id.as_str()));
        }

        if !exclude.is_empty() {
            query = query.filter(entity::question::Column::Id.is_not_in(exclude.iter().copied()));
        }

        query
            .order_by_asc(entity::question::Column::Id)
            .all(self.db)
            .await
    }
}
