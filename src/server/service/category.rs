use sea_orm::DatabaseConnection;

use crate::server::{
    data::category::CategoryRepository, error::AppError, model::category::Category,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category ordered by id
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let categories = repo.get_all().await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    /// Gets a specific category by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let category = repo.find_by_id(id).await?;

        Ok(category.map(Category::from_entity))
    }
}
