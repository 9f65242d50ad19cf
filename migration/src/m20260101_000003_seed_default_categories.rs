use sea_orm_migration::{prelude::*, sea_orm::sea_query::ExprTrait};

use super::m20260101_000001_create_category_table::Category;

/// Categories every fresh database starts with, in id order.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert.into_table(Category::Table).columns([Category::Type]);

        for kind in DEFAULT_CATEGORIES {
            insert
                .values([kind.into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Category::Table)
            .and_where(Expr::col(Category::Type).is_in(DEFAULT_CATEGORIES))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}
