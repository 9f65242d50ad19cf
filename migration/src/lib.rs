pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_category_table;
mod m20260101_000002_create_question_table;
mod m20260101_000003_seed_default_categories;

pub use m20260101_000003_seed_default_categories::DEFAULT_CATEGORIES;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_category_table::Migration),
            Box::new(m20260101_000002_create_question_table::Migration),
            Box::new(m20260101_000003_seed_default_categories::Migration),
        ]
    }
}
