//! Shared helper utilities for factory methods.
//!
//! Provides unique-id generation and convenience methods that seed the standard
//! trivia data set used across tests.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{category::CategoryFactory, question::QuestionFactory};

/// Category names the seed migration inserts, in id order.
pub use migration::DEFAULT_CATEGORIES;

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Inserts the six default categories.
///
/// On a fresh database the categories receive ids 1 through 6 in the order of
/// `DEFAULT_CATEGORIES`.
///
/// # Returns
/// - `Ok(Vec<entity::category::Model>)` - Created categories in id order
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_default_categories(
    db: &DatabaseConnection,
) -> Result<Vec<entity::category::Model>, DbErr> {
    let mut categories = Vec::with_capacity(DEFAULT_CATEGORIES.len());

    for kind in DEFAULT_CATEGORIES {
        categories.push(CategoryFactory::new(db).kind(kind).build().await?);
    }

    Ok(categories)
}

/// Seeds the default categories plus three questions.
///
/// Questions created, in id order:
/// 1. "What is the capital of France?" (Geography, category `"3"`)
/// 2. "Who painted the Mona Lisa?" (Art, category `"2"`)
/// 3. "What is the largest planet in our solar system?" (Science, category `"1"`)
///
/// # Returns
/// - `Ok((categories, questions))` - All created entities in id order
/// - `Err(DbErr)` - Database error during insert
pub async fn seed_trivia(
    db: &DatabaseConnection,
) -> Result<
    (
        Vec<entity::category::Model>,
        Vec<entity::question::Model>,
    ),
    DbErr,
> {
    let categories = seed_default_categories(db).await?;

    let questions = vec![
        QuestionFactory::new(db)
            .question("What is the capital of France?")
            .answer("Paris")
            .category("3")
            .difficulty(1)
            .build()
            .await?,
        QuestionFactory::new(db)
            .question("Who painted the Mona Lisa?")
            .answer("Leonardo da Vinci")
            .category("2")
            .difficulty(2)
            .build()
            .await?,
        QuestionFactory::new(db)
            .question("What is the largest planet in our solar system?")
            .answer("Jupiter")
            .category("1")
            .difficulty(3)
            .build()
            .await?,
    ];

    Ok((categories, questions))
}
