use super::*;

/// Tests retrieving every category in id order.
///
/// Expected: Ok with the six default categories, Science first
#[tokio::test]
async fn returns_all_categories_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seeded = factory::seed_default_categories(db).await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert_eq!(categories.len(), 6);
    assert_eq!(categories, seeded);
    assert_eq!(categories[0].kind, "Science");
    assert_eq!(categories[5].kind, "Sports");

    Ok(())
}

/// Tests retrieving categories from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}

/// Tests that a missing categories table surfaces as an error.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_table_is_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that the migrated database and the test factories agree on the defaults.
///
/// Expected: a freshly migrated database holds exactly the factory's default names,
/// in id order
#[tokio::test]
async fn migrations_seed_default_categories() -> Result<(), DbErr> {
    use migration::{Migrator, MigratorTrait};

    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    Migrator::up(db, None).await?;

    let repo = CategoryRepository::new(db);
    let kinds: Vec<String> = repo
        .get_all()
        .await?
        .into_iter()
        .map(|c| c.kind)
        .collect();

    assert_eq!(kinds, factory::helpers::DEFAULT_CATEGORIES.to_vec());

    Ok(())
}
