use super::*;

/// Tests retrieving questions for a category.
///
/// Expected: Ok with only the questions stored under that category id
#[tokio::test]
async fn returns_questions_in_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_trivia(db).await?;
    let extra = factory::create_question(db, 1).await?;

    let repo = QuestionRepository::new(db);
    let results = repo.get_by_category("1").await?;

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|q| q.category == "1"));
    assert_eq!(results[1], extra);

    Ok(())
}

/// Tests retrieving questions for a category with none.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_category_without_questions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_trivia(db).await?;

    let repo = QuestionRepository::new(db);
    let results = repo.get_by_category("6").await?;

    assert!(results.is_empty());

    Ok(())
}
