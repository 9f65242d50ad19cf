use super::*;

/// Tests deleting an existing question.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_question() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let question = factory::create_question(db, 1).await?;

    let repo = QuestionRepository::new(db);
    let deleted = repo.delete(question.id).await?;

    assert!(deleted);
    let stored = entity::prelude::Question::find_by_id(question.id)
        .one(db)
        .await?;
    assert!(stored.is_none());

    Ok(())
}

/// Tests deleting the same question twice.
///
/// Expected: Ok(true) the first time, Ok(false) the second
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let question = factory::create_question(db, 1).await?;

    let repo = QuestionRepository::new(db);

    assert!(repo.delete(question.id).await?);
    assert!(!repo.delete(question.id).await?);

    Ok(())
}

/// Tests that deleting one question leaves the others untouched.
///
/// Expected: Ok with remaining count 2
#[tokio::test]
async fn leaves_other_questions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, questions) = factory::seed_trivia(db).await?;

    let repo = QuestionRepository::new(db);
    repo.delete(questions[0].id).await?;

    let remaining = entity::prelude::Question::find().count(db).await?;
    assert_eq!(remaining, 2);

    Ok(())
}
