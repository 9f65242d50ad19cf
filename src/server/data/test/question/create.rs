use super::*;

/// Tests creating a question.
///
/// Verifies that the repository inserts the row and returns it with a generated id.
///
/// Expected: Ok with matching fields persisted
#[tokio::test]
async fn creates_question_with_generated_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);
    let created = repo
        .create(CreateQuestionParams {
            question: "What is the capital of Spain?".to_string(),
            answer: "Madrid".to_string(),
            category: "3".to_string(),
            difficulty: 1,
        })
        .await?;

    assert!(created.id > 0);
    assert_eq!(created.question, "What is the capital of Spain?");
    assert_eq!(created.answer, "Madrid");
    assert_eq!(created.category, "3");
    assert_eq!(created.difficulty, 1);

    let stored = entity::prelude::Question::find_by_id(created.id)
        .one(db)
        .await?;
    assert_eq!(stored, Some(created));

    Ok(())
}

/// Tests that a question may reference a category that does not exist.
///
/// Expected: Ok, the orphaned reference is stored as given
#[tokio::test]
async fn allows_orphaned_category_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);
    let created = repo
        .create(CreateQuestionParams {
            question: "Orphan?".to_string(),
            answer: "Yes".to_string(),
            category: "999".to_string(),
            difficulty: 2,
        })
        .await?;

    assert_eq!(created.category, "999");

    Ok(())
}

/// Tests that consecutive creates receive distinct ids.
///
/// Expected: Ok with two rows and different ids
#[tokio::test]
async fn assigns_distinct_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);
    let params = CreateQuestionParams {
        question: "Same?".to_string(),
        answer: "Same".to_string(),
        category: "1".to_string(),
        difficulty: 1,
    };

    let first = repo.create(params.clone()).await?;
    let second = repo.create(params).await?;

    assert_ne!(first.id, second.id);
    assert_eq!(entity::prelude::Question::find().count(db).await?, 2);

    Ok(())
}
