use super::*;

/// Tests candidates across all categories with nothing excluded.
///
/// Expected: Ok with every question
#[tokio::test]
async fn returns_all_questions_without_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, questions) = factory::seed_trivia(db).await?;

    let repo = QuestionRepository::new(db);
    let candidates = repo.get_quiz_candidates(&QuizCategory::All, &[]).await?;

    assert_eq!(candidates, questions);

    Ok(())
}

/// Tests that previously asked questions are excluded.
///
/// Expected: Ok without the excluded ids
#[tokio::test]
async fn excludes_previous_questions() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, questions) = factory::seed_trivia(db).await?;

    let repo = QuestionRepository::new(db);
    let candidates = repo
        .get_quiz_candidates(&QuizCategory::All, &[questions[0].id, questions[2].id])
        .await?;

    assert_eq!(candidates, vec![questions[1].clone()]);

    Ok(())
}

/// Tests the category filter combined with exclusion.
///
/// Expected: Ok with only the remaining question in the category
#[tokio::test]
async fn filters_by_category_and_excludes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_trivia(db).await?;
    let first = factory::create_question(db, 4).await?;
    let second = factory::create_question(db, 4).await?;

    let repo = QuestionRepository::new(db);
    let category = QuizCategory::Only("4".to_string());

    let candidates = repo.get_quiz_candidates(&category, &[]).await?;
    assert_eq!(candidates, vec![first.clone(), second.clone()]);

    let candidates = repo.get_quiz_candidates(&category, &[first.id]).await?;
    assert_eq!(candidates, vec![second]);

    Ok(())
}

/// Tests excluding every candidate.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_all_excluded() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, questions) = factory::seed_trivia(db).await?;
    let ids: Vec<i32> = questions.iter().map(|q| q.id).collect();

    let repo = QuestionRepository::new(db);
    let candidates = repo.get_quiz_candidates(&QuizCategory::All, &ids).await?;

    assert!(candidates.is_empty());

    Ok(())
}
