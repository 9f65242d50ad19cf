use super::*;

/// Tests a case-insensitive substring search.
///
/// Expected: Ok with only the question containing "capital"
#[tokio::test]
async fn matches_substring_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_trivia(db).await?;

    let repo = QuestionRepository::new(db);

    for term in ["capital", "CAPITAL", "Capital of"] {
        let results = repo.search(term).await?;

        assert_eq!(results.len(), 1, "term {:?}", term);
        assert_eq!(results[0].question, "What is the capital of France?");
    }

    Ok(())
}

/// Tests that an empty term matches every question.
///
/// Expected: Ok with all 3 questions in id order
#[tokio::test]
async fn empty_term_matches_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, questions) = factory::seed_trivia(db).await?;

    let repo = QuestionRepository::new(db);
    let results = repo.search("").await?;

    assert_eq!(results, questions);

    Ok(())
}

/// Tests a search with no matches.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_nothing_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_trivia(db).await?;

    let repo = QuestionRepository::new(db);
    let results = repo.search("photosynthesis").await?;

    assert!(results.is_empty());

    Ok(())
}

/// Tests that LIKE wildcards in the term are matched literally.
///
/// Expected: "100%" only matches the question containing a percent sign
#[tokio::test]
async fn treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::question::QuestionFactory::new(db)
        .question("Is water 100% wet?")
        .build()
        .await?;
    factory::question::QuestionFactory::new(db)
        .question("Is 1000 a round number?")
        .build()
        .await?;

    let repo = QuestionRepository::new(db);

    let percent = repo.search("100%").await?;
    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].question, "Is water 100% wet?");

    let underscore = repo.search("_").await?;
    assert!(underscore.is_empty());

    Ok(())
}

/// Tests case folding of non-ASCII letters.
///
/// Expected: lower, upper and mixed case terms all find the question
#[tokio::test]
async fn folds_non_ascii_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_trivia(db).await?;
    factory::question::QuestionFactory::new(db)
        .question("Who was ÉMILE Zola?")
        .build()
        .await?;

    let repo = QuestionRepository::new(db);

    for term in ["émile", "ÉMILE", "Émile zola"] {
        let results = repo.search(term).await?;

        assert_eq!(results.len(), 1, "term {:?}", term);
        assert_eq!(results[0].question, "Who was ÉMILE Zola?");
    }

    Ok(())
}
