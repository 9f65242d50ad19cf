use super::*;

/// Tests the first page of a short listing.
///
/// Verifies that fewer than a page of questions are all returned in id order and the
/// total reflects every row.
///
/// Expected: Ok with 3 questions and total 3
#[tokio::test]
async fn returns_first_page_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, seeded) = factory::seed_trivia(db).await?;

    let repo = QuestionRepository::new(db);
    let (questions, total) = repo.get_page(0, 10).await?;

    assert_eq!(total, 3);
    assert_eq!(questions, seeded);

    Ok(())
}

/// Tests that pages are sliced by id at the page size.
///
/// Expected: 10 questions on page 0, 2 on page 1, none on page 2; total 12 throughout
#[tokio::test]
async fn slices_pages_by_page_size() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..12 {
        ids.push(factory::create_question(db, 1).await?.id);
    }

    let repo = QuestionRepository::new(db);

    let (first, total) = repo.get_page(0, 10).await?;
    assert_eq!(total, 12);
    assert_eq!(first.len(), 10);
    assert_eq!(
        first.iter().map(|q| q.id).collect::<Vec<_>>(),
        ids[..10].to_vec()
    );

    let (second, total) = repo.get_page(1, 10).await?;
    assert_eq!(total, 12);
    assert_eq!(
        second.iter().map(|q| q.id).collect::<Vec<_>>(),
        ids[10..].to_vec()
    );

    let (third, _) = repo.get_page(2, 10).await?;
    assert!(third.is_empty());

    Ok(())
}

/// Tests paging an empty table.
///
/// Expected: Ok with no questions and total 0
#[tokio::test]
async fn returns_empty_page_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);
    let (questions, total) = repo.get_page(0, 10).await?;

    assert!(questions.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests a page index whose offset overflows.
///
/// Expected: Ok with no questions and the real total
#[tokio::test]
async fn returns_empty_page_when_offset_overflows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_trivia_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::seed_trivia(db).await?;

    let repo = QuestionRepository::new(db);
    let (questions, total) = repo.get_page(i64::MAX as u64 - 1, 10).await?;

    assert!(questions.is_empty());
    assert_eq!(total, 3);

    Ok(())
}
