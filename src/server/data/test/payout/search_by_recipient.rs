use super::*;

/// Tests case-insensitive substring search on recipient names.
///
/// Expected: both "Alice" rows match "ali", "Bob" does not
#[tokio::test]
async fn matches_substring_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::payout::PayoutFactory::new(db)
        .recipient_name("Alice")
        .build()
        .await?;
    factory::payout::PayoutFactory::new(db)
        .recipient_name("Bob")
        .build()
        .await?;
    factory::payout::PayoutFactory::new(db)
        .recipient_name("MALICE")
        .build()
        .await?;

    let payouts = PayoutRepository::new(db)
        .search_by_recipient("ali", 100)
        .await?;

    assert_eq!(payouts.len(), 2);
    assert!(payouts.iter().all(|p| p.recipient_name != "Bob"));

    Ok(())
}

/// Tests that a search with no match returns nothing.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_without_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_payout(db).await?;

    let payouts = PayoutRepository::new(db)
        .search_by_recipient("nobody", 100)
        .await?;

    assert!(payouts.is_empty());

    Ok(())
}
