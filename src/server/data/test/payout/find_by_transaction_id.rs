use super::*;

/// Tests that a long transaction ID is stored and found in full.
///
/// The notification shortens IDs over 19 characters for display; history must keep
/// the original.
///
/// Expected: Some(payout) with the full 21-character ID
#[tokio::test]
async fn finds_payout_by_full_long_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PayoutRepository::new(db);
    repo.create(CreatePayoutParam {
        recipient_name: "Alice".to_string(),
        amount: "$100".to_string(),
        transaction_id: "abc123def456ghi789jkl".to_string(),
        transaction_link: None,
        notes: None,
    })
    .await?;

    let found = repo.find_by_transaction_id("abc123def456ghi789jkl").await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().transaction_id, "abc123def456ghi789jkl");

    Ok(())
}

/// Tests that the shortened display form does not match.
///
/// Expected: None when searching with the first 15 characters
#[tokio::test]
async fn does_not_match_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::payout::PayoutFactory::new(db)
        .transaction_id("abc123def456ghi789jkl")
        .build()
        .await?;

    let found = PayoutRepository::new(db)
        .find_by_transaction_id("abc123def456ghi")
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the most recent row wins when an ID was recorded twice.
///
/// Expected: Some(payout) with the higher row ID
#[tokio::test]
async fn returns_latest_duplicate() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::payout::PayoutFactory::new(db)
        .transaction_id("dup")
        .amount("$1")
        .build()
        .await?;
    let latest = factory::payout::PayoutFactory::new(db)
        .transaction_id("dup")
        .amount("$2")
        .build()
        .await?;

    let found = PayoutRepository::new(db)
        .find_by_transaction_id("dup")
        .await?
        .unwrap();

    assert_eq!(found.id, latest.id);
    assert_eq!(found.amount, "$2");

    Ok(())
}
