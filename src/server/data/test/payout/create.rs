use super::*;

/// Tests recording a payout with all optional fields.
///
/// Expected: Ok with every field stored as given
#[tokio::test]
async fn creates_payout_with_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PayoutRepository::new(db);
    let payout = repo
        .create(CreatePayoutParam {
            recipient_name: "Alice".to_string(),
            amount: "$100".to_string(),
            transaction_id: "abc123".to_string(),
            transaction_link: Some("https://explorer.example/tx/abc123".to_string()),
            notes: Some("March bonus".to_string()),
        })
        .await?;

    assert_eq!(payout.recipient_name, "Alice");
    assert_eq!(payout.amount, "$100");
    assert_eq!(payout.transaction_id, "abc123");
    assert_eq!(
        payout.transaction_link.as_deref(),
        Some("https://explorer.example/tx/abc123")
    );
    assert_eq!(payout.notes.as_deref(), Some("March bonus"));

    Ok(())
}

/// Tests that the creation timestamp is assigned at insert time.
///
/// Expected: created_at falls between the instants before and after the insert
#[tokio::test]
async fn assigns_created_at_on_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let payout = PayoutRepository::new(db)
        .create(CreatePayoutParam {
            recipient_name: "Bob".to_string(),
            amount: "0.5 BTC".to_string(),
            transaction_id: "tx-1".to_string(),
            transaction_link: None,
            notes: None,
        })
        .await?;
    let after = Utc::now();

    assert!(payout.created_at >= before - Duration::seconds(1));
    assert!(payout.created_at <= after + Duration::seconds(1));
    assert!(payout.transaction_link.is_none());
    assert!(payout.notes.is_none());

    Ok(())
}

/// Tests that the same transaction ID can be recorded twice.
///
/// Expected: Ok for both inserts with distinct row IDs
#[tokio::test]
async fn allows_duplicate_transaction_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::payout::PayoutFactory::new(db)
        .transaction_id("same")
        .build()
        .await?;
    let second = factory::payout::PayoutFactory::new(db)
        .transaction_id("same")
        .build()
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
