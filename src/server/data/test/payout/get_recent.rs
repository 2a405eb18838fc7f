use super::*;

/// Tests that payouts are listed newest first.
///
/// Expected: rows ordered by descending creation time
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::payout::PayoutFactory::new(db)
        .created_at(now - Duration::minutes(10))
        .build()
        .await?;
    let newest = factory::payout::PayoutFactory::new(db)
        .created_at(now)
        .build()
        .await?;
    let middle = factory::payout::PayoutFactory::new(db)
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;

    let payouts = PayoutRepository::new(db).get_recent(100).await?;

    let ids: Vec<i32> = payouts.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests that rows sharing a timestamp are ordered by descending ID.
///
/// Expected: later inserts first when timestamps tie
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let at = Utc::now();
    let first = factory::payout::PayoutFactory::new(db)
        .created_at(at)
        .build()
        .await?;
    let second = factory::payout::PayoutFactory::new(db)
        .created_at(at)
        .build()
        .await?;

    let payouts = PayoutRepository::new(db).get_recent(100).await?;

    assert_eq!(payouts[0].id, second.id);
    assert_eq!(payouts[1].id, first.id);

    Ok(())
}

/// Tests that the limit caps the number of returned rows.
///
/// Expected: exactly `limit` rows, the most recent ones
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for minutes in 0..5 {
        factory::payout::PayoutFactory::new(db)
            .created_at(now - Duration::minutes(minutes))
            .build()
            .await?;
    }

    let payouts = PayoutRepository::new(db).get_recent(2).await?;

    assert_eq!(payouts.len(), 2);
    assert!(payouts[0].created_at >= payouts[1].created_at);

    Ok(())
}

/// Tests reading from an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn returns_empty_when_no_payouts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let payouts = PayoutRepository::new(db).get_recent(100).await?;

    assert!(payouts.is_empty());

    Ok(())
}
