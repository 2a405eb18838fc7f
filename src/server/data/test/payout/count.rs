use super::*;

/// Tests counting payouts.
///
/// Expected: 0 for an empty table, then the number of inserted rows
#[tokio::test]
async fn counts_all_payouts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Payout)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PayoutRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_payout(db).await?;
    factory::create_payout(db).await?;
    factory::create_payout(db).await?;

    assert_eq!(repo.count().await?, 3);

    Ok(())
}
