use super::*;

/// Tests that the count covers both kinds.
///
/// Expected: 2 after inserting one custom message and one announcement
#[tokio::test]
async fn counts_both_kinds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_custom_message(db, "one").await?;
    factory::create_announcement(db, "two").await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}
