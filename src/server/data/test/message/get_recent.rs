use super::*;

/// Tests that both kinds are listed together, newest first.
///
/// Expected: all three messages ordered by descending creation time
#[tokio::test]
async fn lists_both_kinds_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let old = factory::message::MessageFactory::new(db)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let announcement = factory::message::MessageFactory::new(db)
        .kind("announcement")
        .created_at(now)
        .build()
        .await?;
    let recent = factory::message::MessageFactory::new(db)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let messages = MessageRepository::new(db).get_recent(100, None).await?;

    let ids: Vec<i32> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![announcement.id, recent.id, old.id]);
    assert_eq!(messages[0].kind, MessageKind::Announcement);

    Ok(())
}

/// Tests filtering by kind.
///
/// Expected: only announcements when filtering for announcements
#[tokio::test]
async fn filters_by_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_custom_message(db, "hello").await?;
    factory::create_announcement(db, "big news").await?;
    factory::create_custom_message(db, "again").await?;

    let messages = MessageRepository::new(db)
        .get_recent(100, Some(MessageKind::Announcement))
        .await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].content, "big news");

    Ok(())
}

/// Tests that rows with an unknown discriminator are read as custom messages.
///
/// Expected: Ok with kind Custom
#[tokio::test]
async fn unknown_kind_reads_as_custom() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::message::MessageFactory::new(db)
        .kind("legacy")
        .build()
        .await?;

    let messages = MessageRepository::new(db).get_recent(100, None).await?;

    assert_eq!(messages[0].kind, MessageKind::Custom);

    Ok(())
}
