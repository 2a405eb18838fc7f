use super::*;

/// Tests that an announcement is stored with its discriminator and raw content.
///
/// Expected: kind is Announcement and content carries no marker prefix
#[tokio::test]
async fn stores_announcement_kind_without_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = MessageRepository::new(db)
        .create(MessageKind::Announcement, "Server maintenance at 10pm".to_string())
        .await?;

    assert_eq!(message.kind, MessageKind::Announcement);
    assert_eq!(message.content, "Server maintenance at 10pm");

    Ok(())
}

/// Tests that custom content resembling the old announcement marker stays custom.
///
/// Expected: kind is Custom and content is unchanged
#[tokio::test]
async fn marker_like_content_stays_custom() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = MessageRepository::new(db)
        .create(MessageKind::Custom, "[ANNOUNCEMENT] not really".to_string())
        .await?;

    assert_eq!(message.kind, MessageKind::Custom);
    assert_eq!(message.content, "[ANNOUNCEMENT] not really");

    Ok(())
}
