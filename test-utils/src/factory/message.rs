//! Message factory for creating custom message and announcement rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test message rows.
///
/// Defaults to a `custom` message with unique content and the current time.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    kind: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            kind: "custom".to_string(),
            content: format!("Message {}", next_id()),
            created_at: Utc::now(),
        }
    }

    /// Sets the stored discriminator, `custom` or `announcement`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            kind: ActiveValue::Set(self.kind),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a custom message with the given content.
pub async fn create_custom_message(
    db: &DatabaseConnection,
    content: impl Into<String>,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db).content(content).build().await
}

/// Creates an announcement with the given content.
pub async fn create_announcement(
    db: &DatabaseConnection,
    content: impl Into<String>,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db)
        .kind("announcement")
        .content(content)
        .build()
        .await
}
