//! Message data repository for database operations.
//!
//! Custom messages and announcements share one table, distinguished by the `kind`
//! column.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::message::{Message, MessageKind};

/// Repository providing database operations for message history.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a custom message or announcement that was published.
    ///
    /// # Arguments
    /// - `kind` - Which kind of message was sent
    /// - `content` - The content exactly as submitted
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, kind: MessageKind, content: String) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            kind: ActiveValue::Set(kind.as_str().to_string()),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets the most recent messages, newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows to return
    /// - `kind` - Restrict to one kind, or `None` for both
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Up to `limit` messages
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent(
        &self,
        limit: u64,
        kind: Option<MessageKind>,
    ) -> Result<Vec<Message>, DbErr> {
        let mut query = entity::prelude::Message::find();

        if let Some(kind) = kind {
            query = query.filter(entity::message::Column::Kind.eq(kind.as_str()));
        }

        let entities = query
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }

    /// Counts all recorded messages of both kinds.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Message::find().count(self.db).await
    }
}
