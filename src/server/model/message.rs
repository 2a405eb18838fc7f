//! Custom message and announcement domain models.

use chrono::{DateTime, Utc};

use crate::model::message::{MessageDto, MessageKindDto};

/// Discriminates the two message shapes stored in the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Custom,
    Announcement,
}

impl MessageKind {
    /// Value stored in the `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custom => "custom",
            Self::Announcement => "announcement",
        }
    }

    /// Parses the stored `kind` column.
    ///
    /// # Returns
    /// - `Some(MessageKind)` - Known discriminator
    /// - `None` - Value written by something other than this application
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "custom" => Some(Self::Custom),
            "announcement" => Some(Self::Announcement),
            _ => None,
        }
    }
}

impl From<MessageKind> for MessageKindDto {
    fn from(kind: MessageKind) -> Self {
        match kind {
            MessageKind::Custom => Self::Custom,
            MessageKind::Announcement => Self::Announcement,
        }
    }
}

/// A custom message or announcement that was posted and recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub kind: MessageKind,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Converts an entity model to a message domain model at the repository boundary.
    ///
    /// Unknown discriminators are read as custom messages rather than failing the
    /// whole history listing.
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            kind: MessageKind::parse(&entity.kind).unwrap_or(MessageKind::Custom),
            content: entity.content,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            kind: self.kind.into(),
            content: self.content,
            created_at: self.created_at,
        }
    }
}

/// Parameters for posting a custom message.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomMessageParam {
    pub content: String,
    /// Render as a titled, colored card instead of plain text.
    pub use_embed: bool,
    pub embed_title: Option<String>,
    pub embed_color: Option<String>,
}
