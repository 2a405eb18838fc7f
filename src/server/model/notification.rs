//! Renderable notification descriptions.
//!
//! The formatter produces these without touching Discord; the publisher converts
//! them into serenity builders at send time. Keeping the description plain data lets
//! the formatting rules be tested without a gateway connection.

use chrono::{DateTime, Utc};

/// Which of the three notification shapes a message is.
///
/// The publisher uses this to decide whether to apply the anti-clustering delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Payout,
    Custom,
    Announcement,
}

/// A message ready to be published to the destination channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub body: NotificationBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationBody {
    /// Plain message content.
    Text(String),
    /// A titled, colored card.
    Embed(EmbedSpec),
}

/// Name and optional icon shown in the embed author line and footer.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedBadge {
    pub text: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }
}

/// Description of a Discord embed.
///
/// `color` is kept as the operator supplied it (e.g. `#5865F2`); parsing happens
/// in the publisher so a malformed value surfaces as a publish failure.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedSpec {
    pub title: String,
    pub description: Option<String>,
    pub color: String,
    pub author: Option<EmbedBadge>,
    pub thumbnail_url: Option<String>,
    pub fields: Vec<EmbedField>,
    pub footer: Option<EmbedBadge>,
    pub timestamp: DateTime<Utc>,
}

/// Handle to a message that reached the destination channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedMessage {
    pub channel_id: u64,
    pub message_id: u64,
}

/// Outcome of the persistence step after a successful publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Published and written to history.
    Recorded { record_id: i32 },
    /// Published, but the history write failed. The message still exists in the
    /// channel, only the local history is incomplete.
    Unrecorded,
}

#[cfg(test)]
impl Delivery {
    pub fn record_id(&self) -> Option<i32> {
        match self {
            Self::Recorded { record_id } => Some(*record_id),
            Self::Unrecorded => None,
        }
    }
}
