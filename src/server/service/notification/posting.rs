//! Delivery of notifications to the destination channel.

use dioxus_logger::tracing;
use rand::Rng;
use serenity::{
    all::{
        ChannelId, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage, Timestamp,
    },
    http::Http,
};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use crate::server::{
    error::publish::PublishError,
    model::notification::{
        EmbedBadge, EmbedSpec, Notification, NotificationBody, NotificationKind, PublishedMessage,
    },
};

/// Bounds in milliseconds of the pause before each payout notification.
///
/// Spacing payouts out keeps Discord from visually grouping consecutive cards.
const PAYOUT_DELAY_MS: std::ops::Range<u64> = 1000..3000;

/// Sends notifications to the single configured channel.
#[serenity::async_trait]
pub trait ChannelPublisher: Send + Sync {
    /// Publishes a notification once, without retry.
    ///
    /// # Returns
    /// - `Ok(PublishedMessage)` - Message exists in the channel
    /// - `Err(PublishError)` - Channel unavailable, invalid embed color, or send rejected
    async fn publish(&self, notification: Notification) -> Result<PublishedMessage, PublishError>;

    /// Whether the gateway connection reported ready.
    fn is_ready(&self) -> bool;
}

/// Publisher backed by the serenity HTTP client.
pub struct DiscordChannelPublisher {
    http: Arc<Http>,
    channel_id: ChannelId,
    /// Set by the bot's ready and resume handlers.
    ready: Arc<AtomicBool>,
}

impl DiscordChannelPublisher {
    /// Creates a publisher for the given channel.
    ///
    /// # Arguments
    /// - `http` - HTTP client shared with the gateway client
    /// - `channel_id` - Destination channel ID
    /// - `ready` - Flag flipped by the gateway event handler
    pub fn new(http: Arc<Http>, channel_id: u64, ready: Arc<AtomicBool>) -> Self {
        Self {
            http,
            channel_id: ChannelId::new(channel_id),
            ready,
        }
    }
}

#[serenity::async_trait]
impl ChannelPublisher for DiscordChannelPublisher {
    async fn publish(&self, notification: Notification) -> Result<PublishedMessage, PublishError> {
        self.http.get_channel(self.channel_id).await.map_err(|e| {
            PublishError::ChannelUnavailable {
                channel_id: self.channel_id.get(),
                reason: e.to_string(),
            }
        })?;

        if let Some(delay) = publish_delay(notification.kind) {
            tokio::time::sleep(delay).await;
        }

        let message = build_message(notification.body)?;

        let sent = self
            .channel_id
            .send_message(&self.http, message)
            .await
            .map_err(|e| PublishError::SendFailed(e.to_string()))?;

        tracing::info!(
            "Sent {:?} notification to channel {} (message {})",
            notification.kind,
            sent.channel_id,
            sent.id
        );

        Ok(PublishedMessage {
            channel_id: sent.channel_id.get(),
            message_id: sent.id.get(),
        })
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }
}

/// Pause applied before publishing, drawn fresh for every payout.
///
/// Custom messages and announcements go out immediately.
pub(super) fn publish_delay(kind: NotificationKind) -> Option<Duration> {
    match kind {
        NotificationKind::Payout => Some(Duration::from_millis(
            rand::rng().random_range(PAYOUT_DELAY_MS),
        )),
        NotificationKind::Custom | NotificationKind::Announcement => None,
    }
}

/// Converts a notification body into a serenity message builder.
pub(super) fn build_message(body: NotificationBody) -> Result<CreateMessage, PublishError> {
    match body {
        NotificationBody::Text(content) => Ok(CreateMessage::new().content(content)),
        NotificationBody::Embed(spec) => Ok(CreateMessage::new().embed(build_embed(spec)?)),
    }
}

fn build_embed(spec: EmbedSpec) -> Result<CreateEmbed, PublishError> {
    let timestamp = Timestamp::from_unix_timestamp(spec.timestamp.timestamp())
        .map_err(|e| PublishError::SendFailed(format!("Invalid embed timestamp: {}", e)))?;

    let mut embed = CreateEmbed::new()
        .title(spec.title)
        .color(parse_color(&spec.color)?)
        .timestamp(timestamp);

    if let Some(description) = spec.description {
        embed = embed.description(description);
    }

    if let Some(author) = spec.author {
        embed = embed.author(build_author(author));
    }

    if let Some(url) = spec.thumbnail_url {
        embed = embed.thumbnail(url);
    }

    for field in spec.fields {
        embed = embed.field(field.name, field.value, field.inline);
    }

    if let Some(footer) = spec.footer {
        embed = embed.footer(build_footer(footer));
    }

    Ok(embed)
}

fn build_author(badge: EmbedBadge) -> CreateEmbedAuthor {
    let author = CreateEmbedAuthor::new(badge.text);
    match badge.icon_url {
        Some(url) => author.icon_url(url),
        None => author,
    }
}

fn build_footer(badge: EmbedBadge) -> CreateEmbedFooter {
    let footer = CreateEmbedFooter::new(badge.text);
    match badge.icon_url {
        Some(url) => footer.icon_url(url),
        None => footer,
    }
}

/// Parses a `#RRGGBB` color. The leading `#` is optional.
///
/// # Returns
/// - `Ok(u32)` - RGB value
/// - `Err(PublishError::InvalidColor)` - Not six hex digits
pub fn parse_color(value: &str) -> Result<u32, PublishError> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(PublishError::InvalidColor(value.to_string()));
    }

    u32::from_str_radix(hex, 16).map_err(|_| PublishError::InvalidColor(value.to_string()))
}
