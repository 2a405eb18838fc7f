//! Notification pipeline: format, publish, then record.
//!
//! The service is organized into separate modules by concern:
//! - `builder` - Turns validated input into a renderable notification
//! - `posting` - Publishes notifications to the destination channel
//!
//! A publish failure ends the request with nothing persisted. A history write that
//! fails after a successful publish is tolerated and reported as
//! [`Delivery::Unrecorded`], since the message already exists in the channel.

pub mod builder;
#[cfg(test)]
pub mod mock;
pub mod posting;

#[cfg(test)]
mod test;

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{message::MessageRepository, payout::PayoutRepository},
    error::AppError,
    model::{
        message::{CustomMessageParam, MessageKind},
        notification::{Delivery, Notification, PublishedMessage},
        payout::CreatePayoutParam,
    },
};

use self::{builder::Branding, posting::ChannelPublisher};

pub const PAYOUT_PUBLISH_FAILED: &str =
    "Failed to send message to Discord. Please check bot permissions.";
pub const CUSTOM_MESSAGE_PUBLISH_FAILED: &str = "Failed to send custom message";
pub const ANNOUNCEMENT_PUBLISH_FAILED: &str = "Failed to send announcement";

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    publisher: &'a dyn ChannelPublisher,
    branding: &'a Branding,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for history writes
    /// - `publisher` - Destination channel publisher
    /// - `branding` - Bot identity shown on embeds
    pub fn new(
        db: &'a DatabaseConnection,
        publisher: &'a dyn ChannelPublisher,
        branding: &'a Branding,
    ) -> Self {
        Self {
            db,
            publisher,
            branding,
        }
    }

    /// Announces a payout and records it.
    ///
    /// The stored transaction ID is the full value; only the card shows the
    /// shortened form.
    ///
    /// # Returns
    /// - `Ok(Delivery::Recorded)` - Published and stored
    /// - `Ok(Delivery::Unrecorded)` - Published, history write failed
    /// - `Err(AppError::PublishErr)` - Not published, nothing stored
    pub async fn send_payout(&self, param: CreatePayoutParam) -> Result<Delivery, AppError> {
        let notification = builder::build_payout(self.branding, &param, Utc::now());
        let published = self.publish(notification, PAYOUT_PUBLISH_FAILED).await?;

        tracing::info!("Payout message sent for {}", param.recipient_name);

        let result = PayoutRepository::new(self.db).create(param).await;

        Ok(record(published, result.map(|payout| payout.id)))
    }

    /// Posts a custom message and records its content.
    ///
    /// # Returns
    /// - `Ok(Delivery)` - Published, with or without a history row
    /// - `Err(AppError::PublishErr)` - Not published, nothing stored
    pub async fn send_custom_message(
        &self,
        param: CustomMessageParam,
    ) -> Result<Delivery, AppError> {
        let notification = builder::build_custom(self.branding, &param, Utc::now());
        let published = self
            .publish(notification, CUSTOM_MESSAGE_PUBLISH_FAILED)
            .await?;

        let result = MessageRepository::new(self.db)
            .create(MessageKind::Custom, param.content)
            .await;

        Ok(record(published, result.map(|message| message.id)))
    }

    /// Posts an announcement and records its content.
    ///
    /// # Returns
    /// - `Ok(Delivery)` - Published, with or without a history row
    /// - `Err(AppError::PublishErr)` - Not published, nothing stored
    pub async fn send_announcement(&self, content: String) -> Result<Delivery, AppError> {
        let notification = builder::build_announcement(self.branding, &content, Utc::now());
        let published = self
            .publish(notification, ANNOUNCEMENT_PUBLISH_FAILED)
            .await?;

        let result = MessageRepository::new(self.db)
            .create(MessageKind::Announcement, content)
            .await;

        Ok(record(published, result.map(|message| message.id)))
    }

    async fn publish(
        &self,
        notification: Notification,
        context: &str,
    ) -> Result<PublishedMessage, AppError> {
        self.publisher
            .publish(notification)
            .await
            .map_err(|source| AppError::PublishErr {
                context: context.to_string(),
                source,
            })
    }
}

fn record(published: PublishedMessage, result: Result<i32, sea_orm::DbErr>) -> Delivery {
    match result {
        Ok(record_id) => {
            tracing::debug!(
                "Message {} in channel {} saved to history as {}",
                published.message_id,
                published.channel_id,
                record_id
            );
            Delivery::Recorded { record_id }
        }
        Err(e) => {
            tracing::error!(
                "Message {} in channel {} was published but could not be saved to history: {}",
                published.message_id,
                published.channel_id,
                e
            );
            Delivery::Unrecorded
        }
    }
}
