//! Recording publisher used by service and controller tests.

use std::sync::Mutex;

use crate::server::{
    error::publish::PublishError,
    model::notification::{Notification, PublishedMessage},
    service::notification::posting::ChannelPublisher,
};

pub const MOCK_CHANNEL_ID: u64 = 1_000;

/// Publisher that records every notification instead of sending it.
///
/// When built with [`RecordingPublisher::failing`] every publish fails with
/// `PublishError::SendFailed` and nothing is recorded.
pub struct RecordingPublisher {
    published: Mutex<Vec<Notification>>,
    fail_with: Option<String>,
    ready: bool,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail_with: None,
            ready: true,
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            fail_with: Some(reason.into()),
            ..Self::new()
        }
    }

    pub fn not_ready(mut self) -> Self {
        self.ready = false;
        self
    }

    /// Notifications successfully published so far, in order.
    pub fn published(&self) -> Vec<Notification> {
        self.published.lock().unwrap().clone()
    }
}

#[serenity::async_trait]
impl ChannelPublisher for RecordingPublisher {
    async fn publish(&self, notification: Notification) -> Result<PublishedMessage, PublishError> {
        if let Some(reason) = &self.fail_with {
            return Err(PublishError::SendFailed(reason.clone()));
        }

        let mut published = self.published.lock().unwrap();
        published.push(notification);

        Ok(PublishedMessage {
            channel_id: MOCK_CHANNEL_ID,
            message_id: published.len() as u64,
        })
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}
