use sea_orm::DatabaseConnection;

use crate::server::{
    data::{message::MessageRepository, payout::PayoutRepository},
    error::AppError,
    model::{
        message::{Message, MessageKind},
        payout::Payout,
    },
};

/// Read access to payout and message history.
pub struct HistoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HistoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists payouts newest first.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows
    /// - `recipient` - Optional case-insensitive recipient name fragment
    ///
    /// # Returns
    /// - `Ok(Vec<Payout>)` - Matching payouts
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_payouts(
        &self,
        limit: u64,
        recipient: Option<&str>,
    ) -> Result<Vec<Payout>, AppError> {
        let repo = PayoutRepository::new(self.db);

        let payouts = match recipient {
            Some(fragment) => repo.search_by_recipient(fragment, limit).await?,
            None => repo.get_recent(limit).await?,
        };

        Ok(payouts)
    }

    /// Looks up a payout by its full transaction ID.
    ///
    /// # Returns
    /// - `Ok(Payout)` - Most recent payout with that ID
    /// - `Err(AppError::NotFound)` - No payout recorded with that ID
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_payout_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Payout, AppError> {
        PayoutRepository::new(self.db)
            .find_by_transaction_id(transaction_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payout not found".to_string()))
    }

    /// Lists custom messages and announcements newest first.
    pub async fn get_messages(
        &self,
        limit: u64,
        kind: Option<MessageKind>,
    ) -> Result<Vec<Message>, AppError> {
        let messages = MessageRepository::new(self.db)
            .get_recent(limit, kind)
            .await?;

        Ok(messages)
    }
}
