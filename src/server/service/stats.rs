use sea_orm::DatabaseConnection;

use crate::server::{
    data::{message::MessageRepository, payout::PayoutRepository},
    error::AppError,
    model::stats::Stats,
};

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts recorded payouts and messages.
    ///
    /// The message total covers both custom messages and announcements.
    pub async fn get(&self) -> Result<Stats, AppError> {
        let total_payouts = PayoutRepository::new(self.db).count().await?;
        let total_messages = MessageRepository::new(self.db).count().await?;

        Ok(Stats {
            total_payouts,
            total_messages,
        })
    }
}
