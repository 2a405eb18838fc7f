//! Payout data repository for database operations.
//!
//! Provides the `PayoutRepository` for recording sent payouts and reading back the
//! payout history, with conversion between entity models and domain models at the
//! repository boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::payout::{CreatePayoutParam, Payout};

/// Repository providing database operations for payout history.
pub struct PayoutRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PayoutRepository<'a> {
    /// Creates a new PayoutRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `PayoutRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a payout that was published.
    ///
    /// The creation timestamp is assigned here, at insert time, so it may trail the
    /// time shown in the notification by the publish delay.
    ///
    /// # Arguments
    /// - `param` - Validated payout fields
    ///
    /// # Returns
    /// - `Ok(Payout)` - The stored payout
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePayoutParam) -> Result<Payout, DbErr> {
        let entity = entity::payout::ActiveModel {
            recipient_name: ActiveValue::Set(param.recipient_name),
            amount: ActiveValue::Set(param.amount),
            transaction_id: ActiveValue::Set(param.transaction_id),
            transaction_link: ActiveValue::Set(param.transaction_link),
            notes: ActiveValue::Set(param.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Payout::from_entity(entity))
    }

    /// Gets the most recent payouts, newest first.
    ///
    /// Rows sharing a timestamp are ordered by descending ID so the listing is stable
    /// across repeated reads.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// - `Ok(Vec<Payout>)` - Up to `limit` payouts
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<Payout>, DbErr> {
        let entities = entity::prelude::Payout::find()
            .order_by_desc(entity::payout::Column::CreatedAt)
            .order_by_desc(entity::payout::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Payout::from_entity).collect())
    }

    /// Finds payouts whose recipient name contains the given fragment.
    ///
    /// Matching uses SQL `LIKE`, which SQLite evaluates case-insensitively for ASCII.
    ///
    /// # Arguments
    /// - `fragment` - Part of the recipient name to search for
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// - `Ok(Vec<Payout>)` - Matching payouts, newest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn search_by_recipient(
        &self,
        fragment: &str,
        limit: u64,
    ) -> Result<Vec<Payout>, DbErr> {
        let entities = entity::prelude::Payout::find()
            .filter(entity::payout::Column::RecipientName.contains(fragment))
            .order_by_desc(entity::payout::Column::CreatedAt)
            .order_by_desc(entity::payout::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Payout::from_entity).collect())
    }

    /// Finds a payout by its full transaction identifier.
    ///
    /// Transaction IDs are not unique; when the same ID was recorded more than once the
    /// most recent row is returned.
    ///
    /// # Returns
    /// - `Ok(Some(Payout))` - A payout with that transaction ID exists
    /// - `Ok(None)` - No payout recorded for that transaction ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_transaction_id(
        &self,
        transaction_id: &str,
    ) -> Result<Option<Payout>, DbErr> {
        let entity = entity::prelude::Payout::find()
            .filter(entity::payout::Column::TransactionId.eq(transaction_id))
            .order_by_desc(entity::payout::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Payout::from_entity))
    }

    /// Counts all recorded payouts.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Payout::find().count(self.db).await
    }
}
