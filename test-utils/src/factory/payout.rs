//! Payout factory for creating test payout rows.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test payouts with customizable fields.
///
/// Defaults:
/// - recipient_name: `"Recipient {id}"`
/// - amount: `"$100"`
/// - transaction_id: `"tx{id}"`
/// - transaction_link / notes: `None`
/// - created_at: now
pub struct PayoutFactory<'a> {
    db: &'a DatabaseConnection,
    recipient_name: String,
    amount: String,
    transaction_id: String,
    transaction_link: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> PayoutFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            recipient_name: format!("Recipient {}", id),
            amount: "$100".to_string(),
            transaction_id: format!("tx{}", id),
            transaction_link: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    pub fn recipient_name(mut self, recipient_name: impl Into<String>) -> Self {
        self.recipient_name = recipient_name.into();
        self
    }

    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = transaction_id.into();
        self
    }

    pub fn transaction_link(mut self, transaction_link: impl Into<String>) -> Self {
        self.transaction_link = Some(transaction_link.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Overrides the insert timestamp, used to build deterministic orderings.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the payout entity into the database.
    pub async fn build(self) -> Result<entity::payout::Model, DbErr> {
        entity::payout::ActiveModel {
            recipient_name: ActiveValue::Set(self.recipient_name),
            amount: ActiveValue::Set(self.amount),
            transaction_id: ActiveValue::Set(self.transaction_id),
            transaction_link: ActiveValue::Set(self.transaction_link),
            notes: ActiveValue::Set(self.notes),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a payout with default values.
pub async fn create_payout(db: &DatabaseConnection) -> Result<entity::payout::Model, DbErr> {
    PayoutFactory::new(db).build().await
}
