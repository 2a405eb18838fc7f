//! Payout domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::payout::{CreatePayoutDto, PayoutDto};

/// A payout that was announced in the destination channel and recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Payout {
    pub id: i32,
    pub recipient_name: String,
    /// Stored and displayed verbatim, no currency handling.
    pub amount: String,
    /// Full identifier as submitted, never the shortened display form.
    pub transaction_id: String,
    pub transaction_link: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payout {
    /// Converts an entity model to a payout domain model at the repository boundary.
    pub fn from_entity(entity: entity::payout::Model) -> Self {
        Self {
            id: entity.id,
            recipient_name: entity.recipient_name,
            amount: entity.amount,
            transaction_id: entity.transaction_id,
            transaction_link: entity.transaction_link,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }

    /// Converts the payout domain model to a DTO for API responses.
    pub fn into_dto(self) -> PayoutDto {
        PayoutDto {
            id: self.id,
            recipient_name: self.recipient_name,
            amount: self.amount,
            transaction_id: self.transaction_id,
            transaction_link: self.transaction_link,
            notes: self.notes,
            created_at: self.created_at,
        }
    }
}

/// Parameters for announcing and recording a payout.
///
/// Built from a `CreatePayoutDto` after validation. Blank optional fields are
/// normalized to `None` by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePayoutParam {
    pub recipient_name: String,
    pub amount: String,
    pub transaction_id: String,
    pub transaction_link: Option<String>,
    pub notes: Option<String>,
}

impl From<CreatePayoutDto> for CreatePayoutParam {
    fn from(dto: CreatePayoutDto) -> Self {
        Self {
            recipient_name: dto.recipient_name,
            amount: dto.amount,
            transaction_id: dto.transaction_id,
            transaction_link: dto.transaction_link,
            notes: dto.notes,
        }
    }
}
