//! SeaORM entities for the payout notification history.

pub mod prelude;

pub mod message;
pub mod payout;
