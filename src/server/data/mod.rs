//! Database repository layer for the history tables.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from the service layer. Both tables are append-only; no
//! update or delete operation exists.

pub mod message;
pub mod payout;

#[cfg(test)]
mod test;
