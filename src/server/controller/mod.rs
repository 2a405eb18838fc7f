//! HTTP request handlers.
//!
//! Handlers authenticate through `AuthGuard`, validate input, delegate to the
//! service layer and convert domain models into DTOs. Errors are returned as
//! `AppError` and converted into JSON responses.

pub mod auth;
pub mod health;
pub mod history;
pub mod message;
pub mod payout;
pub mod stats;

#[cfg(test)]
mod test;
