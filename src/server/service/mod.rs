//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They work with
//! domain models rather than DTOs or entity models, and decide which failures are
//! fatal to a request (a publish failure) and which are tolerated (a history
//! write after a successful publish).

pub mod auth;
pub mod history;
pub mod notification;
pub mod stats;
