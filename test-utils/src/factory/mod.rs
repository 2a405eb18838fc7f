//! Factory methods for creating test data.
//!
//! Each table has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let payout = factory::payout::PayoutFactory::new(&db)
//!     .recipient_name("Alice")
//!     .amount("$100")
//!     .build()
//!     .await?;
//!
//! let announcement = factory::message::create_announcement(&db, "Maintenance tonight").await?;
//! ```

pub mod helpers;
pub mod message;
pub mod payout;

pub use message::{create_announcement, create_custom_message};
pub use payout::create_payout;
