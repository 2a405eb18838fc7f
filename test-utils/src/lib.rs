//! Payoutboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the payoutboard
//! application. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, in-memory sessions and factories for history records.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert payout and message rows with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_history() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_history_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
