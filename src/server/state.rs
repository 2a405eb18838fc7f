//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned for each request
//! through Axum's state extraction. Every field is cheap to clone.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::notification::{builder::Branding, posting::ChannelPublisher};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite history database.
    pub db: DatabaseConnection,

    /// Destination channel publisher.
    ///
    /// The Discord-backed implementation in production, a recording double in tests.
    pub publisher: Arc<dyn ChannelPublisher>,

    /// Bot identity shown on embeds.
    pub branding: Arc<Branding>,

    /// Configured admin secret (plain, bcrypt or argon2). Never logged.
    pub admin_password: Arc<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `publisher` - Destination channel publisher
    /// - `branding` - Bot identity for embeds
    /// - `admin_password` - Configured admin secret
    pub fn new(
        db: DatabaseConnection,
        publisher: Arc<dyn ChannelPublisher>,
        branding: Branding,
        admin_password: String,
    ) -> Self {
        Self {
            db,
            publisher,
            branding: Arc::new(branding),
            admin_password: Arc::new(admin_password),
        }
    }
}
