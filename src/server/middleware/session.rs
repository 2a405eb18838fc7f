//! Type-safe session management wrapper.
//!
//! The only state kept in a session is whether the browser has logged in. Wrapping
//! the raw `Session` keeps the key name in one place and gives the controllers a
//! small vocabulary (`set_authenticated`, `is_authenticated`, `destroy`).

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_AUTHENTICATED: &str = "auth:authenticated";

/// Authentication session management.
///
/// Sessions live in process memory, so every login is lost when the server
/// restarts.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Marks the session as logged in.
    ///
    /// The session ID is cycled first so a token issued before login can't be
    /// reused afterwards.
    ///
    /// # Returns
    /// - `Ok(())` - Flag stored
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session
    pub async fn set_authenticated(&self) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_AUTHENTICATED, true).await?;
        Ok(())
    }

    /// Checks whether the session has logged in.
    ///
    /// # Returns
    /// - `Ok(true)` - Session is authenticated
    /// - `Ok(false)` - No login recorded, or the session expired
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        let authenticated = self
            .session
            .get::<bool>(SESSION_AUTH_AUTHENTICATED)
            .await?
            .unwrap_or(false);

        Ok(authenticated)
    }

    /// Destroys the session.
    ///
    /// Clears all data and deletes the record from the store. Calling this on a
    /// session that was never authenticated is not an error.
    ///
    /// # Returns
    /// - `Ok(())` - Session destroyed
    /// - `Err(AppError::SessionErr(_))` - Store rejected the deletion
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
