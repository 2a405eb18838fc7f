use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Gate for operator-only endpoints.
///
/// There is a single shared operator account, so the only check is whether the
/// session has logged in.
pub struct AuthGuard<'a> {
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Rejects the request unless the session is authenticated.
    ///
    /// # Returns
    /// - `Ok(())` - Session is authenticated
    /// - `Err(AppError::AuthErr(AuthError::NotAuthenticated))` - No login in session
    /// - `Err(AppError::SessionErr(_))` - Failed to read the session
    pub async fn require(&self) -> Result<(), AppError> {
        if !AuthSession::new(self.session).is_authenticated().await? {
            return Err(AuthError::NotAuthenticated.into());
        }

        Ok(())
    }
}
