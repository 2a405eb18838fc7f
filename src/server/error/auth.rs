use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The session does not carry the authenticated flag.
    ///
    /// Either the browser never logged in, logged out, or its session expired.
    /// Results in a 401 Unauthorized response.
    #[error("Session is not authenticated")]
    NotAuthenticated,

    /// Submitted password did not match the configured admin secret.
    ///
    /// Results in a 401 Unauthorized response. Attempts are not counted or throttled.
    #[error("Invalid admin password")]
    InvalidPassword,
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotAuthenticated` → 401 with "Unauthorized. Please login first."
/// - `InvalidPassword` → 401 with "Invalid password"
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let message = match self {
            Self::NotAuthenticated => "Unauthorized. Please login first.",
            Self::InvalidPassword => "Invalid password",
        };

        (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(message))).into_response()
    }
}
