use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        auth::{AuthStatusDto, LoginDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        service::auth::verify_password,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with the admin password.
///
/// Every attempt is evaluated; there is no lockout or throttling.
///
/// # Returns
/// - `200 OK` - Password accepted, session authenticated
/// - `400 Bad Request` - No password submitted
/// - `401 Unauthorized` - Wrong password
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = SuccessDto),
        (status = 400, description = "Password is required", body = ErrorDto),
        (status = 401, description = "Invalid password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    if payload.password.is_empty() {
        return Err(AppError::BadRequest("Password is required".to_string()));
    }

    if !verify_password(&payload.password, &state.admin_password) {
        tracing::warn!("Rejected admin login attempt");
        return Err(AuthError::InvalidPassword.into());
    }

    AuthSession::new(&session).set_authenticated().await?;
    tracing::info!("Admin logged in");

    Ok((
        StatusCode::OK,
        Json(SuccessDto {
            success: true,
            message: "Login successful".to_string(),
        }),
    ))
}

/// Log out and destroy the session.
///
/// Succeeds whether or not the session was authenticated.
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = SuccessDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).destroy().await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto {
            success: true,
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Report whether the session is logged in and whether the bot is connected.
#[utoipa::path(
    get,
    path = "/api/auth-status",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authentication and bot status", body = AuthStatusDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn auth_status(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthSession::new(&session).is_authenticated().await?;

    Ok((
        StatusCode::OK,
        Json(AuthStatusDto {
            authenticated,
            bot_ready: state.publisher.is_ready(),
        }),
    ))
}
