use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        message::MessageHistoryDto,
        payout::{PayoutDto, PayoutHistoryDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::message::MessageKind,
        service::history::HistoryService,
        state::AppState,
        util::parse::{non_blank, parse_limit},
    },
};

/// Tag for grouping history endpoints in OpenAPI documentation
pub static HISTORY_TAG: &str = "history";

/// Query parameters for the payout history endpoint.
///
/// `limit` is taken as text so a malformed value falls back to the default
/// instead of rejecting the request.
#[derive(Deserialize, IntoParams)]
pub struct PayoutHistoryParams {
    /// Maximum number of rows, default 100.
    pub limit: Option<String>,
    /// Case-insensitive recipient name fragment.
    pub recipient: Option<String>,
}

#[derive(Deserialize, IntoParams)]
pub struct MessageHistoryParams {
    /// Maximum number of rows, default 100.
    pub limit: Option<String>,
    /// `custom` or `announcement`; both kinds when absent.
    pub kind: Option<String>,
}

/// List recorded payouts, newest first.
///
/// # Access Control
/// Requires an authenticated session.
#[utoipa::path(
    get,
    path = "/api/history/payouts",
    tag = HISTORY_TAG,
    params(PayoutHistoryParams),
    responses(
        (status = 200, description = "Recorded payouts", body = PayoutHistoryDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payout_history(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PayoutHistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let limit = parse_limit(params.limit.as_deref());
    let recipient = params.recipient.as_deref().and_then(non_blank);

    let payouts = HistoryService::new(&state.db)
        .get_payouts(limit, recipient)
        .await?;

    Ok((
        StatusCode::OK,
        Json(PayoutHistoryDto {
            payouts: payouts.into_iter().map(|p| p.into_dto()).collect(),
        }),
    ))
}

/// Look up a payout by its full transaction ID.
///
/// # Access Control
/// Requires an authenticated session.
#[utoipa::path(
    get,
    path = "/api/history/payouts/{transaction_id}",
    tag = HISTORY_TAG,
    params(
        ("transaction_id" = String, Path, description = "Full transaction identifier")
    ),
    responses(
        (status = 200, description = "Recorded payout", body = PayoutDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Payout not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payout_by_transaction_id(
    State(state): State<AppState>,
    session: Session,
    Path(transaction_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let payout = HistoryService::new(&state.db)
        .get_payout_by_transaction_id(&transaction_id)
        .await?;

    Ok((StatusCode::OK, Json(payout.into_dto())))
}

/// List recorded custom messages and announcements, newest first.
///
/// # Access Control
/// Requires an authenticated session.
#[utoipa::path(
    get,
    path = "/api/history/messages",
    tag = HISTORY_TAG,
    params(MessageHistoryParams),
    responses(
        (status = 200, description = "Recorded messages", body = MessageHistoryDto),
        (status = 400, description = "Unknown message kind", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message_history(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<MessageHistoryParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;

    let limit = parse_limit(params.limit.as_deref());
    let kind = match params.kind.as_deref().and_then(non_blank) {
        Some(raw) => Some(MessageKind::parse(raw).ok_or_else(|| {
            AppError::BadRequest("kind must be 'custom' or 'announcement'".to_string())
        })?),
        None => None,
    };

    let messages = HistoryService::new(&state.db)
        .get_messages(limit, kind)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageHistoryDto {
            messages: messages.into_iter().map(|m| m.into_dto()).collect(),
        }),
    ))
}
