use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        payout::{CreatePayoutDto, PayoutSentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{notification::Delivery, payout::CreatePayoutParam},
        service::notification::NotificationService,
        state::AppState,
        util::parse::{non_blank, optional_text},
    },
};

/// Tag for grouping payout endpoints in OpenAPI documentation
pub static PAYOUT_TAG: &str = "payout";

/// Warning returned when a notification was published but not recorded.
pub const HISTORY_WARNING: &str = "History may not be saved";

/// Announce a payout in the destination channel and record it.
///
/// Payout cards are sent after a short random pause so consecutive payouts are
/// not grouped together in Discord.
///
/// # Access Control
/// Requires an authenticated session.
///
/// # Returns
/// - `200 OK` - Published; `payoutId` set when recorded, `warning` set when not
/// - `400 Bad Request` - Recipient, amount or transaction ID missing
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Discord rejected the message, nothing recorded
#[utoipa::path(
    post,
    path = "/api/payout",
    tag = PAYOUT_TAG,
    request_body = CreatePayoutDto,
    responses(
        (status = 200, description = "Payout announced", body = PayoutSentDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Failed to send message to Discord", body = ErrorDto)
    ),
)]
pub async fn send_payout(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreatePayoutDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;
    let Json(payload) = payload?;

    let missing = [
        &payload.recipient_name,
        &payload.amount,
        &payload.transaction_id,
    ]
    .iter()
    .any(|value| non_blank(value).is_none());
    if missing {
        return Err(AppError::BadRequest(
            "Missing required fields: recipientName, amount, transactionId".to_string(),
        ));
    }

    let mut param = CreatePayoutParam::from(payload);
    param.transaction_link = optional_text(param.transaction_link);
    param.notes = optional_text(param.notes);

    let delivery = NotificationService::new(&state.db, state.publisher.as_ref(), &state.branding)
        .send_payout(param)
        .await?;

    let response = match delivery {
        Delivery::Recorded { record_id } => PayoutSentDto {
            success: true,
            message: "Payout message sent successfully to Discord!".to_string(),
            payout_id: Some(record_id),
            warning: None,
        },
        Delivery::Unrecorded => PayoutSentDto {
            success: true,
            message: "Payout sent to Discord (database save failed)".to_string(),
            payout_id: None,
            warning: Some(HISTORY_WARNING.to_string()),
        },
    };

    Ok((StatusCode::OK, Json(response)))
}
