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
        message::{CreateAnnouncementDto, CreateCustomMessageDto, MessageSentDto},
    },
    server::{
        controller::payout::HISTORY_WARNING,
        error::AppError,
        middleware::auth::AuthGuard,
        model::{message::CustomMessageParam, notification::Delivery},
        service::notification::NotificationService,
        state::AppState,
        util::parse::{non_blank, optional_text},
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

/// Post a custom message, as plain text or as a card.
///
/// Embed title and color are not validated; a malformed color is reported as a
/// publish failure.
///
/// # Access Control
/// Requires an authenticated session.
///
/// # Returns
/// - `200 OK` - Published; `messageId` set when recorded, `warning` set when not
/// - `400 Bad Request` - Empty content
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Discord rejected the message, nothing recorded
#[utoipa::path(
    post,
    path = "/api/custom-message",
    tag = MESSAGE_TAG,
    request_body = CreateCustomMessageDto,
    responses(
        (status = 200, description = "Message posted", body = MessageSentDto),
        (status = 400, description = "Message content is required", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Failed to send custom message", body = ErrorDto)
    ),
)]
pub async fn send_custom_message(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateCustomMessageDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;
    let Json(payload) = payload?;

    if non_blank(&payload.content).is_none() {
        return Err(AppError::BadRequest(
            "Message content is required".to_string(),
        ));
    }

    let param = CustomMessageParam {
        content: payload.content,
        use_embed: payload.use_embed,
        embed_title: optional_text(payload.embed_title),
        embed_color: optional_text(payload.embed_color),
    };

    let delivery = NotificationService::new(&state.db, state.publisher.as_ref(), &state.branding)
        .send_custom_message(param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(sent_response(
            delivery,
            "Custom message sent successfully",
            "Custom message sent (database save failed)",
        )),
    ))
}

/// Post an announcement card.
///
/// # Access Control
/// Requires an authenticated session.
///
/// # Returns
/// - `200 OK` - Published; `messageId` set when recorded, `warning` set when not
/// - `400 Bad Request` - Empty content
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Discord rejected the message, nothing recorded
#[utoipa::path(
    post,
    path = "/api/announcement",
    tag = MESSAGE_TAG,
    request_body = CreateAnnouncementDto,
    responses(
        (status = 200, description = "Announcement posted", body = MessageSentDto),
        (status = 400, description = "Announcement content is required", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Failed to send announcement", body = ErrorDto)
    ),
)]
pub async fn send_announcement(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateAnnouncementDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&session).require().await?;
    let Json(payload) = payload?;

    if non_blank(&payload.content).is_none() {
        return Err(AppError::BadRequest(
            "Announcement content is required".to_string(),
        ));
    }

    let delivery = NotificationService::new(&state.db, state.publisher.as_ref(), &state.branding)
        .send_announcement(payload.content)
        .await?;

    Ok((
        StatusCode::OK,
        Json(sent_response(
            delivery,
            "Announcement sent successfully",
            "Announcement sent (database save failed)",
        )),
    ))
}

fn sent_response(delivery: Delivery, recorded: &str, unrecorded: &str) -> MessageSentDto {
    match delivery {
        Delivery::Recorded { record_id } => MessageSentDto {
            success: true,
            message: recorded.to_string(),
            message_id: Some(record_id),
            warning: None,
        },
        Delivery::Unrecorded => MessageSentDto {
            success: true,
            message: unrecorded.to_string(),
            message_id: None,
            warning: Some(HISTORY_WARNING.to_string()),
        },
    }
}
