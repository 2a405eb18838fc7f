use crate::{
    client::{
        api::helper::{parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::{
        message::{CreateAnnouncementDto, CreateCustomMessageDto, MessageSentDto},
        payout::{CreatePayoutDto, PayoutSentDto},
    },
};

pub async fn send_payout(payload: CreatePayoutDto) -> Result<PayoutSentDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/payout").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn send_custom_message(
    payload: CreateCustomMessageDto,
) -> Result<MessageSentDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/custom-message").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn send_announcement(payload: CreateAnnouncementDto) -> Result<MessageSentDto, ApiError> {
    let body = serialize_json(&payload)?;
    let request = post("/api/announcement").body(body);
    let response = send_request(request).await?;
    parse_response(response).await
}
