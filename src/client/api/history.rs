use url::form_urlencoded;

use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::{message::MessageHistoryDto, payout::PayoutHistoryDto},
};

pub async fn get_payout_history(
    limit: u64,
    recipient: Option<String>,
) -> Result<PayoutHistoryDto, ApiError> {
    let url = payout_history_url(limit, recipient.as_deref());
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

pub async fn get_message_history(limit: u64) -> Result<MessageHistoryDto, ApiError> {
    let url = format!("/api/history/messages?limit={}", limit);
    let request = get(&url);
    let response = send_request(request).await?;
    parse_response(response).await
}

/// Builds the payout history URL; a blank recipient search is left out.
fn payout_history_url(limit: u64, recipient: Option<&str>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("limit", &limit.to_string());
    if let Some(recipient) = recipient.map(str::trim).filter(|r| !r.is_empty()) {
        query.append_pair("recipient", recipient);
    }

    format!("/api/history/payouts?{}", query.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_blank_recipient() {
        assert_eq!(
            payout_history_url(50, Some("  ")),
            "/api/history/payouts?limit=50"
        );
        assert_eq!(payout_history_url(50, None), "/api/history/payouts?limit=50");
    }

    #[test]
    fn encodes_recipient_search() {
        assert_eq!(
            payout_history_url(10, Some(" Jo & Ann ")),
            "/api/history/payouts?limit=10&recipient=Jo+%26+Ann"
        );
    }
}
