use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// Payout submission from the admin panel.
///
/// Missing fields deserialize as empty strings so the server can answer with
/// its own validation message instead of a JSON rejection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreatePayoutDto {
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub recipient_name: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub amount: String,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub transaction_id: String,
    #[serde(default)]
    pub transaction_link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PayoutDto {
    pub id: i32,
    pub recipient_name: String,
    pub amount: String,
    pub transaction_id: String,
    pub transaction_link: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct PayoutHistoryDto {
    pub payouts: Vec<PayoutDto>,
}

/// Response to a payout submission.
///
/// `payout_id` is absent and `warning` is set when the notification reached
/// Discord but the history row could not be written.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PayoutSentDto {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
