//! Notification formatting.
//!
//! Pure functions turning validated input into a [`Notification`]. Nothing here
//! talks to Discord or validates colors and titles; malformed values pass through
//! and surface as publish failures.

use chrono::{DateTime, Utc};

use crate::server::model::{
    message::CustomMessageParam,
    notification::{
        EmbedBadge, EmbedField, EmbedSpec, Notification, NotificationBody, NotificationKind,
    },
    payout::CreatePayoutParam,
};

pub const PAYOUT_TITLE: &str = "💸 Payout Sent";
pub const PAYOUT_DESCRIPTION: &str = "A New Payout is Sent.";
pub const PAYOUT_COLOR: &str = "#2F3136";
pub const PAYOUT_STATUS: &str = "✅ Confirmed";

pub const CUSTOM_DEFAULT_TITLE: &str = "Message";
pub const CUSTOM_DEFAULT_COLOR: &str = "#5865F2";

pub const ANNOUNCEMENT_TITLE: &str = "📢 Important Announcement";
pub const ANNOUNCEMENT_COLOR: &str = "#FFD700";

/// Identifiers longer than this are shortened for display.
const TRANSACTION_ID_MAX_DISPLAY: usize = 19;
/// Number of leading characters kept when shortening.
const TRANSACTION_ID_PREFIX: usize = 15;

/// Bot identity shown on embeds.
#[derive(Debug, Clone, PartialEq)]
pub struct Branding {
    pub name: String,
    pub icon_url: Option<String>,
}

impl Branding {
    pub fn new(name: impl Into<String>, icon_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            icon_url,
        }
    }

    fn badge(&self, text: String) -> EmbedBadge {
        EmbedBadge {
            text,
            icon_url: self.icon_url.clone(),
        }
    }
}

/// Shortens a transaction identifier for display.
///
/// Identifiers of at most 19 characters are returned unchanged; longer ones are cut
/// to their first 15 characters followed by `...`. Counts characters, not bytes.
pub fn shorten_transaction_id(transaction_id: &str) -> String {
    if transaction_id.chars().count() > TRANSACTION_ID_MAX_DISPLAY {
        let prefix: String = transaction_id.chars().take(TRANSACTION_ID_PREFIX).collect();
        format!("{}...", prefix)
    } else {
        transaction_id.to_string()
    }
}

/// Formats the transaction hash field, linked when a non-blank link is supplied.
fn transaction_display(transaction_id: &str, link: Option<&str>) -> String {
    let short = shorten_transaction_id(transaction_id);

    match link.filter(|l| !l.trim().is_empty()) {
        Some(link) => format!("[{}]({})", short, link),
        None => format!("`{}`", short),
    }
}

fn format_time(now: DateTime<Utc>) -> String {
    now.format("%B %-d, %Y at %I:%M:%S %p UTC").to_string()
}

/// Builds the payout card.
///
/// # Arguments
/// - `branding` - Bot identity for author, footer and thumbnail
/// - `param` - Validated payout input
/// - `now` - Time shown in the `Time` field and the embed timestamp
pub fn build_payout(
    branding: &Branding,
    param: &CreatePayoutParam,
    now: DateTime<Utc>,
) -> Notification {
    let mut fields = vec![
        EmbedField::new("PayoutAmount", format!("**{}**", param.amount)),
        EmbedField::new("Status", PAYOUT_STATUS),
        EmbedField::new("Time", format_time(now)),
        EmbedField::new(
            "Transaction Hash",
            transaction_display(&param.transaction_id, param.transaction_link.as_deref()),
        ),
    ];

    if let Some(notes) = param.notes.as_deref().filter(|n| !n.trim().is_empty()) {
        fields.push(EmbedField::new("Notes", notes));
    }

    Notification {
        kind: NotificationKind::Payout,
        body: NotificationBody::Embed(EmbedSpec {
            title: PAYOUT_TITLE.to_string(),
            description: Some(PAYOUT_DESCRIPTION.to_string()),
            color: PAYOUT_COLOR.to_string(),
            author: Some(branding.badge(branding.name.clone())),
            thumbnail_url: branding.icon_url.clone(),
            fields,
            footer: Some(branding.badge(format!("{} • Payment Network", branding.name))),
            timestamp: now,
        }),
    }
}

/// Builds a custom message, as plain text or as a card.
///
/// Blank titles and colors fall back to `Message` and `#5865F2`.
pub fn build_custom(
    branding: &Branding,
    param: &CustomMessageParam,
    now: DateTime<Utc>,
) -> Notification {
    if !param.use_embed {
        return Notification {
            kind: NotificationKind::Custom,
            body: NotificationBody::Text(param.content.clone()),
        };
    }

    let title = param
        .embed_title
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or(CUSTOM_DEFAULT_TITLE);
    let color = param
        .embed_color
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(CUSTOM_DEFAULT_COLOR);

    Notification {
        kind: NotificationKind::Custom,
        body: NotificationBody::Embed(EmbedSpec {
            title: title.to_string(),
            description: Some(param.content.clone()),
            color: color.to_string(),
            author: Some(branding.badge(branding.name.clone())),
            thumbnail_url: None,
            fields: Vec::new(),
            footer: Some(branding.badge(branding.name.clone())),
            timestamp: now,
        }),
    }
}

/// Builds the announcement card.
pub fn build_announcement(branding: &Branding, content: &str, now: DateTime<Utc>) -> Notification {
    Notification {
        kind: NotificationKind::Announcement,
        body: NotificationBody::Embed(EmbedSpec {
            title: ANNOUNCEMENT_TITLE.to_string(),
            description: Some(content.to_string()),
            color: ANNOUNCEMENT_COLOR.to_string(),
            author: Some(branding.badge(format!("{} Official", branding.name))),
            thumbnail_url: None,
            fields: Vec::new(),
            footer: Some(branding.badge(format!("{} Official Announcement", branding.name))),
            timestamp: now,
        }),
    }
}
