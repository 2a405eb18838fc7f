use super::*;
use crate::server::service::notification::builder::{
    build_announcement, build_custom, build_payout, shorten_transaction_id,
};

#[test]
fn short_transaction_ids_are_unchanged() {
    assert_eq!(shorten_transaction_id("abc123"), "abc123");
    assert_eq!(shorten_transaction_id("0123456789abcdefghi"), "0123456789abcdefghi");
}

/// Tests the shortening boundary.
///
/// Expected: 20 and 21 character IDs keep their first 15 characters plus `...`
#[test]
fn long_transaction_ids_are_shortened() {
    assert_eq!(
        shorten_transaction_id("0123456789abcdefghij"),
        "0123456789abcde..."
    );
    assert_eq!(
        shorten_transaction_id("abc123def456ghi789jkl"),
        "abc123def456ghi..."
    );
}

/// Tests that shortening counts characters rather than bytes.
///
/// Expected: 19 multi-byte characters unchanged; 20 cut to 15 characters
#[test]
fn shortening_counts_characters() {
    let nineteen = "é".repeat(19);
    assert_eq!(shorten_transaction_id(&nineteen), nineteen);

    let twenty = "é".repeat(20);
    assert_eq!(shorten_transaction_id(&twenty), format!("{}...", "é".repeat(15)));
}

/// Tests the payout card layout.
///
/// Expected: fixed title, description, color and status; amount in bold; no notes
/// field when notes are absent
#[test]
fn payout_card_layout() {
    let now = Utc.with_ymd_and_hms(2025, 11, 10, 15, 4, 5).unwrap();
    let notification = build_payout(&branding(), &payout_param("abc123"), now);

    assert_eq!(notification.kind, NotificationKind::Payout);
    let card = embed(&notification);
    assert_eq!(card.title, "💸 Payout Sent");
    assert_eq!(card.description.as_deref(), Some("A New Payout is Sent."));
    assert_eq!(card.color, "#2F3136");
    assert_eq!(field(card, "PayoutAmount"), Some("**$100**"));
    assert_eq!(field(card, "Status"), Some("✅ Confirmed"));
    assert_eq!(field(card, "Time"), Some("November 10, 2025 at 03:04:05 PM UTC"));
    assert_eq!(field(card, "Transaction Hash"), Some("`abc123`"));
    assert_eq!(field(card, "Notes"), None);
    assert_eq!(card.timestamp, now);
    assert_eq!(
        card.thumbnail_url.as_deref(),
        Some("https://cdn.example/icon.png")
    );

    let names: Vec<&str> = card.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["PayoutAmount", "Status", "Time", "Transaction Hash"]
    );
}

/// Tests the linked and shortened transaction hash with notes.
///
/// Expected: `[short](link)` display and a trailing Notes field
#[test]
fn payout_card_links_hash_and_adds_notes() {
    let mut param = payout_param("abc123def456ghi789jkl");
    param.transaction_link = Some("https://explorer.example/tx/abc123def456ghi789jkl".to_string());
    param.notes = Some("March bonus".to_string());

    let notification = build_payout(&branding(), &param, Utc::now());
    let card = embed(&notification);

    assert_eq!(
        field(card, "Transaction Hash"),
        Some("[abc123def456ghi...](https://explorer.example/tx/abc123def456ghi789jkl)")
    );
    assert_eq!(card.fields.last().map(|f| f.name.as_str()), Some("Notes"));
    assert_eq!(field(card, "Notes"), Some("March bonus"));
}

#[test]
fn blank_link_renders_code_span() {
    let mut param = payout_param("abc123");
    param.transaction_link = Some("   ".to_string());

    let notification = build_payout(&branding(), &param, Utc::now());

    assert_eq!(field(embed(&notification), "Transaction Hash"), Some("`abc123`"));
}

#[test]
fn custom_message_without_embed_is_plain_text() {
    let param = CustomMessageParam {
        content: "Hello **team**".to_string(),
        use_embed: false,
        embed_title: Some("ignored".to_string()),
        embed_color: None,
    };

    let notification = build_custom(&branding(), &param, Utc::now());

    assert_eq!(notification.kind, NotificationKind::Custom);
    assert_eq!(
        notification.body,
        NotificationBody::Text("Hello **team**".to_string())
    );
}

/// Tests embed defaults for custom messages.
///
/// Expected: title `Message` and color `#5865F2` when none are given
#[test]
fn custom_embed_uses_defaults() {
    let param = CustomMessageParam {
        content: "Hello".to_string(),
        use_embed: true,
        embed_title: None,
        embed_color: Some("".to_string()),
    };

    let notification = build_custom(&branding(), &param, Utc::now());
    let card = embed(&notification);

    assert_eq!(card.title, "Message");
    assert_eq!(card.color, "#5865F2");
    assert_eq!(card.description.as_deref(), Some("Hello"));
}

#[test]
fn custom_embed_passes_color_through_unvalidated() {
    let param = CustomMessageParam {
        content: "Hello".to_string(),
        use_embed: true,
        embed_title: Some("Update".to_string()),
        embed_color: Some("not-a-color".to_string()),
    };

    let notification = build_custom(&branding(), &param, Utc::now());
    let card = embed(&notification);

    assert_eq!(card.title, "Update");
    assert_eq!(card.color, "not-a-color");
}

#[test]
fn announcement_card_layout() {
    let notification = build_announcement(&branding(), "Maintenance at 10pm", Utc::now());

    assert_eq!(notification.kind, NotificationKind::Announcement);
    let card = embed(&notification);
    assert_eq!(card.title, "📢 Important Announcement");
    assert_eq!(card.color, "#FFD700");
    assert_eq!(card.description.as_deref(), Some("Maintenance at 10pm"));
    assert_eq!(
        card.author.as_ref().map(|a| a.text.as_str()),
        Some("Payout Bot Official")
    );
}
