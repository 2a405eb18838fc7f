use chrono::{TimeZone, Utc};

use crate::server::{
    model::{
        message::CustomMessageParam,
        notification::{EmbedSpec, Notification, NotificationBody, NotificationKind},
        payout::CreatePayoutParam,
    },
    service::notification::builder::Branding,
};

mod builder;

fn branding() -> Branding {
    Branding::new("Payout Bot", Some("https://cdn.example/icon.png".to_string()))
}

fn payout_param(transaction_id: &str) -> CreatePayoutParam {
    CreatePayoutParam {
        recipient_name: "Alice".to_string(),
        amount: "$100".to_string(),
        transaction_id: transaction_id.to_string(),
        transaction_link: None,
        notes: None,
    }
}

fn embed(notification: &Notification) -> &EmbedSpec {
    match &notification.body {
        NotificationBody::Embed(card) => card,
        NotificationBody::Text(text) => panic!("expected an embed, got text {:?}", text),
    }
}

fn field<'a>(card: &'a EmbedSpec, name: &str) -> Option<&'a str> {
    card.fields
        .iter()
        .find(|f| f.name == name)
        .map(|f| f.value.as_str())
}
