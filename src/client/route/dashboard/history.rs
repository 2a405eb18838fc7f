use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::model::error::ApiError,
    model::{
        message::{MessageDto, MessageKindDto},
        payout::PayoutDto,
    },
};

#[cfg(feature = "web")]
use crate::client::{
    api::history::{get_message_history, get_payout_history},
    constant::HISTORY_PAGE_SIZE,
};

#[component]
pub fn PayoutHistory(refetch_trigger: Signal<u32>) -> Element {
    let mut payouts = use_signal(|| None::<Result<Vec<PayoutDto>, ApiError>>);
    let mut search = use_signal(String::new);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger(); // Read trigger to track changes
        let recipient = search();
        get_payout_history(HISTORY_PAGE_SIZE, Some(recipient)).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(history)) => payouts.set(Some(Ok(history.payouts.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch payout history: {}", err);
            payouts.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx!(
        div {
            class: "card card-wide",
            h2 { class: "card-title", "Payout history" }
            input {
                class: "search",
                placeholder: "Search recipient",
                value: "{search}",
                oninput: move |e| search.set(e.value())
            }
            match &*payouts.read() {
                None => rsx! { span { class: "spinner" } },
                Some(Err(err)) => rsx! { div { class: "alert alert-error", "{err}" } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "muted", "No payouts yet" }
                },
                Some(Ok(list)) => rsx! {
                    table {
                        thead {
                            tr {
                                th { "Recipient" }
                                th { "Amount" }
                                th { "Transaction" }
                                th { "Sent" }
                            }
                        }
                        tbody {
                            for payout in list.iter().cloned() {
                                PayoutRow { key: "{payout.id}", payout }
                            }
                        }
                    }
                },
            }
        }
    )
}

#[component]
fn PayoutRow(payout: PayoutDto) -> Element {
    let sent = payout.created_at.format("%Y-%m-%d %H:%M UTC").to_string();

    rsx!(
        tr {
            td { "{payout.recipient_name}" }
            td { "{payout.amount}" }
            td {
                class: "mono",
                title: "{payout.transaction_id}",
                if let Some(link) = payout.transaction_link.clone() {
                    a {
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener",
                        "{payout.transaction_id}"
                    }
                } else {
                    "{payout.transaction_id}"
                }
            }
            td { "{sent}" }
        }
    )
}

#[component]
pub fn MessageHistory(refetch_trigger: Signal<u32>) -> Element {
    let mut messages = use_signal(|| None::<Result<Vec<MessageDto>, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger(); // Read trigger to track changes
        get_message_history(HISTORY_PAGE_SIZE).await
    });

    #[cfg(feature = "web")]
    use_effect(move || match &*future.read_unchecked() {
        Some(Ok(history)) => messages.set(Some(Ok(history.messages.clone()))),
        Some(Err(err)) => {
            tracing::error!("Failed to fetch message history: {}", err);
            messages.set(Some(Err(err.clone())));
        }
        None => (),
    });

    rsx!(
        div {
            class: "card card-wide",
            h2 { class: "card-title", "Message history" }
            match &*messages.read() {
                None => rsx! { span { class: "spinner" } },
                Some(Err(err)) => rsx! { div { class: "alert alert-error", "{err}" } },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { class: "muted", "No messages yet" }
                },
                Some(Ok(list)) => rsx! {
                    ul {
                        class: "message-list",
                        for message in list.iter().cloned() {
                            li {
                                key: "{message.id}",
                                span {
                                    class: match message.kind {
                                        MessageKindDto::Announcement => "badge badge-announcement",
                                        MessageKindDto::Custom => "badge",
                                    },
                                    match message.kind {
                                        MessageKindDto::Announcement => "Announcement",
                                        MessageKindDto::Custom => "Custom",
                                    }
                                }
                                p { class: "message-content", "{message.content}" }
                                span {
                                    class: "muted",
                                    {message.created_at.format("%Y-%m-%d %H:%M UTC").to_string()}
                                }
                            }
                        }
                    }
                },
            }
        }
    )
}
