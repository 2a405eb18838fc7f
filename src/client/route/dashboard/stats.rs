use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::stats::StatsDto};

#[cfg(feature = "web")]
use crate::client::api::stats::get_stats;

#[component]
pub fn StatsCards(refetch_trigger: Signal<u32>) -> Element {
    let mut stats = use_signal(|| None::<Result<StatsDto, ApiError>>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        let _ = refetch_trigger(); // Read trigger to track changes
        get_stats().await
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(result) = &*future.read_unchecked() {
            stats.set(Some(result.clone()));
        }
    });

    let (payouts, messages) = match &*stats.read() {
        Some(Ok(s)) => (s.total_payouts.to_string(), s.total_messages.to_string()),
        Some(Err(_)) => ("-".to_string(), "-".to_string()),
        None => ("...".to_string(), "...".to_string()),
    };

    rsx!(
        div {
            class: "stats",
            div {
                class: "stat-card",
                p { class: "stat-label", "Total payouts" }
                p { class: "stat-value", "{payouts}" }
            }
            div {
                class: "stat-card",
                p { class: "stat-label", "Total messages" }
                p { class: "stat-value", "{messages}" }
            }
        }
    )
}
