//! Operator dashboard: stats, the three send forms and history.

pub mod announcement_form;
pub mod history;
pub mod message_form;
pub mod payout_form;
pub mod stats;

use dioxus::prelude::*;

use crate::client::{
    component::{toast::show_toast, Page},
    constant::SITE_NAME,
    model::{
        auth::AuthState,
        error::ApiError,
        toast::{ToastKind, Toasts},
    },
};

use self::{
    announcement_form::AnnouncementForm,
    history::{MessageHistory, PayoutHistory},
    message_form::CustomMessageForm,
    payout_form::PayoutForm,
    stats::StatsCards,
};

#[component]
pub fn Dashboard() -> Element {
    // Bumped after every successful send so stats and history refetch
    let refetch_trigger = use_signal(|| 0u32);

    rsx! {
        Title { "Dashboard | {SITE_NAME}" }
        Page {
            class: "dashboard",
            StatsCards { refetch_trigger }
            div {
                class: "grid",
                PayoutForm { refetch_trigger }
                CustomMessageForm { refetch_trigger }
                AnnouncementForm { refetch_trigger }
            }
            div {
                class: "grid",
                PayoutHistory { refetch_trigger }
                MessageHistory { refetch_trigger }
            }
        }
    }
}

/// Reports a failed API call. An expired session sends the operator back to login.
pub fn report_error(
    mut auth_state: Signal<AuthState>,
    toasts: Signal<Toasts>,
    err: &ApiError,
) {
    if err.is_unauthorized() {
        auth_state.set(AuthState::logged_out());
    }
    show_toast(toasts, ToastKind::Error, err.message.clone());
}

/// Reports a successful send, as a warning when the history write failed.
pub fn report_sent(toasts: Signal<Toasts>, message: &str, warning: Option<&str>) {
    match warning {
        Some(warning) => show_toast(
            toasts,
            ToastKind::Warning,
            format!("{} ({})", message, warning),
        ),
        None => show_toast(toasts, ToastKind::Success, message),
    }
}
