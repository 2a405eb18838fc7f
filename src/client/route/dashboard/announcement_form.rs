use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::model::{auth::AuthState, toast::Toasts},
    model::message::CreateAnnouncementDto,
};

#[cfg(feature = "web")]
use crate::client::{
    api::notification::send_announcement,
    route::dashboard::{report_error, report_sent},
};

#[component]
pub fn AnnouncementForm(mut refetch_trigger: Signal<u32>) -> Element {
    let auth_state = use_context::<Signal<AuthState>>();
    let toasts = use_context::<Signal<Toasts>>();

    let mut content = use_signal(String::new);
    let mut submit_data = use_signal(CreateAnnouncementDto::default);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            Some(send_announcement(submit_data()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(sent) => {
                    content.set(String::new());
                    report_sent(toasts, &sent.message, sent.warning.as_deref());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to send announcement: {}", err);
                    report_error(auth_state, toasts, err);
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if content().trim().is_empty() {
            error.set(Some("Announcement content is required".to_string()));
            return;
        }

        error.set(None);
        submit_data.set(CreateAnnouncementDto { content: content() });
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx!(
        form {
            class: "card",
            onsubmit: on_submit,
            h2 { class: "card-title", "📢 Announcement" }
            label {
                class: "field",
                span { "Content" }
                textarea {
                    rows: 5,
                    value: "{content}",
                    disabled: is_submitting,
                    oninput: move |e| content.set(e.value())
                }
            }
            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }
            button {
                r#type: "submit",
                class: "btn btn-warning",
                disabled: is_submitting,
                if is_submitting { "Sending..." } else { "Send announcement" }
            }
        }
    )
}
