use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::model::{auth::AuthState, toast::Toasts},
    model::payout::CreatePayoutDto,
};

#[cfg(feature = "web")]
use crate::client::{
    api::notification::send_payout,
    route::dashboard::{report_error, report_sent},
};

/// Form field values
#[derive(Clone, Default)]
struct PayoutFields {
    recipient_name: String,
    amount: String,
    transaction_id: String,
    transaction_link: String,
    notes: String,
}

impl PayoutFields {
    fn missing_required(&self) -> bool {
        [&self.recipient_name, &self.amount, &self.transaction_id]
            .iter()
            .any(|v| v.trim().is_empty())
    }

    fn into_dto(self) -> CreatePayoutDto {
        let optional = |v: String| (!v.trim().is_empty()).then_some(v);
        CreatePayoutDto {
            recipient_name: self.recipient_name,
            amount: self.amount,
            transaction_id: self.transaction_id,
            transaction_link: optional(self.transaction_link),
            notes: optional(self.notes),
        }
    }
}

#[component]
pub fn PayoutForm(mut refetch_trigger: Signal<u32>) -> Element {
    let auth_state = use_context::<Signal<AuthState>>();
    let toasts = use_context::<Signal<Toasts>>();

    let mut fields = use_signal(PayoutFields::default);
    let mut submit_data = use_signal(CreatePayoutDto::default);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            Some(send_payout(submit_data()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(sent) => {
                    fields.set(PayoutFields::default());
                    report_sent(toasts, &sent.message, sent.warning.as_deref());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to send payout: {}", err);
                    report_error(auth_state, toasts, err);
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let values = fields();
        if values.missing_required() {
            error.set(Some(
                "Recipient, amount and transaction ID are required".to_string(),
            ));
            return;
        }

        error.set(None);
        submit_data.set(values.into_dto());
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let values = fields();

    rsx!(
        form {
            class: "card",
            onsubmit: on_submit,
            h2 { class: "card-title", "💸 Send payout" }
            label {
                class: "field",
                span { "Recipient name" }
                input {
                    value: "{values.recipient_name}",
                    disabled: is_submitting,
                    oninput: move |e| fields.write().recipient_name = e.value()
                }
            }
            label {
                class: "field",
                span { "Amount" }
                input {
                    placeholder: "$100",
                    value: "{values.amount}",
                    disabled: is_submitting,
                    oninput: move |e| fields.write().amount = e.value()
                }
            }
            label {
                class: "field",
                span { "Transaction ID" }
                input {
                    value: "{values.transaction_id}",
                    disabled: is_submitting,
                    oninput: move |e| fields.write().transaction_id = e.value()
                }
            }
            label {
                class: "field",
                span { "Transaction link (optional)" }
                input {
                    r#type: "url",
                    value: "{values.transaction_link}",
                    disabled: is_submitting,
                    oninput: move |e| fields.write().transaction_link = e.value()
                }
            }
            label {
                class: "field",
                span { "Notes (optional)" }
                textarea {
                    value: "{values.notes}",
                    disabled: is_submitting,
                    oninput: move |e| fields.write().notes = e.value()
                }
            }
            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: is_submitting,
                if is_submitting { "Sending..." } else { "Send payout" }
            }
        }
    )
}
