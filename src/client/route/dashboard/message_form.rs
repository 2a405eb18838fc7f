use dioxus::prelude::*;
use dioxus_logger::tracing;
use pulldown_cmark::{html, Options, Parser};

use crate::{
    client::model::{auth::AuthState, toast::Toasts},
    model::message::CreateCustomMessageDto,
};

#[cfg(feature = "web")]
use crate::client::{
    api::notification::send_custom_message,
    route::dashboard::{report_error, report_sent},
};

const DEFAULT_EMBED_COLOR: &str = "#5865F2";

#[derive(Clone)]
struct MessageFields {
    content: String,
    use_embed: bool,
    embed_title: String,
    embed_color: String,
}

impl Default for MessageFields {
    fn default() -> Self {
        Self {
            content: String::new(),
            use_embed: false,
            embed_title: String::new(),
            embed_color: DEFAULT_EMBED_COLOR.to_string(),
        }
    }
}

/// Renders Discord-flavoured markdown closely enough for a preview.
fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, Options::all());
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn CustomMessageForm(mut refetch_trigger: Signal<u32>) -> Element {
    let auth_state = use_context::<Signal<AuthState>>();
    let toasts = use_context::<Signal<Toasts>>();

    let mut fields = use_signal(MessageFields::default);
    let mut submit_data = use_signal(CreateCustomMessageDto::default);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            Some(send_custom_message(submit_data()).await)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(sent) => {
                    fields.set(MessageFields::default());
                    report_sent(toasts, &sent.message, sent.warning.as_deref());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => {
                    tracing::error!("Failed to send custom message: {}", err);
                    report_error(auth_state, toasts, err);
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let values = fields();
        if values.content.trim().is_empty() {
            error.set(Some("Message content is required".to_string()));
            return;
        }

        error.set(None);
        submit_data.set(CreateCustomMessageDto {
            content: values.content,
            use_embed: values.use_embed,
            embed_title: values.use_embed.then_some(values.embed_title),
            embed_color: values.use_embed.then_some(values.embed_color),
        });
        should_submit.set(true);
    };

    let is_submitting = should_submit();
    let values = fields();
    let preview = render_markdown(&values.content);

    rsx!(
        form {
            class: "card",
            onsubmit: on_submit,
            h2 { class: "card-title", "💬 Custom message" }
            label {
                class: "field",
                span { "Content (markdown)" }
                textarea {
                    rows: 5,
                    value: "{values.content}",
                    disabled: is_submitting,
                    oninput: move |e| fields.write().content = e.value()
                }
            }
            label {
                class: "field field-inline",
                input {
                    r#type: "checkbox",
                    checked: values.use_embed,
                    disabled: is_submitting,
                    onchange: move |e| fields.write().use_embed = e.checked()
                }
                span { "Send as embed" }
            }
            if values.use_embed {
                label {
                    class: "field",
                    span { "Embed title" }
                    input {
                        placeholder: "Message",
                        value: "{values.embed_title}",
                        disabled: is_submitting,
                        oninput: move |e| fields.write().embed_title = e.value()
                    }
                }
                label {
                    class: "field",
                    span { "Embed color" }
                    input {
                        r#type: "color",
                        value: "{values.embed_color}",
                        disabled: is_submitting,
                        oninput: move |e| fields.write().embed_color = e.value()
                    }
                }
            }
            if !values.content.trim().is_empty() {
                div {
                    class: if values.use_embed { "preview preview-embed" } else { "preview" },
                    style: if values.use_embed {
                        format!("border-left-color: {}", values.embed_color)
                    } else {
                        String::new()
                    },
                    if values.use_embed {
                        p {
                            class: "preview-title",
                            if values.embed_title.trim().is_empty() {
                                "Message"
                            } else {
                                "{values.embed_title}"
                            }
                        }
                    }
                    div { dangerous_inner_html: "{preview}" }
                }
            }
            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }
            button {
                r#type: "submit",
                class: "btn btn-primary",
                disabled: is_submitting,
                if is_submitting { "Sending..." } else { "Send message" }
            }
        }
    )
}
