use dioxus::prelude::*;

use crate::client::model::toast::{ToastKind, Toasts};

/// Shows a toast and schedules its removal.
pub fn show_toast(mut toasts: Signal<Toasts>, kind: ToastKind, message: impl Into<String>) {
    let id = toasts.write().push(kind, message);

    #[cfg(feature = "web")]
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(crate::client::constant::TOAST_DURATION_MS).await;
        toasts.write().dismiss(id);
    });

    #[cfg(not(feature = "web"))]
    let _ = id;
}

#[component]
pub fn ToastHost() -> Element {
    let mut toasts = use_context::<Signal<Toasts>>();

    rsx!(
        div {
            class: "toast-host",
            for toast in toasts.read().items.iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    onclick: move |_| toasts.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    )
}
