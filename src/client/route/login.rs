use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaLock, Icon};
use dioxus_logger::tracing;

use crate::client::{
    component::{page::LoadingPage, Page},
    constant::SITE_NAME,
    model::auth::AuthState,
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::{get_auth_status, login};

#[component]
pub fn Login() -> Element {
    let mut auth_state = use_context::<Signal<AuthState>>();
    let nav = navigator();

    let mut password = use_signal(String::new);
    let mut submitted_password = use_signal(String::new);
    let mut should_submit = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let fetched = auth_state.read().fetched;
    let authenticated = auth_state.read().authenticated;

    // Redirect sessions that are already logged in
    use_effect(use_reactive!(|(fetched, authenticated)| {
        if fetched && authenticated {
            nav.push(Route::Dashboard {});
        }
    }));

    #[cfg(feature = "web")]
    let future = use_resource(move || async move {
        if should_submit() {
            let result = match login(submitted_password()).await {
                Ok(_) => get_auth_status().await.map(AuthState::from),
                Err(err) => Err(err),
            };
            Some(result)
        } else {
            None
        }
    });

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Some(result)) = future.read_unchecked().as_ref() {
            match result {
                Ok(state) => {
                    password.set(String::new());
                    error.set(None);
                    auth_state.set(state.clone());
                }
                Err(err) => {
                    tracing::warn!("Login failed: {}", err);
                    error.set(Some(err.message.clone()));
                }
            }
            should_submit.set(false);
        }
    });

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if password().is_empty() {
            error.set(Some("Password is required".to_string()));
            return;
        }

        error.set(None);
        submitted_password.set(password());
        should_submit.set(true);
    };

    let is_submitting = should_submit();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        if !fetched || authenticated {
            LoadingPage {}
        } else {
            Page {
                class: "page-center",
                form {
                    class: "card login-card",
                    onsubmit: on_submit,
                    div {
                        class: "card-title",
                        Icon { width: 20, height: 20, icon: FaLock }
                        h1 { "{SITE_NAME}" }
                    }
                    label {
                        class: "field",
                        span { "Admin password" }
                        input {
                            r#type: "password",
                            autocomplete: "current-password",
                            value: "{password}",
                            disabled: is_submitting,
                            oninput: move |e| password.set(e.value())
                        }
                    }
                    if let Some(err) = error() {
                        div { class: "alert alert-error", "{err}" }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: is_submitting,
                        if is_submitting { "Logging in..." } else { "Login" }
                    }
                }
            }
        }
    }
}
