use dioxus::prelude::*;

use crate::client::{
    constant::SITE_NAME,
    model::{auth::AuthState, toast::Toasts},
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::get_auth_status;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let mut auth_state = use_context_provider(|| Signal::new(AuthState::default()));
    use_context_provider(|| Signal::new(Toasts::default()));

    // Fetch auth status on first load
    #[cfg(feature = "web")]
    use_future(move || async move {
        let state = match get_auth_status().await {
            Ok(status) => AuthState::from(status),
            Err(e) => {
                dioxus_logger::tracing::error!("Failed to fetch auth status: {}", e);
                AuthState::logged_out()
            }
        };
        auth_state.set(state);
    });

    rsx! {
        Title { "{SITE_NAME}" }
        document::Meta {
            name: "description",
            content: "Admin panel for posting payout notifications to Discord"
        }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
