use dioxus::prelude::*;

use crate::client::{component::page::LoadingPage, model::auth::AuthState, router::Route};

/// Renders the nested route only for logged-in sessions, redirecting to the
/// login page otherwise.
#[component]
pub fn RequiresLoggedIn() -> Element {
    let auth_state = use_context::<Signal<AuthState>>();
    let nav = navigator();

    let fetched = auth_state.read().fetched;
    let authenticated = auth_state.read().authenticated;

    use_effect(use_reactive!(|(fetched, authenticated)| {
        if fetched && !authenticated {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetched {
            LoadingPage {  }
        } else if authenticated {
            Outlet::<Route> {}
        }
    }
}
