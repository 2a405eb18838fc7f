use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaMoneyBillWave, FaRightFromBracket},
    Icon,
};

use crate::client::{
    component::toast::show_toast,
    constant::SITE_NAME,
    model::{
        auth::AuthState,
        toast::{ToastKind, Toasts},
    },
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::api::auth::logout;

#[component]
pub fn Header() -> Element {
    let mut auth_state = use_context::<Signal<AuthState>>();
    let toasts = use_context::<Signal<Toasts>>();
    let nav = navigator();

    let authenticated = auth_state.read().authenticated;
    let bot_ready = auth_state.read().bot_ready;

    let on_logout = move |_: MouseEvent| {
        #[cfg(feature = "web")]
        spawn(async move {
            match logout().await {
                Ok(_) => {
                    auth_state.set(AuthState::logged_out());
                    nav.push(Route::Login {});
                }
                Err(err) => show_toast(toasts, ToastKind::Error, err.message),
            }
        });
    };

    rsx!(div {
        class: "header",
        Link {
            to: Route::Dashboard {},
            class: "header-brand",
            Icon {
                width: 24,
                height: 24,
                icon: FaMoneyBillWave
            }
            p { {SITE_NAME} }
        }
        if authenticated {
            div {
                class: "header-actions",
                if bot_ready {
                    span { class: "badge badge-online", "Bot online" }
                } else {
                    span { class: "badge badge-offline", "Bot offline" }
                }
                button {
                    class: "btn btn-outline",
                    onclick: on_logout,
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaRightFromBracket
                    }
                    "Logout"
                }
            }
        }
    })
}
