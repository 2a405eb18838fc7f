use dioxus::prelude::*;

use crate::client::{
    component::{Header, ToastHost},
    router::Route,
};

#[component]
pub fn Layout() -> Element {
    rsx!(div {
        Header {  }
        ToastHost {  }
        Outlet::<Route> {}
    })
}
