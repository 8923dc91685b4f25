//! The greeting page: logo, fetched heading, instructions.

use dioxus::prelude::*;
use greeter_shared::PollPolicy;

use crate::hooks::use_hello_message;

const LOGO: Asset = asset!("/assets/logo.svg");

/// Fetches `/api/hello` per `policy` and shows the latest text as the heading.
#[component]
pub fn HelloDisplay(#[props(default)] policy: PollPolicy) -> Element {
    let message = use_hello_message(policy);

    let state = message.read();
    let error = state.last_error.as_ref().map(|e| e.user_message());

    rsx! {
        HelloView { message: state.text.clone(), error }
    }
}

/// Stateless markup for [`HelloDisplay`].
#[component]
pub fn HelloView(message: String, #[props(!optional)] error: Option<String>) -> Element {
    rsx! {
        div { class: "App",
            header { class: "App-header",
                img { src: LOGO, class: "App-logo", alt: "logo" }
                h1 { class: "App-title", "{message}" }
            }
            if let Some(error) = error {
                p { class: "App-status", role: "status", "{error}" }
            }
            p { class: "App-intro",
                "To get started, edit "
                code { "crates/client/src/components/hello_display.rs" }
                " and save to reload."
            }
        }
    }
}
