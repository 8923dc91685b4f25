use dioxus::prelude::*;
use greeter_shared::{DisplayedMessage, PollPolicy};

use crate::api_client::ApiClient;
use crate::poller::run_poller;

/// A hook that keeps a [`DisplayedMessage`] in sync with `GET /api/hello`.
///
/// The polling task belongs to the calling component: it starts on mount and
/// is dropped, together with any requests still in flight, on unmount.
/// Requires an [`ApiClient`] in context.
///
/// ### Example
///
/// ```rust,ignore
/// let message = use_hello_message(PollPolicy::Once);
///
/// rsx! {
///     h1 { "{message.read().text}" }
/// }
/// ```
pub fn use_hello_message(policy: PollPolicy) -> Signal<DisplayedMessage> {
    let client = use_context::<ApiClient>();
    let mut message = use_signal(DisplayedMessage::new);

    use_future(move || {
        let client = client.clone();
        async move {
            run_poller(client, policy, move |completion| {
                message.write().apply(completion);
            })
            .await;
        }
    });

    message
}
