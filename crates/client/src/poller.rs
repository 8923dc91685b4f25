//! The refresh loop behind `HelloDisplay`, independent of any UI framework.

use futures_util::{stream::FuturesUnordered, FutureExt, StreamExt};
use greeter_shared::{Completion, FetchOutcome, PollPolicy};

use crate::api_client::ApiClient;
use crate::timer;

/// Drive refreshes according to `policy`, reporting each one as it finishes.
///
/// With [`PollPolicy::Once`] this returns after the single completion. With
/// [`PollPolicy::Every`] it never returns: a tick does not wait for earlier
/// refreshes, so they may overlap and finish out of issue order. Every
/// outstanding request lives inside this future, so dropping it cancels the
/// timer and all of them at once.
pub async fn run_poller<F>(client: ApiClient, policy: PollPolicy, mut on_completion: F)
where
    F: FnMut(Completion),
{
    let mut in_flight = FuturesUnordered::new();
    let mut seq = 0u64;
    in_flight.push(refresh(client.clone(), seq));

    let period = match policy {
        PollPolicy::Once => {
            while let Some(completion) = in_flight.next().await {
                on_completion(completion);
            }
            return;
        }
        PollPolicy::Every(period) => period,
    };

    loop {
        let tick = timer::sleep(period).fuse();
        futures_util::pin_mut!(tick);

        loop {
            futures_util::select! {
                completion = in_flight.select_next_some() => on_completion(completion),
                () = tick => break,
            }
        }

        seq += 1;
        in_flight.push(refresh(client.clone(), seq));
    }
}

async fn refresh(client: ApiClient, seq: u64) -> Completion {
    let outcome = FetchOutcome::from(client.fetch_hello().await);
    match &outcome {
        FetchOutcome::Success(text) => {
            crate::log_debug!("refresh #{} got {} bytes", seq, text.len());
        }
        FetchOutcome::Failure(e) => {
            crate::log_warn!("refresh #{} failed: {}", seq, e);
        }
    }
    Completion { seq, outcome }
}
