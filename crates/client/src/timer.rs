//! Platform timer used between polls.

use std::time::Duration;

#[cfg(target_arch = "wasm32")]
pub async fn sleep(period: Duration) {
    gloo_timers::future::sleep(period).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(period: Duration) {
    tokio::time::sleep(period).await;
}
