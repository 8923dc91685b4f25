#![cfg(not(target_arch = "wasm32"))]
#![allow(non_snake_case)]

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use dioxus::prelude::*;
use greeter_client::{ApiClient, HelloDisplay};
use greeter_shared::PollPolicy;
use tokio::time::Instant;

async fn spawn_server(router: Router) -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiClient::new().with_base_url(format!("http://{addr}"))
}

/// Run the dom's tasks and renders until `done` holds for the rendered html or `window` passes.
async fn drive_until(dom: &mut VirtualDom, window: Duration, done: impl Fn(&str) -> bool) -> String {
    let deadline = Instant::now() + window;
    loop {
        let html = dioxus_ssr::render(dom);
        let now = Instant::now();
        if done(&html) || now >= deadline {
            return html;
        }
        if tokio::time::timeout(deadline - now, dom.wait_for_work())
            .await
            .is_err()
        {
            return dioxus_ssr::render(dom);
        }
        dom.render_immediate_to_vec();
    }
}

#[component]
fn Mounted(policy: PollPolicy) -> Element {
    rsx! {
        HelloDisplay { policy }
    }
}

/// Shows a polling `HelloDisplay`, then unmounts it after `visible_ms`.
#[component]
fn UnmountAfter(visible_ms: u64) -> Element {
    let mut show = use_signal(|| true);
    use_future(move || async move {
        tokio::time::sleep(Duration::from_millis(visible_ms)).await;
        show.set(false);
    });

    rsx! {
        if show() {
            HelloDisplay { policy: PollPolicy::Every(Duration::from_millis(50)) }
        } else {
            p { class: "unmounted" }
        }
    }
}

fn mount(policy: PollPolicy, client: ApiClient) -> VirtualDom {
    let mut dom = VirtualDom::new_with_props(Mounted, MountedProps { policy }).with_root_context(client);
    dom.rebuild_in_place();
    dom
}

#[tokio::test]
async fn heading_shows_fetched_text() {
    let client = spawn_server(Router::new().route("/api/hello", get(|| async { "Hello" }))).await;
    let mut dom = mount(PollPolicy::Once, client);

    let before = dioxus_ssr::render(&dom);
    assert!(before.contains("App-title\"></h1>"), "{before}");

    let html = drive_until(&mut dom, Duration::from_secs(5), |html| html.contains("Hello</h1>")).await;
    assert!(html.contains("<h1 class=\"App-title\">Hello</h1>"), "{html}");
    assert!(html.contains("App-logo"), "{html}");
    assert!(html.contains("App-intro"), "{html}");
}

#[tokio::test]
async fn server_error_keeps_heading_empty_and_shows_status() {
    let client = spawn_server(Router::new().route(
        "/api/hello",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await;
    let mut dom = mount(PollPolicy::Once, client);

    let html = drive_until(&mut dom, Duration::from_secs(5), |html| html.contains("App-status")).await;
    assert!(html.contains("<h1 class=\"App-title\"></h1>"), "{html}");
    assert!(html.contains("HTTP 500"), "{html}");
    assert!(html.contains("App-logo"), "{html}");
}

#[tokio::test]
async fn unmount_stops_polling() {
    let calls = Arc::new(AtomicU64::new(0));
    let counter = calls.clone();
    let client = spawn_server(Router::new().route(
        "/api/hello",
        get(move || {
            let counter = counter.clone();
            async move { (counter.fetch_add(1, Ordering::SeqCst) + 1).to_string() }
        }),
    ))
    .await;

    let mut dom = VirtualDom::new_with_props(UnmountAfter, UnmountAfterProps { visible_ms: 400 })
        .with_root_context(client);
    dom.rebuild_in_place();

    let html = drive_until(&mut dom, Duration::from_secs(5), |html| html.contains("unmounted")).await;
    assert!(html.contains("unmounted"), "{html}");
    assert!(!html.contains("App-title"), "{html}");

    // Let anything the server already accepted finish.
    drive_until(&mut dom, Duration::from_millis(50), |_| false).await;
    let after_unmount = calls.load(Ordering::SeqCst);
    assert!(after_unmount >= 3, "only {after_unmount} calls while mounted");

    drive_until(&mut dom, Duration::from_millis(400), |_| false).await;
    assert_eq!(calls.load(Ordering::SeqCst), after_unmount);
}
