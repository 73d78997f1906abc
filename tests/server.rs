//! End-to-end tests driving the full middleware chain over real sockets.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use duescript::config;
use duescript::rate_limit::RateLimiter;
use duescript::router;
use duescript::state::AppState;
use duescript::template::TemplateStore;

// Each test gets its own server (and rate-limit counters) on an ephemeral port.
async fn spawn_server() -> SocketAddr {
    let template = TemplateStore::load(Path::new("templates/script.js")).unwrap();
    let state = Arc::new(AppState {
        template,
        limiter: RateLimiter::new(config::RATE_LIMIT_MAX_REQUESTS, config::RATE_LIMIT_WINDOW),
    });
    let app = router::build(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    addr
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn valid_date_returns_rendered_script() {
    let addr = spawn_server().await;

    let res = client()
        .get(format!("http://{addr}/2025-12-31"))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()[reqwest::header::CONTENT_TYPE],
        "application/javascript"
    );

    let body = res.text().await.unwrap();
    assert!(body.contains("new Date(\"2025-12-31T00:00:00\")"));
    assert!(body.contains("Overdue since 2025-12-31"));
    assert!(!body.contains("{{"), "placeholders must not survive rendering");
}

#[tokio::test]
async fn leap_day_is_valid_only_on_leap_years() {
    let addr = spawn_server().await;
    let client = client();

    let res = client
        .get(format!("http://{addr}/2024-02-29"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let res = client
        .get(format!("http://{addr}/2023-02-29"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    assert_eq!(res.text().await.unwrap(), "Invalid date format. Use YYYY-MM-DD.");
}

#[tokio::test]
async fn malformed_segments_are_rejected() {
    let addr = spawn_server().await;
    let client = client();

    for segment in ["2024-13-01", "abcd-ef-gh", "2024-1-1", "%22%3Balert(1)%2F%2F"] {
        let res = client
            .get(format!("http://{addr}/{segment}"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 400, "{segment} should be rejected");
        assert_eq!(res.text().await.unwrap(), "Invalid date format. Use YYYY-MM-DD.");
    }
}

#[tokio::test]
async fn multi_segment_paths_fall_through_to_not_found() {
    let addr = spawn_server().await;

    let res = client()
        .get(format!("http://{addr}/2024/01/01"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn heartbeat_returns_empty_ok() {
    let addr = spawn_server().await;

    let res = client().get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "");
}

#[tokio::test]
async fn sixth_rapid_request_is_throttled() {
    let addr = spawn_server().await;
    let client = client();

    for i in 1..=5 {
        let res = client
            .get(format!("http://{addr}/2025-06-01"))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200, "request {i} should be allowed");
    }

    let res = client
        .get(format!("http://{addr}/2025-06-01"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 429);
}

#[tokio::test]
async fn throttled_ip_recovers_after_the_window() {
    let addr = spawn_server().await;
    let client = client();

    for _ in 0..5 {
        client
            .get(format!("http://{addr}/2025-06-01"))
            .send()
            .await
            .unwrap();
    }
    let res = client
        .get(format!("http://{addr}/2025-06-01"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 429);

    tokio::time::sleep(config::RATE_LIMIT_WINDOW + Duration::from_millis(200)).await;

    let res = client
        .get(format!("http://{addr}/2025-06-01"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn heartbeat_ignores_rate_limit_state() {
    let addr = spawn_server().await;
    let client = client();

    // Exhaust the window on the script route
    for _ in 0..6 {
        client
            .get(format!("http://{addr}/2025-06-01"))
            .send()
            .await
            .unwrap();
    }

    let res = client.get(format!("http://{addr}/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
}
