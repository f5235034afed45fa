use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Archive, SAMPLE_DATE};
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- archived day ---

#[tokio::test]
async fn sample_day_is_served() {
    let resp = app()
        .oneshot(get("/archive/2025/03/01/daily_json.js"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/javascript; charset=utf-8"
    );
    let day = body_json(resp).await;
    assert_eq!(day["PreviousDate"], "2025-02-28T11:30:00+03:00");
    assert_eq!(day["Valute"]["USD"]["CharCode"], "USD");
    assert!(day["Valute"]["EUR"]["Value"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn custom_rates_are_served() {
    let rates = serde_json::json!({
        "Date": "2024-01-10T11:30:00+03:00",
        "PreviousDate": "2024-01-09T11:30:00+03:00",
        "Valute": {"USD": {"Value": 90.4}}
    });
    let resp = app_with(Archive::new().with_rates("2024-01-10", &rates))
        .oneshot(get("/archive/2024/01/10/daily_json.js"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, rates);
}

// --- missing days ---

#[tokio::test]
async fn unpublished_days_return_404() {
    for uri in [
        "/archive/2030/01/01/daily_json.js",
        "/archive/1900/01/01/daily_json.js",
        "/archive/2025/13/01/daily_json.js",
        "/archive/abcd/ef/gh/daily_json.js",
    ] {
        let resp = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn paths_outside_the_archive_return_404() {
    let resp = app().oneshot(get("/archive/2025/03/01")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app().oneshot(get("/2025/03/01/daily_json.js")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- canned faults ---

#[tokio::test]
async fn canned_server_error_is_served() {
    let archive = Archive::new().with_reply(
        SAMPLE_DATE,
        StatusCode::INTERNAL_SERVER_ERROR,
        "500 Internal Server Error",
    );
    let resp = app_with(archive)
        .oneshot(get("/archive/2025/03/01/daily_json.js"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_bytes(resp).await, "500 Internal Server Error");
}

#[tokio::test]
async fn canned_invalid_body_is_served_verbatim() {
    let archive = Archive::new().with_reply(SAMPLE_DATE, StatusCode::OK, "INVALID JSON RESPONSE");
    let resp = app_with(archive)
        .oneshot(get("/archive/2025/03/01/daily_json.js"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, "INVALID JSON RESPONSE");
}

#[tokio::test]
async fn delayed_reply_still_arrives() {
    let archive = Archive::seeded().with_delay(SAMPLE_DATE, std::time::Duration::from_millis(20));
    let started = std::time::Instant::now();
    let resp = app_with(archive)
        .oneshot(get("/archive/2025/03/01/daily_json.js"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(started.elapsed() >= std::time::Duration::from_millis(20));
}
