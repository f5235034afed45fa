use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

pub use axum::http::StatusCode;

/// Date of the bundled archive day.
pub const SAMPLE_DATE: &str = "2025-03-01";

/// The archive's reply for `SAMPLE_DATE`.
pub const SAMPLE_DAY: &str = include_str!("../fixtures/daily_json_2025-03-01.json");

const ARCHIVE_CONTENT_TYPE: &str = "application/javascript; charset=utf-8";

#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

/// Canned replies keyed by `YYYY-MM-DD`. Dates without an entry get a 404,
/// which is what the real archive answers for days it never published.
#[derive(Clone, Debug, Default)]
pub struct Archive {
    days: HashMap<String, Reply>,
}

impl Archive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive containing only `SAMPLE_DATE`.
    pub fn seeded() -> Self {
        Self::new().with_reply(SAMPLE_DATE, StatusCode::OK, SAMPLE_DAY)
    }

    pub fn with_rates(self, date: &str, rates: &Value) -> Self {
        self.with_reply(date, StatusCode::OK, rates.to_string())
    }

    /// Answer `date` with an arbitrary status and raw body.
    pub fn with_reply(mut self, date: &str, status: StatusCode, body: impl Into<String>) -> Self {
        self.days.insert(
            date.to_string(),
            Reply {
                status,
                body: body.into(),
                delay: None,
            },
        );
        self
    }

    /// Hold the reply for `date` back by `delay`. No-op for unknown dates.
    pub fn with_delay(mut self, date: &str, delay: Duration) -> Self {
        if let Some(reply) = self.days.get_mut(date) {
            reply.delay = Some(delay);
        }
        self
    }

    pub fn get(&self, date: &str) -> Option<&Reply> {
        self.days.get(date)
    }
}

pub type Db = Arc<Archive>;

pub fn app() -> Router {
    app_with(Archive::seeded())
}

pub fn app_with(archive: Archive) -> Router {
    Router::new()
        .route("/archive/{year}/{month}/{day}/daily_json.js", get(daily_json))
        .with_state(Arc::new(archive))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with(listener, Archive::seeded()).await
}

pub async fn run_with(listener: TcpListener, archive: Archive) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(archive)).await
}

async fn daily_json(
    State(db): State<Db>,
    Path((year, month, day)): Path<(String, String, String)>,
) -> Response {
    let Some(reply) = db.get(&format!("{year}-{month}-{day}")) else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };
    if let Some(delay) = reply.delay {
        tokio::time::sleep(delay).await;
    }
    (
        reply.status,
        [(header::CONTENT_TYPE, ARCHIVE_CONTENT_TYPE)],
        reply.body.clone(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_day_is_valid_json_with_major_currencies() {
        let day: Value = serde_json::from_str(SAMPLE_DAY).unwrap();
        assert_eq!(day["Date"], "2025-03-01T11:30:00+03:00");
        assert!(day["PreviousDate"].is_string());
        for code in ["USD", "EUR"] {
            assert!(day["Valute"][code]["Value"].as_f64().unwrap() > 0.0, "{code}");
        }
    }

    #[test]
    fn seeded_archive_has_only_the_sample_day() {
        let archive = Archive::seeded();
        assert_eq!(archive.get(SAMPLE_DATE).unwrap().status, StatusCode::OK);
        assert!(archive.get("2030-01-01").is_none());
    }

    #[test]
    fn with_rates_serializes_value() {
        let archive = Archive::new().with_rates("2025-03-02", &serde_json::json!({"Valute": {}}));
        assert_eq!(archive.get("2025-03-02").unwrap().body, r#"{"Valute":{}}"#);
    }

    #[test]
    fn delay_applies_to_known_dates_only() {
        let archive = Archive::seeded()
            .with_delay(SAMPLE_DATE, Duration::from_millis(50))
            .with_delay("2030-01-01", Duration::from_millis(50));
        assert_eq!(
            archive.get(SAMPLE_DATE).unwrap().delay,
            Some(Duration::from_millis(50))
        );
        assert!(archive.get("2030-01-01").is_none());
    }

    #[test]
    fn later_reply_replaces_earlier_one() {
        let archive = Archive::seeded().with_reply(SAMPLE_DATE, StatusCode::INTERNAL_SERVER_ERROR, "boom");
        let reply = archive.get(SAMPLE_DATE).unwrap();
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.body, "boom");
    }
}
