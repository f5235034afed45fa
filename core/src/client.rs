//! Exchange-rate client for the CBR daily archive.
//!
//! # Design
//! `ExchangeRateClient` owns one `Transport` for its whole lifetime so the
//! underlying connection pool is reused across calls. Each fetch is a single
//! GET: `build_fetch` derives the target from the date, the transport
//! executes it, and the response is checked and decoded here.
//!
//! `fetch` is the fault boundary. Transport faults, non-2xx statuses and
//! undecodable bodies are all logged through the injected `LogSink` and
//! returned as `None`. `try_fetch` runs the same pipeline but keeps the
//! failure as a `FetchError`.

use chrono::NaiveDate;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::logging::{LogFacade, LogSink};
use crate::transport::{Transport, UreqTransport};
use crate::types::DailyRates;

/// Date layout the archive paths are derived from.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Blocking client for `{base}/{YYYY}/{MM}/{DD}/daily_json.js`.
///
/// The date string is not validated by `fetch`: `-` becomes `/` and the
/// result is sent as-is, leaving the archive to reject nonsense with a 404.
/// Use `fetch_checked` to reject bad dates before any request is made.
#[derive(Debug)]
pub struct ExchangeRateClient<T = UreqTransport, L = LogFacade> {
    base_url: String,
    session: T,
    log: L,
}

impl ExchangeRateClient {
    /// Client for the live archive, logging through the `log` crate.
    pub fn new() -> Self {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Self {
        Self::from_parts(&config.base_url, UreqTransport::new(config), LogFacade)
    }
}

impl Default for ExchangeRateClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport, L: LogSink> ExchangeRateClient<T, L> {
    pub fn from_parts(base_url: &str, session: T, log: L) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        log.info(&format!("REST client connected to {base_url}"));
        Self {
            base_url,
            session,
            log,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The connection context shared by every call on this client.
    pub fn session(&self) -> &T {
        &self.session
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn build_fetch(&self, date: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{}/daily_json.js", self.base_url, date.replace('-', "/")),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Rates published for `date` (`YYYY-MM-DD`), or `None` on any failure.
    pub fn fetch(&self, date: &str) -> Option<Value> {
        self.try_fetch(date).ok()
    }

    pub fn fetch_on(&self, date: NaiveDate) -> Option<Value> {
        self.fetch(&date.format(DATE_FORMAT).to_string())
    }

    /// Like `fetch`, but reports why no payload was produced.
    pub fn try_fetch(&self, date: &str) -> Result<Value, FetchError> {
        let request = self.build_fetch(date);
        self.log
            .info(&format!("Requesting exchange rates for {date}: {}", request.path));

        let result = self.round_trip(&request);
        if let Err(err) = &result {
            match err {
                FetchError::DecodeError { status, body, .. } => self.log.error(&format!(
                    "Failed to parse JSON for date {date} (HTTP {status}). Server response: {body}"
                )),
                other => self
                    .log
                    .error(&format!("Exchange rate request for {date} failed: {other}")),
            }
        }
        result
    }

    /// Strict variant of `try_fetch`: `date` must be a real, zero-padded
    /// `YYYY-MM-DD` calendar date or no request is made.
    pub fn fetch_checked(&self, date: &str) -> Result<Value, FetchError> {
        let canonical = NaiveDate::parse_from_str(date, DATE_FORMAT)
            .ok()
            .map(|d| d.format(DATE_FORMAT).to_string());
        if canonical.as_deref() != Some(date) {
            self.log
                .error(&format!("Rejected archive date {date:?}: expected YYYY-MM-DD"));
            return Err(FetchError::InvalidDate(date.to_string()));
        }
        self.try_fetch(date)
    }

    /// `fetch` followed by a shape check against `DailyRates`.
    pub fn fetch_rates(&self, date: &str) -> Option<DailyRates> {
        let payload = self.fetch(date)?;
        match DailyRates::from_payload(&payload) {
            Ok(rates) => Some(rates),
            Err(err) => {
                self.log
                    .error(&format!("Unexpected rate payload for {date}: {err}"));
                None
            }
        }
    }

    fn round_trip(&self, request: &HttpRequest) -> Result<Value, FetchError> {
        let response = self.session.execute(request)?;
        check_status(&response)?;
        self.log
            .info(&format!("Server responded successfully: {}", response.status));

        serde_json::from_str(&response.body).map_err(|e| FetchError::DecodeError {
            status: response.status,
            message: e.to_string(),
            body: response.body.clone(),
        })
    }
}

/// Map non-2xx status codes to the appropriate `FetchError` variant.
fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if response.is_success() {
        return Ok(());
    }
    let status = response.status;
    let body = response.body.clone();
    match status {
        404 => Err(FetchError::NotFound),
        500..=599 => Err(FetchError::ServerError { status, body }),
        _ => Err(FetchError::HttpError { status, body }),
    }
}
