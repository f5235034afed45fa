//! Blocking client for historical CBR exchange rates.
//!
//! # Overview
//! `ExchangeRateClient::fetch` retrieves the rates the Central Bank of Russia
//! published for a date from the `cbr-xml-daily.ru` archive. It makes exactly
//! one GET per call and returns the decoded JSON, or `None` if anything went
//! wrong. The reason is written to the client's log sink, never returned.
//!
//! # Design
//! - The client owns one `Transport` (a pooled `ureq::Agent` in production)
//!   and reuses it for every call.
//! - Logging goes through an injected `LogSink`; `MemoryLog` makes emitted
//!   entries assertable in tests.
//! - `try_fetch` and `fetch_checked` expose the same pipeline with a tagged
//!   `FetchError` for callers that need to know why.
//! - No retries, caching, or rate-limit handling.

pub mod client;
pub mod config;
pub mod curl;
pub mod error;
pub mod http;
pub mod logging;
pub mod transport;
pub mod types;

pub use client::ExchangeRateClient;
pub use config::{ClientConfig, ConfigError, BASE_URL};
pub use error::{FetchError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use logging::{LogFacade, LogRecord, LogSink, MemoryLog};
pub use transport::{transport_fn, FnTransport, Transport, UreqTransport};
pub use types::{DailyRates, Valute};
