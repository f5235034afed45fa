//! Error types for the exchange-rate client.
//!
//! # Design
//! `fetch` collapses every failure into `None`; these types exist for the
//! tagged `try_fetch` / `fetch_checked` path and for the log lines both paths
//! emit. `NotFound` gets its own variant because a 404 is how the archive
//! reports a date it has no rates for. Other non-2xx replies keep the raw
//! status and body for debugging.

use thiserror::Error;

/// Faults raised by a `Transport` before an HTTP status was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection refused or reset, DNS failure, broken pipe.
    #[error("connection error: {0}")]
    Connection(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    /// Anything else the transport rejected (bad URI, protocol error, TLS).
    #[error("transport error: {0}")]
    Other(String),
}

impl From<ureq::Error> for TransportError {
    fn from(err: ureq::Error) -> Self {
        match &err {
            ureq::Error::Timeout(_) => TransportError::Timeout(err.to_string()),
            ureq::Error::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
                TransportError::Timeout(err.to_string())
            }
            ureq::Error::Io(_) | ureq::Error::HostNotFound | ureq::Error::ConnectionFailed => {
                TransportError::Connection(err.to_string())
            }
            _ => TransportError::Other(err.to_string()),
        }
    }
}

/// Why a fetch produced no payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Rejected before any request was made (strict mode only).
    #[error("invalid archive date {0:?}")]
    InvalidDate(String),

    /// The archive has no rates for the date (HTTP 404).
    #[error("no archived rates for the requested date (HTTP 404)")]
    NotFound,

    #[error("server error: HTTP {status}")]
    ServerError { status: u16, body: String },

    /// Any other non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    #[error(transparent)]
    Network(#[from] TransportError),

    /// A 2xx response whose body is not valid JSON.
    #[error("failed to decode response body (HTTP {status}): {message}")]
    DecodeError {
        status: u16,
        message: String,
        body: String,
    },
}
