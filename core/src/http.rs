//! HTTP request and response values exchanged with a `Transport`.
//!
//! # Design
//! Requests and responses are plain data. `ExchangeRateClient` builds an
//! `HttpRequest`, hands it to its transport, and interprets the returned
//! `HttpResponse`. Keeping the wire step behind plain values lets tests swap
//! the transport for a closure without touching the network.

use crate::curl;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Render this request as an equivalent curl invocation.
    pub fn to_curl(&self) -> String {
        curl::curl_command(self.method, &self.path, Some(self.headers.as_slice()), self.body.as_deref())
    }
}

/// An HTTP response described as plain data.
///
/// `body` holds the raw text; bytes that are not valid UTF-8 are replaced
/// so the decode step, not the transport, reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
