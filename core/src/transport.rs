//! The connection context behind `ExchangeRateClient`.
//!
//! # Design
//! `Transport` is the single seam between the client and the wire. The
//! production implementation, `UreqTransport`, owns one `ureq::Agent` whose
//! connection pool gives keep-alive reuse across sequential fetches. Tests
//! wrap a closure in `FnTransport` to script responses and faults.

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// Implementations must return non-2xx replies as `Ok` responses and
/// reserve `Err` for faults where no status was received.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by a reusable `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Self {
        // Status interpretation belongs to the client, not the agent.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self { agent }
    }

    pub fn agent(&self) -> &ureq::Agent {
        &self.agent
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl Transport for UreqTransport {
    /// Sends a bare GET, which is all the archive needs. Other methods,
    /// headers and bodies are refused before anything goes on the wire.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        if request.method != HttpMethod::Get || !request.headers.is_empty() || request.body.is_some() {
            return Err(TransportError::Other(format!(
                "unsupported request: {} {} (only plain GET is sent)",
                request.method.as_str(),
                request.path
            )));
        }

        let mut response = self.agent.get(&request.path).call()?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let bytes = response.body_mut().read_to_vec()?;

        Ok(HttpResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

/// Adapts a closure into a `Transport`.
pub struct FnTransport<F>(F);

pub fn transport_fn<F>(f: F) -> FnTransport<F>
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError>,
{
    FnTransport(f)
}

impl<F> Transport for FnTransport<F>
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (self.0)(request)
    }
}
