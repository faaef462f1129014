use std::borrow::Cow;

use async_trait::async_trait;
use eureka_model::Method;
use url::Url;

use crate::errors::TransportError;

mod http;
pub use http::ReqwestTransport;

/// Status reported for an exchange that never reached the registry.
pub const UNREACHABLE_STATUS: u16 = 999;

/// Outbound request, before it is handed to a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRequest {
    pub method: Method,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl RegistryRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }
}

/// Status and body as returned by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// HTTP capability used by the client.
///
/// Implementations only report transport-level failures as `Err`; any HTTP
/// status, including 4xx and 5xx, is a successful [`TransportResponse`].
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn send(&self, request: RegistryRequest) -> Result<TransportResponse, TransportError>;
}

/// Outcome of one registry call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    /// The registry answered (any status).
    Response { status: u16, body: Vec<u8> },
    /// The request never completed; see [`UNREACHABLE_STATUS`].
    Unreachable { reason: String },
}

impl Exchange {
    pub fn status(&self) -> u16 {
        match self {
            Exchange::Response { status, .. } => *status,
            Exchange::Unreachable { .. } => UNREACHABLE_STATUS,
        }
    }

    pub fn body(&self) -> &[u8] {
        match self {
            Exchange::Response { body, .. } => body,
            Exchange::Unreachable { .. } => &[],
        }
    }

    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.body())
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, Exchange::Unreachable { .. })
    }

    /// `true` only when the registry answered with exactly `code`.
    pub fn has_status(&self, code: u16) -> bool {
        matches!(self, Exchange::Response { status, .. } if *status == code)
    }
}

impl From<Result<TransportResponse, TransportError>> for Exchange {
    fn from(result: Result<TransportResponse, TransportError>) -> Self {
        match result {
            Ok(resp) => Exchange::Response {
                status: resp.status,
                body: resp.body,
            },
            Err(e) => Exchange::Unreachable {
                reason: e.to_string(),
            },
        }
    }
}
