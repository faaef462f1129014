use std::time::Duration;

use eureka_model::ApiVersion;

use crate::{endpoint::Endpoint, errors::ClientError};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Registry address, e.g. `http://127.0.0.1:8761/eureka/`.
    pub server: String,
    /// REST API version (default: v1).
    pub api_version: ApiVersion,
    /// Log every exchange at `info` instead of `debug`.
    pub log_enabled: bool,
    /// Heartbeat cadence (default: 60 seconds).
    pub heartbeat_interval_ms: u64,
    /// Per-request timeout applied by the HTTP transport (default: 15 seconds).
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: "http://localhost:8761/eureka/".to_string(),
            api_version: ApiVersion::V1,
            log_enabled: false,
            heartbeat_interval_ms: 60_000,
            request_timeout_ms: 15_000,
        }
    }
}

impl ClientConfig {
    pub fn new(server: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            ..Default::default()
        }
    }

    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.log_enabled = enabled;
        self
    }

    pub fn with_heartbeat_interval(mut self, every: Duration) -> Self {
        self.heartbeat_interval_ms = every.as_millis() as u64;
        self
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.heartbeat_interval_ms == 0 {
            return Err(ClientError::InvalidConfig(
                "heartbeat_interval_ms must be greater than zero".into(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(ClientError::InvalidConfig(
                "request_timeout_ms must be greater than zero".into(),
            ));
        }
        Endpoint::new(&self.server, self.api_version).map(|_| ())
    }
}
