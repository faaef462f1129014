use std::sync::Arc;

use eureka_model::Method;
use tracing::{debug, info};

use crate::{
    endpoint::Endpoint,
    transport::{Exchange, RegistryRequest, Transport},
};

/// Issues single registry calls and folds transport failures into [`Exchange`].
pub struct RequestExecutor {
    endpoint: Endpoint,
    transport: Arc<dyn Transport>,
    log_enabled: bool,
}

impl RequestExecutor {
    pub fn new(endpoint: Endpoint, transport: Arc<dyn Transport>, log_enabled: bool) -> Self {
        Self {
            endpoint,
            transport,
            log_enabled,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }

    /// Send `method` to `path` below the registry root.
    ///
    /// `build` may attach headers and a body. Never fails: an unreachable
    /// registry is reported as [`Exchange::Unreachable`].
    pub async fn execute<F>(&self, path: &str, method: Method, build: F) -> Exchange
    where
        F: FnOnce(RegistryRequest) -> RegistryRequest,
    {
        let url = self.endpoint.url(path);
        let request = build(RegistryRequest::new(method, url.clone()));

        let exchange = Exchange::from(self.transport.send(request).await);
        self.log_exchange(method, url.as_str(), &exchange);
        exchange
    }

    fn log_exchange(&self, method: Method, url: &str, exchange: &Exchange) {
        let body = exchange.body_text();
        match (exchange, self.log_enabled) {
            (Exchange::Unreachable { reason }, true) => {
                info!(%method, url, status = exchange.status(), reason = %reason, "registry unreachable")
            }
            (Exchange::Unreachable { reason }, false) => {
                debug!(%method, url, status = exchange.status(), reason = %reason, "registry unreachable")
            }
            (Exchange::Response { status, .. }, true) => {
                info!(%method, url, status, body = %body, "registry response")
            }
            (Exchange::Response { status, .. }, false) => {
                debug!(%method, url, status, body = %body, "registry response")
            }
        }
    }
}
