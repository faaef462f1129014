use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use eureka_model::{Instance, InstanceEnvelope, Method};
use tokio::{sync::Mutex, task::AbortHandle};
use tracing::{debug, info, instrument, warn};

use crate::{
    config::ClientConfig,
    endpoint::Endpoint,
    errors::ClientError,
    executor::RequestExecutor,
    schedule::{ScheduleHandle, Scheduler, Tick, TickFuture, TokioScheduler},
    transport::{ReqwestTransport, Transport},
};

const REGISTERED: u16 = 204;
const DEREGISTERED: u16 = 200;

/// Registration lifecycle for one instance against one registry server.
///
/// The client is either idle or holds exactly one active registration together
/// with its heartbeat schedule. `register` and `deregister` are serialised, and
/// each heartbeat tick reads the registration under the same lock.
///
/// Dropping the last clone cancels the heartbeat schedule without contacting
/// the registry; the lease then expires server-side.
#[derive(Clone)]
pub struct RegistryClient {
    inner: Arc<Inner>,
}

struct Inner {
    executor: Arc<RequestExecutor>,
    scheduler: Arc<dyn Scheduler>,
    heartbeat_every: Duration,
    state: Mutex<Registration>,
}

enum Registration {
    Idle,
    Active(Active),
}

struct Active {
    instance: Instance,
    _schedule: ScheduleHandle,
    inflight: Option<AbortHandle>,
}

impl Active {
    /// Send one heartbeat, abandoning the previous one if it is still in flight.
    fn beat(&mut self, executor: &Arc<RequestExecutor>) {
        if let Some(prev) = self.inflight.take() {
            prev.abort();
        }

        let executor = Arc::clone(executor);
        let path = instance_path(&self.instance);
        let task = tokio::spawn(async move {
            let exchange = executor.execute(&path, Method::Put, |req| req).await;
            if executor.log_enabled() {
                info!(status = exchange.status(), "heartbeat");
            } else {
                debug!(status = exchange.status(), "heartbeat");
            }
        });
        self.inflight = Some(task.abort_handle());
    }
}

impl Drop for Active {
    fn drop(&mut self) {
        if let Some(inflight) = self.inflight.take() {
            inflight.abort();
        }
    }
}

impl RegistryClient {
    /// Client using the reqwest transport and the tokio scheduler.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.request_timeout())?;
        Self::from_parts(config, Arc::new(transport), Arc::new(TokioScheduler::new()))
    }

    pub fn from_parts(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, ClientError> {
        config.validate()?;
        let endpoint = Endpoint::new(&config.server, config.api_version)?;
        let executor = RequestExecutor::new(endpoint, transport, config.log_enabled);

        Ok(Self {
            inner: Arc::new(Inner {
                executor: Arc::new(executor),
                scheduler,
                heartbeat_every: config.heartbeat_interval(),
                state: Mutex::new(Registration::Idle),
            }),
        })
    }

    /// One client per comma-separated registry address
    /// (`http://a:8761/eureka/,http://b:8761/eureka/`).
    ///
    /// `config.server` is ignored; blank or malformed entries are skipped.
    pub fn from_urls(urls: &str, config: &ClientConfig) -> Vec<RegistryClient> {
        urls.split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .filter_map(|url| {
                let cfg = ClientConfig {
                    server: url.to_string(),
                    ..config.clone()
                };
                match RegistryClient::new(cfg) {
                    Ok(client) => Some(client),
                    Err(e) => {
                        warn!(url, error = %e, "skipping registry address");
                        None
                    }
                }
            })
            .collect()
    }

    pub fn endpoint(&self) -> &Endpoint {
        self.inner.executor.endpoint()
    }

    /// Instance currently registered, if any.
    pub async fn instance(&self) -> Option<Instance> {
        match &*self.inner.state.lock().await {
            Registration::Active(active) => Some(active.instance.clone()),
            Registration::Idle => None,
        }
    }

    pub async fn is_registered(&self) -> bool {
        matches!(*self.inner.state.lock().await, Registration::Active(_))
    }

    /// Register `instance` and start heartbeating it.
    ///
    /// Returns `Ok(false)` when the registry rejects the call or cannot be
    /// reached. Registering the instance that is already active is a no-op
    /// returning `Ok(true)`; registering a different one while active fails
    /// with [`ClientError::AlreadyRegistered`].
    #[instrument(level = "debug", skip(self, instance), fields(app = %instance.app()))]
    pub async fn register(&self, instance: Instance) -> Result<bool, ClientError> {
        let mut state = self.inner.state.lock().await;

        if let Registration::Active(active) = &*state {
            if active.instance == instance {
                debug!("instance already registered");
                return Ok(true);
            }
            return Err(ClientError::AlreadyRegistered {
                active: active.instance.instance_id(),
                requested: instance.instance_id(),
            });
        }

        let body = serde_json::to_vec(&InstanceEnvelope::from(&instance))?;
        let exchange = self
            .inner
            .executor
            .execute(&app_path(&instance), Method::Post, |req| {
                req.header("Content-Type", "application/json").body(body)
            })
            .await;

        if !exchange.has_status(REGISTERED) {
            warn!(status = exchange.status(), "register failed");
            return Ok(false);
        }
        info!(instance_id = %instance.instance_id(), "registered");

        let schedule = self
            .inner
            .scheduler
            .schedule(self.inner.heartbeat_every, heartbeat_tick(Arc::downgrade(&self.inner)));
        let mut active = Active {
            instance,
            _schedule: schedule,
            inflight: None,
        };
        active.beat(&self.inner.executor);
        *state = Registration::Active(active);

        Ok(true)
    }

    /// Remove the active registration and stop heartbeating.
    ///
    /// Returns `true` when idle. On a failed call the registration and its
    /// heartbeat stay active.
    #[instrument(level = "debug", skip(self))]
    pub async fn deregister(&self) -> bool {
        let mut state = self.inner.state.lock().await;

        let Registration::Active(active) = &*state else {
            return true;
        };

        let exchange = self
            .inner
            .executor
            .execute(&instance_path(&active.instance), Method::Delete, |req| req)
            .await;

        if !exchange.has_status(DEREGISTERED) {
            warn!(
                instance_id = %active.instance.instance_id(),
                status = exchange.status(),
                "deregister failed"
            );
            return false;
        }
        info!(instance_id = %active.instance.instance_id(), "deregistered");

        *state = Registration::Idle;
        true
    }
}

fn heartbeat_tick(inner: Weak<Inner>) -> Tick {
    Arc::new(move || -> TickFuture {
        let inner = inner.clone();
        Box::pin(async move {
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let mut state = inner.state.lock().await;
            if let Registration::Active(active) = &mut *state {
                active.beat(&inner.executor);
            }
        })
    })
}

fn app_path(instance: &Instance) -> String {
    format!("apps/{}", instance.app_id())
}

fn instance_path(instance: &Instance) -> String {
    format!("apps/{}/{}", instance.app_id(), instance.instance_id())
}
