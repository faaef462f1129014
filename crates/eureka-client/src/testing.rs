//! In-process fakes for the transport and scheduler seams.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use eureka_model::Method;
use tokio_util::sync::CancellationToken;

use crate::{
    errors::TransportError,
    schedule::{ScheduleHandle, Scheduler, Tick},
    transport::{RegistryRequest, Transport, TransportResponse},
};

/// Records every request and answers with a configured status per method.
#[derive(Default)]
pub struct RecordingTransport {
    requests: Mutex<Vec<RegistryRequest>>,
    statuses: Mutex<HashMap<Method, u16>>,
    unreachable: AtomicBool,
    hang_heartbeats: AtomicBool,
    abandoned: AtomicUsize,
}

impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, method: Method, status: u16) {
        self.statuses.lock().unwrap().insert(method, status);
    }

    pub fn set_unreachable(&self, unreachable: bool) {
        self.unreachable.store(unreachable, Ordering::SeqCst);
    }

    /// Make PUT requests never complete.
    pub fn hang_heartbeats(&self) {
        self.hang_heartbeats.store(true, Ordering::SeqCst);
    }

    /// Number of hanging PUT requests that were dropped before completing.
    pub fn abandoned(&self) -> usize {
        self.abandoned.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RegistryRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method)
            .count()
    }
}

struct Abandoned<'a>(&'a AtomicUsize);

impl Drop for Abandoned<'_> {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: RegistryRequest) -> Result<TransportResponse, TransportError> {
        let method = request.method;
        self.requests.lock().unwrap().push(request);

        if self.unreachable.load(Ordering::SeqCst) {
            return Err(TransportError::Other("connection refused".into()));
        }
        if method == Method::Put && self.hang_heartbeats.load(Ordering::SeqCst) {
            let _guard = Abandoned(&self.abandoned);
            std::future::pending::<()>().await;
        }

        let status = self
            .statuses
            .lock()
            .unwrap()
            .get(&method)
            .copied()
            .unwrap_or(200);
        Ok(TransportResponse {
            status,
            body: Vec::new(),
        })
    }
}

struct Entry {
    every: Duration,
    tick: Tick,
    token: CancellationToken,
}

/// Scheduler whose ticks only fire when the test calls [`ManualScheduler::fire`].
#[derive(Default)]
pub struct ManualScheduler {
    entries: Mutex<Vec<Entry>>,
}

impl ManualScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Schedules ever started.
    pub fn started(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Schedules not yet cancelled.
    pub fn active(&self) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .count()
    }

    pub fn interval(&self, index: usize) -> Duration {
        self.entries.lock().unwrap()[index].every
    }

    /// Run one tick of every live schedule.
    pub async fn fire(&self) {
        let ticks: Vec<Tick> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| !e.token.is_cancelled())
            .map(|e| Arc::clone(&e.tick))
            .collect();
        for tick in ticks {
            tick().await;
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, every: Duration, tick: Tick) -> ScheduleHandle {
        let token = CancellationToken::new();
        self.entries.lock().unwrap().push(Entry {
            every,
            tick,
            token: token.clone(),
        });
        ScheduleHandle::new(token)
    }
}

/// Yield to spawned tasks until `cond` holds; panics after about a second.
pub async fn settle(cond: impl Fn() -> bool) {
    for _ in 0..200 {
        if cond() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("condition not reached");
}
