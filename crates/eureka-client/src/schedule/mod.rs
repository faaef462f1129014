use std::{future::Future, pin::Pin, sync::Arc, time::Duration};

use tokio_util::sync::CancellationToken;

mod timer;
pub use timer::TokioScheduler;

/// Future produced by one tick.
pub type TickFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Callback fired on every tick of a schedule.
pub type Tick = Arc<dyn Fn() -> TickFuture + Send + Sync>;

/// Recurring-timer capability used for heartbeats.
pub trait Scheduler: Send + Sync + 'static {
    /// Fire `tick` every `every`, first after one full interval, until the
    /// returned handle is cancelled or dropped.
    fn schedule(&self, every: Duration, tick: Tick) -> ScheduleHandle;
}

/// Owned handle to a running schedule. Dropping it cancels the schedule.
#[derive(Debug)]
pub struct ScheduleHandle {
    token: CancellationToken,
}

impl ScheduleHandle {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for ScheduleHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
