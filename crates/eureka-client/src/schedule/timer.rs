use std::time::Duration;

use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tokio_util::sync::CancellationToken;
use tracing::trace;

use super::{ScheduleHandle, Scheduler, Tick};

/// [`Scheduler`] running each schedule as a task on the current tokio runtime.
///
/// Must be called from within a runtime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl TokioScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, every: Duration, tick: Tick) -> ScheduleHandle {
        let token = CancellationToken::new();
        let ctx = token.clone();

        tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + every, every);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    biased;
                    _ = ctx.cancelled() => {
                        trace!("schedule cancelled");
                        break;
                    }
                    _ = interval.tick() => tick().await,
                }
            }
        });

        ScheduleHandle::new(token)
    }
}
