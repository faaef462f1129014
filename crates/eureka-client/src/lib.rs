//! Registration client for Eureka-style service registries.
//!
//! [`RegistryClient`] registers one [`Instance`](eureka_model::Instance), renews its
//! lease on a fixed cadence and removes it again on request. Network failures
//! never surface as errors: they are reported as a failed [`Exchange`].

mod config;
pub use config::ClientConfig;

mod errors;
pub use errors::{ClientError, TransportError};

mod endpoint;
pub use endpoint::Endpoint;

mod transport;
pub use transport::{
    Exchange, RegistryRequest, ReqwestTransport, Transport, TransportResponse, UNREACHABLE_STATUS,
};

mod executor;
pub use executor::RequestExecutor;

mod schedule;
pub use schedule::{ScheduleHandle, Scheduler, Tick, TickFuture, TokioScheduler};

mod client;
pub use client::RegistryClient;

#[cfg(test)]
mod testing;
