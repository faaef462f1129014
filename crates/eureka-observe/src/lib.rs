//! Logger bootstrap for processes embedding the registry client.
//!
//! The client crates only emit `tracing` events; binaries call
//! [`init_logger`] once at startup to decide where those events go.

mod logger;
pub use logger::*;
