mod instance;
pub use instance::Instance;

mod instance_status;
pub use instance_status::{InstanceStatus, ParseStatusError};

mod api_version;
pub use api_version::ApiVersion;

mod method;
pub use method::Method;

/// Lease renewal cadence advertised to the registry, in seconds.
pub const RENEWAL_INTERVAL_SECS: u64 = 60;

/// Lease expiry window advertised to the registry, in seconds.
///
/// The registry evicts an instance that has not renewed within this window.
pub const LEASE_DURATION_SECS: u64 = 120;
