//! Registry wire format.
//!
//! Field names, the `$` / `@enabled` / `@class` keys and the fixed values
//! mirror what a Eureka server expects in `POST /eureka/apps/{appID}`.

mod payload;
pub use payload::{DataCenterInfo, InstanceEnvelope, InstanceInfo, LeaseInfo, PortInfo};
