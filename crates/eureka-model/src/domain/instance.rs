use std::fmt;

use crate::{InstanceStatus, LEASE_DURATION_SECS, RENEWAL_INTERVAL_SECS};

/// A single service endpoint to be registered with the registry.
///
/// Only the base fields are stored. Every identifier the registry needs
/// (`app_id`, `instance_id`, `vip_address`, ...) is recomputed on each call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Instance {
    app: String,
    ip_addr: String,
    status: InstanceStatus,
    port: u16,
}

impl Instance {
    pub fn new(
        app: impl Into<String>,
        ip_addr: impl Into<String>,
        status: InstanceStatus,
        port: u16,
    ) -> Self {
        Self {
            app: app.into(),
            ip_addr: ip_addr.into(),
            status,
            port,
        }
    }

    /// Application name as given by the caller (e.g. `nit-ts-app-server`).
    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn ip_addr(&self) -> &str {
        &self.ip_addr
    }

    pub fn status(&self) -> InstanceStatus {
        self.status
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Registry application identifier: the uppercased application name.
    pub fn app_id(&self) -> String {
        self.app.to_uppercase()
    }

    /// Registry instance identifier: `{ip}:{lowercased app}:{port}`.
    pub fn instance_id(&self) -> String {
        format!("{}:{}:{}", self.ip_addr, self.app.to_lowercase(), self.port)
    }

    /// Host name reported to the registry; always the IP address.
    pub fn host_name(&self) -> &str {
        &self.ip_addr
    }

    /// Virtual (and secure virtual) address: the lowercased application name.
    pub fn vip_address(&self) -> String {
        self.app.to_lowercase()
    }

    pub fn renewal_interval_secs(&self) -> u64 {
        RENEWAL_INTERVAL_SECS
    }

    pub fn duration_secs(&self) -> u64 {
        LEASE_DURATION_SECS
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "app: {}, ipAddr: {}, status: {}, port: {}",
            self.app, self.ip_addr, self.status, self.port
        )
    }
}
