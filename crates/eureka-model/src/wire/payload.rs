use serde::{Deserialize, Serialize};

use crate::{Instance, InstanceStatus};

const DEFAULT_DATA_CENTER_CLASS: &str = "com.netflix.appinfo.InstanceInfo$DefaultDataCenterInfo";
const DEFAULT_DATA_CENTER_NAME: &str = "MyOwn";
const SECURE_PORT: u16 = 443;
const COUNTRY_ID: u32 = 1;

/// Top-level register body: `{"instance": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceEnvelope {
    pub instance: InstanceInfo,
}

/// Instance descriptor as sent to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    pub instance_id: String,
    /// Uppercased application name.
    pub app: String,
    pub ip_addr: String,
    pub host_name: String,
    pub status: InstanceStatus,
    #[serde(rename = "overriddenstatus")]
    pub overridden_status: InstanceStatus,
    pub port: PortInfo,
    pub secure_port: PortInfo,
    pub country_id: u32,
    pub data_center_info: DataCenterInfo,
    pub lease_info: LeaseInfo,
    pub vip_address: String,
    pub secure_vip_address: String,
    pub is_coordinating_discovery_server: bool,
}

/// Port with its enabled flag; the port number travels as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortInfo {
    #[serde(rename = "$")]
    pub port: String,
    #[serde(rename = "@enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataCenterInfo {
    #[serde(rename = "@class")]
    pub class: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseInfo {
    pub renewal_interval_in_secs: u64,
    pub duration_in_secs: u64,
}

impl From<&Instance> for InstanceEnvelope {
    fn from(ins: &Instance) -> Self {
        let vip = ins.vip_address();
        Self {
            instance: InstanceInfo {
                instance_id: ins.instance_id(),
                app: ins.app_id(),
                ip_addr: ins.ip_addr().to_string(),
                host_name: ins.host_name().to_string(),
                status: ins.status(),
                overridden_status: InstanceStatus::Unknown,
                port: PortInfo {
                    port: ins.port().to_string(),
                    enabled: true,
                },
                secure_port: PortInfo {
                    port: SECURE_PORT.to_string(),
                    enabled: false,
                },
                country_id: COUNTRY_ID,
                data_center_info: DataCenterInfo {
                    class: DEFAULT_DATA_CENTER_CLASS.to_string(),
                    name: DEFAULT_DATA_CENTER_NAME.to_string(),
                },
                lease_info: LeaseInfo {
                    renewal_interval_in_secs: ins.renewal_interval_secs(),
                    duration_in_secs: ins.duration_secs(),
                },
                secure_vip_address: vip.clone(),
                vip_address: vip,
                is_coordinating_discovery_server: false,
            },
        }
    }
}
