use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Instance status as understood by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceStatus {
    /// Ready to receive traffic.
    Up,
    /// Not serving; health checks failing.
    Down,
    /// Still initialising.
    Starting,
    /// Taken out of rotation on purpose.
    OutOfService,
    #[default]
    Unknown,
}

impl InstanceStatus {
    /// Wire representation (`UP`, `DOWN`, `STARTING`, `OUT_OF_SERVICE`, `UNKNOWN`).
    pub fn as_str(&self) -> &'static str {
        match self {
            InstanceStatus::Up => "UP",
            InstanceStatus::Down => "DOWN",
            InstanceStatus::Starting => "STARTING",
            InstanceStatus::OutOfService => "OUT_OF_SERVICE",
            InstanceStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for InstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("invalid instance status: {0} (expected: up|down|starting|out_of_service|unknown)")]
pub struct ParseStatusError(String);

impl FromStr for InstanceStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('-', "_");
        match norm.as_str() {
            "up" => Ok(InstanceStatus::Up),
            "down" => Ok(InstanceStatus::Down),
            "starting" => Ok(InstanceStatus::Starting),
            "out_of_service" => Ok(InstanceStatus::OutOfService),
            "unknown" => Ok(InstanceStatus::Unknown),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}
