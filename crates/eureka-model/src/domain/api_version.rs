use std::{fmt, num::ParseIntError, str::FromStr};

/// Registry REST API version.
///
/// `V1` is the default and adds nothing to the request path; any other version
/// contributes a `v{N}` segment right after `eureka`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApiVersion(u32);

impl ApiVersion {
    pub const V1: ApiVersion = ApiVersion(1);
    pub const V2: ApiVersion = ApiVersion(2);

    pub const fn new(version: u32) -> Self {
        Self(version)
    }

    pub fn number(&self) -> u32 {
        self.0
    }

    /// Path segment for this version, or `None` for v1.
    pub fn segment(&self) -> Option<String> {
        (*self != Self::V1).then(|| format!("v{}", self.0))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V1
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Accepts `2`, `v2` and `V2`.
impl FromStr for ApiVersion {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix('v')
            .or_else(|| s.strip_prefix('V'))
            .unwrap_or(s);
        digits.parse().map(ApiVersion)
    }
}
