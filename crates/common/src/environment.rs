//! Tuya data center configuration.
//!
//! The open API is served from one host per data center region; requests
//! must target the region the cloud project was created in.

use std::fmt;
use std::str::FromStr;

/// Tuya data center region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TuyaEnvironment {
    /// China data center.
    #[default]
    China,
    /// Western America data center.
    WesternAmerica,
    /// Central Europe data center.
    CentralEurope,
    /// India data center.
    India,
}

impl TuyaEnvironment {
    /// Open API host for this region (no scheme).
    pub fn api_host(&self) -> &'static str {
        match self {
            Self::China => "openapi.tuyacn.com",
            Self::WesternAmerica => "openapi.tuyaus.com",
            Self::CentralEurope => "openapi.tuyaeu.com",
            Self::India => "openapi.tuyain.com",
        }
    }

    /// Load the region from the `TUYA_REGION` env var.
    ///
    /// Returns `China` if not set or invalid.
    pub fn from_env() -> Self {
        std::env::var("TUYA_REGION")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

impl fmt::Display for TuyaEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::China => write!(f, "china"),
            Self::WesternAmerica => write!(f, "western-america"),
            Self::CentralEurope => write!(f, "central-europe"),
            Self::India => write!(f, "india"),
        }
    }
}

impl FromStr for TuyaEnvironment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "china" | "cn" => Ok(Self::China),
            "western-america" | "us" => Ok(Self::WesternAmerica),
            "central-europe" | "eu" => Ok(Self::CentralEurope),
            "india" | "in" => Ok(Self::India),
            _ => Err(()),
        }
    }
}
