//! Configuration structures for the nextgric xApp
//!
//! Two configuration surfaces exist: a YAML file describing the RIC
//! endpoint and the simulated E2 topology, and a pair of environment
//! variables overriding the per-slice PRB ratios of the control request.

use std::env;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Error;

/// Environment variable overriding the first slice's dedicated PRB ratio.
pub const SLICE1_RATIO_ENV: &str = "SLICE1_RATIO";
/// Environment variable overriding the second slice's dedicated PRB ratio.
pub const SLICE2_RATIO_ENV: &str = "SLICE2_RATIO";

/// Default dedicated PRB ratio for the first slice (percent).
pub const DEFAULT_SLICE1_RATIO: i64 = 20;
/// Default dedicated PRB ratio for the second slice (percent).
pub const DEFAULT_SLICE2_RATIO: i64 = 80;

/// RIC (nearRT-RIC) endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RicConfig {
    /// IP address of the nearRT-RIC E42 interface
    pub address: String,
    /// E42 port of the RIC (typically 36422)
    pub port: u16,
}

/// Configuration for one E2 node in the simulated topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct E2NodeConfig {
    /// gNB identifier of the node
    pub nb_id: u32,
    /// Mobile Country Code (3 digits)
    pub mcc: u16,
    /// Mobile Network Code (2-3 digits)
    pub mnc: u16,
}

/// xApp configuration loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XappConfig {
    /// RIC endpoint
    pub ric: RicConfig,
    /// E2 nodes presented by the session layer
    #[serde(default)]
    pub e2_nodes: Vec<E2NodeConfig>,
}

impl Default for XappConfig {
    fn default() -> Self {
        Self {
            ric: RicConfig {
                address: "127.0.0.1".to_string(),
                port: 36422,
            },
            e2_nodes: vec![E2NodeConfig {
                nb_id: 1,
                mcc: 1,
                mnc: 1,
            }],
        }
    }
}

/// Loads and validates an xApp configuration from a YAML file.
pub fn load_xapp_config<P: AsRef<Path>>(path: P) -> Result<XappConfig, Error> {
    let contents = std::fs::read_to_string(path)?;
    let config: XappConfig = serde_yaml::from_str(&contents)?;
    if config.ric.port == 0 {
        return Err(Error::Config("RIC port must be non-zero".to_string()));
    }
    Ok(config)
}

/// Per-slice dedicated PRB ratio configuration.
///
/// Ratios are integer percentages. A combined share above 100 is a policy
/// violation that is repaired to an even 50:50 split rather than rejected,
/// so a control request can always be assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceRatioConfig {
    /// Dedicated PRB ratio of the first slice (percent)
    pub slice1: i64,
    /// Dedicated PRB ratio of the second slice (percent)
    pub slice2: i64,
}

impl Default for SliceRatioConfig {
    fn default() -> Self {
        Self {
            slice1: DEFAULT_SLICE1_RATIO,
            slice2: DEFAULT_SLICE2_RATIO,
        }
    }
}

impl SliceRatioConfig {
    /// Creates a ratio configuration from optional override strings.
    ///
    /// An absent or unparsable override falls back to the default for that
    /// slice. This is the pure core of [`SliceRatioConfig::from_env`],
    /// split out so tests do not depend on process environment.
    pub fn from_values(slice1: Option<&str>, slice2: Option<&str>) -> Self {
        let parse = |value: Option<&str>, default: i64| -> i64 {
            value
                .and_then(|v| v.trim().parse::<i64>().ok())
                .unwrap_or(default)
        };
        Self {
            slice1: parse(slice1, DEFAULT_SLICE1_RATIO),
            slice2: parse(slice2, DEFAULT_SLICE2_RATIO),
        }
    }

    /// Reads the ratio configuration from `SLICE1_RATIO` / `SLICE2_RATIO`.
    pub fn from_env() -> Self {
        let slice1 = env::var(SLICE1_RATIO_ENV).ok();
        let slice2 = env::var(SLICE2_RATIO_ENV).ok();
        Self::from_values(slice1.as_deref(), slice2.as_deref())
    }

    /// Applies the combined-share policy check.
    ///
    /// Ratios summing above 100 are reset to 50:50 and the correction is
    /// logged. The repair is idempotent.
    pub fn validated(self) -> Self {
        if self.slice1 + self.slice2 > 100 {
            warn!(
                slice1 = self.slice1,
                slice2 = self.slice2,
                "combined ratio of both slices must not be greater than 100, set to 50:50"
            );
            Self {
                slice1: 50,
                slice2: 50,
            }
        } else {
            self
        }
    }
}

impl fmt::Display for SliceRatioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.slice1, self.slice2)
    }
}
