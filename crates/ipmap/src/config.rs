//! Bucket map configuration.

use serde::{Deserialize, Serialize};

use crate::{Cidr, Result};

/// Side length used when none is configured.
pub const DEFAULT_SIDE: i64 = 16;

/// Configuration for a [`NetworkBucketMap`](crate::NetworkBucketMap).
///
/// Missing fields fall back to [`MapConfig::default`] when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Network to map, in CIDR notation
    pub cidr: String,
    /// Requested grid side; rounded up to a power of two
    pub side: i64,
}

impl MapConfig {
    /// Create a configuration for the given network and side.
    pub fn new(cidr: impl Into<String>, side: i64) -> Self {
        Self {
            cidr: cidr.into(),
            side,
        }
    }

    /// Parse the configured network.
    pub fn network(&self) -> Result<Cidr> {
        self.cidr.parse()
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            cidr: "0.0.0.0/0".to_string(),
            side: DEFAULT_SIDE,
        }
    }
}
