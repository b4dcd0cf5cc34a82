//! IPv4 networks in CIDR notation.
//!
//! A network is stored as its masked base address plus prefix length. Host
//! offsets inside the network are `address & mask`, where `mask` covers the
//! `32 - prefix_len` host bits.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An IPv4 network such as `192.168.1.0/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cidr {
    network: u32,
    prefix_len: u8,
}

impl Cidr {
    /// Longest valid prefix.
    pub const MAX_PREFIX: u8 = 32;

    /// Build a network from any address inside it. Host bits are cleared.
    pub fn new(address: Ipv4Addr, prefix_len: u8) -> Result<Self> {
        if prefix_len > Self::MAX_PREFIX {
            return Err(Error::InvalidPrefix(prefix_len.to_string()));
        }
        let mask = host_mask(prefix_len);
        Ok(Self {
            network: u32::from(address) & !mask,
            prefix_len,
        })
    }

    /// Prefix length in bits.
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Number of addresses in the network (`2^(32 - prefix_len)`).
    pub fn num_hosts(&self) -> u64 {
        1u64 << (Self::MAX_PREFIX - self.prefix_len)
    }

    /// Host-bits mask (`num_hosts - 1`).
    pub fn mask(&self) -> u32 {
        host_mask(self.prefix_len)
    }

    /// Masked base address.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.network)
    }

    /// Masked base address as an integer.
    pub fn network_bits(&self) -> u32 {
        self.network
    }

    /// Whether an address falls inside the network.
    pub fn contains(&self, address: Ipv4Addr) -> bool {
        u32::from(address) & !self.mask() == self.network
    }
}

fn host_mask(prefix_len: u8) -> u32 {
    ((1u64 << (Cidr::MAX_PREFIX - prefix_len)) - 1) as u32
}

impl FromStr for Cidr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (address, prefix) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| Error::InvalidCidr(s.to_string()))?;

        let address = address
            .trim()
            .parse::<Ipv4Addr>()
            .map_err(|_| Error::InvalidCidr(s.to_string()))?;

        let prefix_len = prefix
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|&len| len <= Self::MAX_PREFIX)
            .ok_or_else(|| Error::InvalidPrefix(prefix.to_string()))?;

        Self::new(address, prefix_len)
    }
}

impl TryFrom<String> for Cidr {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Cidr> for String {
    fn from(value: Cidr) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix_len)
    }
}

/// Parse a dotted-quad address.
pub fn parse_addr(s: &str) -> Result<Ipv4Addr> {
    s.trim()
        .parse()
        .map_err(|_| Error::InvalidAddress(s.to_string()))
}
