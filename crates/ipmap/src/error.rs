//! Error types for ipmap.

use std::net::Ipv4Addr;

use thiserror::Error;

/// Result type for ipmap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or updating a bucket map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The address does not belong to the configured network.
    #[error("address {address} outside network {network}/{prefix_len}")]
    OutsideNetwork {
        address: Ipv4Addr,
        network: Ipv4Addr,
        prefix_len: u8,
    },

    /// The CIDR string is not of the form `a.b.c.d/len`.
    #[error("invalid CIDR {0:?}: expected a.b.c.d/prefix")]
    InvalidCidr(String),

    /// The prefix length is not an integer in `[0, 32]`.
    #[error("invalid prefix length {0:?}: expected an integer in 0..=32")]
    InvalidPrefix(String),

    /// The address is not a dotted quad.
    #[error("invalid IPv4 address {0:?}")]
    InvalidAddress(String),

    /// A grid distance or coordinate was out of bounds.
    #[error(transparent)]
    Curve(#[from] ipmap_curve::Error),
}
