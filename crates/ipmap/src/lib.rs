//! IPMap
//!
//! Aggregate values keyed by IPv4 host address onto a Hilbert curve grid.
//!
//! # Design
//!
//! A network given in CIDR notation is split into `side²` equal buckets of
//! consecutive host addresses. Bucket `i` is stored at distance `i` along a
//! Hilbert curve, so adjacent address ranges become adjacent cells and a heat
//! map of the grid keeps subnets visually contiguous.
//!
//! Samples are folded into their bucket with a pluggable rule (sum by
//! default, see [`combine`]). The largest bucket value ever produced is kept
//! as [`maxval`](NetworkBucketMap::maxval) for scaling output.
//!
//! # Rendering
//!
//! Renderers consume [`NetworkBucketMap::iter`], which yields
//! `(coord, value)` pairs in curve order, together with `maxval`. Use
//! [`NetworkBucketMap::address_range_start`] to label a cell.
//!
//! ```
//! use ipmap::NetworkBucketMap;
//!
//! let mut map: NetworkBucketMap = NetworkBucketMap::new("192.168.1.0/24", 8)?;
//! map.update_str("192.168.1.10", 10)?;
//! assert_eq!(*map.maxval(), 10);
//! # Ok::<(), ipmap::Error>(())
//! ```

mod cidr;
pub mod combine;
mod config;
mod error;
mod map;

pub use cidr::{parse_addr, Cidr};
pub use config::{MapConfig, DEFAULT_SIDE};
pub use error::{Error, Result};
pub use map::NetworkBucketMap;

pub use ipmap_curve::{normalize, GridCoord, HilbertContainer};
