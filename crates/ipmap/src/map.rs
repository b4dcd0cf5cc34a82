//! Network bucket map: host addresses folded onto a Hilbert grid.
//!
//! # Partitioning
//!
//! A network of `num_hosts` addresses is split into `side²` buckets of
//! `chunk = num_hosts / side²` addresses each. Host offset `h` (the address
//! with network bits masked off) lands in bucket `floor(h / chunk)`, and that
//! bucket sits at curve distance equal to its index. Neighbouring address
//! ranges therefore end up in neighbouring cells.
//!
//! `chunk` is a real number. When the grid has more cells than the network
//! has hosts it drops below one, some buckets never receive an address, and
//! several buckets report the same lower-bound address. That configuration is
//! valid and preserved as is.
//!
//! # Concurrency
//!
//! [`update`](NetworkBucketMap::update) is a read-modify-write on one slot and
//! takes `&mut self`. Share a map across threads behind a lock.

use std::fmt;
use std::net::Ipv4Addr;
use std::ops::{Add, RangeInclusive};

use ipmap_curve::{GridCoord, HilbertContainer, Iter};
use tracing::{debug, trace};

use crate::{cidr::parse_addr, combine, Cidr, Error, MapConfig, Result};

/// Per-bucket aggregation of values keyed by host address.
///
/// `V` is the bucket value type and `F` the rule that folds a new sample into
/// a bucket. The default rule is [`combine::sum`].
#[derive(Clone)]
pub struct NetworkBucketMap<V = u64, F = fn(V, V) -> V> {
    cidr: Cidr,
    chunk: f64,
    maxval: V,
    grid: HilbertContainer<V>,
    combine: F,
}

impl<V> NetworkBucketMap<V>
where
    V: Copy + Default + PartialOrd + Add<Output = V>,
{
    /// Create a summing map over `cidr` with a grid of roughly `side` cells per edge.
    pub fn new(cidr: &str, side: i64) -> Result<Self> {
        Self::with_combiner(cidr, side, combine::sum::<V>)
    }

    /// Create a summing map from a configuration.
    pub fn from_config(config: &MapConfig) -> Result<Self> {
        Ok(Self::from_cidr(config.network()?, config.side, combine::sum::<V>))
    }
}

impl<V, F> NetworkBucketMap<V, F>
where
    V: Copy + Default + PartialOrd,
    F: Fn(V, V) -> V,
{
    /// Create a map that folds samples into buckets with `combine`.
    pub fn with_combiner(cidr: &str, side: i64, combine: F) -> Result<Self> {
        Ok(Self::from_cidr(cidr.parse()?, side, combine))
    }

    /// Create a map over an already parsed network.
    pub fn from_cidr(cidr: Cidr, side: i64, combine: F) -> Self {
        let grid = HilbertContainer::new(side, V::default());
        let chunk = cidr.num_hosts() as f64 / grid.capacity() as f64;

        debug!(
            network = %cidr,
            side = grid.side(),
            chunk,
            "Created bucket map"
        );

        Self {
            cidr,
            chunk,
            maxval: V::default(),
            grid,
            combine,
        }
    }

    /// Bucket index (curve distance) an address resolves to.
    pub fn bucket_for(&self, address: Ipv4Addr) -> Result<u64> {
        if !self.cidr.contains(address) {
            return Err(Error::OutsideNetwork {
                address,
                network: self.cidr.network(),
                prefix_len: self.cidr.prefix_len(),
            });
        }
        let offset = u32::from(address) & self.mask();
        Ok((f64::from(offset) / self.chunk).floor() as u64)
    }

    /// [`bucket_for`](Self::bucket_for) on a dotted-quad string.
    pub fn bucket_for_str(&self, address: &str) -> Result<u64> {
        self.bucket_for(parse_addr(address)?)
    }

    /// Lower-bound address of the bucket at a cell: `floor(d * chunk) | network`.
    pub fn address_range_start(&self, coord: impl Into<GridCoord>) -> Result<Ipv4Addr> {
        let distance = self.grid.distance_of(coord.into())?;
        let offset = (distance as f64 * self.chunk).floor() as u32;
        Ok(Ipv4Addr::from(offset | self.cidr.network_bits()))
    }

    /// Addresses that resolve to the bucket at a cell.
    ///
    /// Returns `None` for buckets no address maps to, which only happens when
    /// the grid has more cells than the network has hosts.
    pub fn bucket_hosts(&self, coord: impl Into<GridCoord>) -> Result<Option<RangeInclusive<Ipv4Addr>>> {
        let distance = self.grid.distance_of(coord.into())?;
        // First host offset h with floor(h / chunk) >= d
        let first = (distance as f64 * self.chunk).ceil() as u64;
        let end = ((distance + 1) as f64 * self.chunk).ceil() as u64;
        if first >= end {
            return Ok(None);
        }
        let network = self.cidr.network_bits();
        let first = Ipv4Addr::from(network | first as u32);
        let last = Ipv4Addr::from(network | (end - 1) as u32);
        Ok(Some(first..=last))
    }

    /// Value of the bucket holding `address`.
    pub fn value_at(&self, address: Ipv4Addr) -> Result<V> {
        Ok(*self.grid.get_by_distance(self.bucket_for(address)?)?)
    }

    /// Fold `delta` into the bucket holding `address` and return the new value.
    pub fn update(&mut self, address: Ipv4Addr, delta: V) -> Result<V> {
        let bucket = self.bucket_for(address)?;
        let slot = self.grid.get_mut_by_distance(bucket)?;
        let value = (self.combine)(*slot, delta);
        *slot = value;
        if value > self.maxval {
            self.maxval = value;
        }
        trace!(%address, bucket, "Updated bucket");
        Ok(value)
    }

    /// [`update`](Self::update) with a dotted-quad string.
    pub fn update_str(&mut self, address: &str, delta: V) -> Result<V> {
        self.update(parse_addr(address)?, delta)
    }
}

impl<V, F> NetworkBucketMap<V, F>
where
    V: Copy,
{
    /// Value of the bucket at a cell.
    pub fn get(&self, coord: impl Into<GridCoord>) -> Result<V> {
        Ok(*self.grid.get_by_coord(coord.into())?)
    }

    /// Value of the bucket at a curve distance.
    pub fn get_by_distance(&self, distance: u64) -> Result<V> {
        Ok(*self.grid.get_by_distance(distance)?)
    }

    /// Grid as a `side × side` table indexed `[x][y]`.
    ///
    /// Non-destructive; may be called at any point between updates.
    pub fn snapshot(&self) -> Vec<Vec<V>>
    where
        V: Default,
    {
        let side = self.grid.side() as usize;
        let mut table = vec![vec![V::default(); side]; side];
        for (coord, value) in self.grid.iter() {
            table[coord.x as usize][coord.y as usize] = *value;
        }
        table
    }
}

impl<V, F> NetworkBucketMap<V, F> {
    /// Cells and values in curve order, for renderers.
    pub fn iter(&self) -> Iter<'_, V> {
        self.grid.iter()
    }

    /// Underlying grid.
    pub fn container(&self) -> &HilbertContainer<V> {
        &self.grid
    }

    /// Largest value any bucket has held. Never decreases.
    pub fn maxval(&self) -> &V {
        &self.maxval
    }

    /// Grid side length (a power of two).
    pub fn side(&self) -> u32 {
        self.grid.side()
    }

    /// Host addresses per bucket. May be fractional or below one.
    pub fn chunk(&self) -> f64 {
        self.chunk
    }

    /// Host-bits mask of the network.
    pub fn mask(&self) -> u32 {
        self.cidr.mask()
    }

    /// Masked network base address.
    pub fn network(&self) -> Ipv4Addr {
        self.cidr.network()
    }

    /// Number of host addresses in the network.
    pub fn num_hosts(&self) -> u64 {
        self.cidr.num_hosts()
    }

    /// The mapped network.
    pub fn cidr(&self) -> Cidr {
        self.cidr
    }
}

impl<'a, V, F> IntoIterator for &'a NetworkBucketMap<V, F> {
    type Item = (GridCoord, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug, F> fmt::Debug for NetworkBucketMap<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkBucketMap")
            .field("cidr", &self.cidr)
            .field("side", &self.grid.side())
            .field("chunk", &self.chunk)
            .field("maxval", &self.maxval)
            .finish_non_exhaustive()
    }
}
