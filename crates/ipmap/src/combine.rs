//! Rules for folding a new sample into a bucket.
//!
//! A rule is any `Fn(old, delta) -> new`. The functions here cover the common
//! cases and coerce to plain `fn` pointers, so they can be handed to
//! [`NetworkBucketMap::with_combiner`](crate::NetworkBucketMap::with_combiner)
//! without naming a closure type.

use std::ops::Add;

/// Accumulate: `old + delta`. This is the default rule.
#[inline]
pub fn sum<V: Add<Output = V>>(old: V, delta: V) -> V {
    old + delta
}

/// Keep the largest sample seen.
#[inline]
pub fn max<V: PartialOrd>(old: V, delta: V) -> V {
    if delta > old {
        delta
    } else {
        old
    }
}

/// Keep the smallest sample seen.
///
/// Buckets start at `V::default()`, so pair this with signed or sentinel
/// values if zero would otherwise always win.
#[inline]
pub fn min<V: PartialOrd>(old: V, delta: V) -> V {
    if delta < old {
        delta
    } else {
        old
    }
}

/// Count updates, ignoring their value.
#[inline]
pub fn count<V: Add<Output = V> + From<u8>>(old: V, _delta: V) -> V {
    old + V::from(1)
}

/// Keep only the most recent sample.
#[inline]
pub fn last<V>(_old: V, delta: V) -> V {
    delta
}
