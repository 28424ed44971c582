//! Combinable sum/count aggregate for averaging distances without retaining
//! individual samples.
//!
//! `combine` is associative and commutative with `identity` as its neutral
//! element, so partial aggregates can be folded per line, per chunk, per
//! stream, or globally and the final average per key comes out the same.

use serde::{Deserialize, Serialize};

/// Byte width of an encoded aggregate: two big-endian i64 fields.
pub const ENCODED_LEN: usize = 16;

/// A partial sum of observed distances together with how many were observed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialAggregate {
    pub sum_distance: i64,
    pub count: i64,
}

impl PartialAggregate {
    /// The neutral element `{0, 0}`.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Aggregate for a single observed distance.
    pub fn from_distance(distance: u64) -> Self {
        Self {
            sum_distance: distance as i64,
            count: 1,
        }
    }

    /// Combine two aggregates by summing both fields.
    ///
    /// Safe to apply in any grouping and order; callers may interleave
    /// combines from different producers freely.
    pub fn combine(self, other: Self) -> Self {
        Self {
            sum_distance: self.sum_distance + other.sum_distance,
            count: self.count + other.count,
        }
    }

    /// Fold another aggregate into this one in place.
    pub fn merge(&mut self, other: Self) {
        *self = self.combine(other);
    }

    /// Floating-point average of the observed distances.
    ///
    /// Returns `None` for a zero count rather than dividing.
    pub fn average(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum_distance as f64 / self.count as f64)
        }
    }

    /// Encode as the fixed wire layout: sum then count, each big-endian.
    pub fn to_bytes(&self) -> [u8; ENCODED_LEN] {
        let mut buf = [0u8; ENCODED_LEN];
        buf[..8].copy_from_slice(&self.sum_distance.to_be_bytes());
        buf[8..].copy_from_slice(&self.count.to_be_bytes());
        buf
    }

    /// Decode from the fixed wire layout.
    pub fn from_bytes(bytes: [u8; ENCODED_LEN]) -> Self {
        let mut sum = [0u8; 8];
        let mut count = [0u8; 8];
        sum.copy_from_slice(&bytes[..8]);
        count.copy_from_slice(&bytes[8..]);
        Self {
            sum_distance: i64::from_be_bytes(sum),
            count: i64::from_be_bytes(count),
        }
    }
}
