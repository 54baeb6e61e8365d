//! Core probabilistic set (Bloom filter)
//!
//! INVARIANTS:
//! - `bit_size > 0` and `hash_count > 0`, fixed at construction
//! - Bits are only ever set, never cleared
//! - No false negatives: after `add(s)`, `contains(s)` is true for the
//!   lifetime of the set
//! - Every probed index lies in `0..bit_size`

use std::fmt;

use bitvec::prelude::*;
use tracing::debug;

use super::config::BloomConfig;
use super::hash_functions::{normalize, probe_positions, IndexMode};
use crate::error::FilterError;

/// Fixed-capacity probabilistic set-membership structure
///
/// Elements are normalized (lowercased, surrounding spaces and controls stripped)
/// before hashing, so `"Example.com "` and `"example.com"` are the same
/// element. False positives are possible; false negatives are not.
#[derive(Clone)]
pub struct ProbabilisticSet {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Size in bits (m)
    bit_size: i64,
    /// Number of probes per element (k)
    hash_count: i32,
    /// Reduction of combined probe values to indices
    index_mode: IndexMode,
}

impl ProbabilisticSet {
    /// Create a set with `bit_size` bits and `hash_count` probes per element
    ///
    /// Fails with [`FilterError::InvalidConfiguration`] if either parameter
    /// is not positive.
    pub fn new(bit_size: i64, hash_count: i64) -> Result<Self, FilterError> {
        Self::with_mode(bit_size, hash_count, IndexMode::Compatible)
    }

    /// Create a set using an explicit [`IndexMode`]
    pub fn with_mode(
        bit_size: i64,
        hash_count: i64,
        index_mode: IndexMode,
    ) -> Result<Self, FilterError> {
        let (len, hash_count) = validate_parameters(bit_size, hash_count)?;

        debug!(
            bit_size,
            hash_count,
            %index_mode,
            "Allocated probabilistic set"
        );

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; len],
            bit_size,
            hash_count,
            index_mode,
        })
    }

    /// Create a set from a [`BloomConfig`]
    pub fn from_config(config: &BloomConfig) -> Result<Self, FilterError> {
        Self::with_mode(config.bit_size, config.hash_count, config.index_mode)
    }

    /// Add an element. Missing input is a no-op.
    pub fn add<'a>(&mut self, element: impl Into<Option<&'a str>>) {
        let Some(element) = element.into() else {
            return;
        };
        let normalized = normalize(element);
        for index in probe_positions(&normalized, self.hash_count, self.bit_size, self.index_mode)
            .flatten()
        {
            self.bits.set(index, true);
        }
    }

    /// Test whether an element might be in the set
    ///
    /// Returns:
    /// - `true` if every probed bit is set (possibly a false positive)
    /// - `false` if any probed bit is unset, or the input is missing
    pub fn contains<'a>(&self, element: impl Into<Option<&'a str>>) -> bool {
        let Some(element) = element.into() else {
            return false;
        };
        let normalized = normalize(element);
        probe_positions(&normalized, self.hash_count, self.bit_size, self.index_mode)
            .flatten()
            .all(|index| self.bits[index])
    }

    /// Size in bits
    pub fn bit_size(&self) -> i64 {
        self.bit_size
    }

    /// Number of probes per element
    pub fn hash_count(&self) -> i64 {
        i64::from(self.hash_count)
    }

    /// How combined probe values are reduced to bit indices
    pub fn index_mode(&self) -> IndexMode {
        self.index_mode
    }

    /// Lower-bound memory estimate: `ceil(bit_size / 8)` bytes
    ///
    /// Ignores per-instance overhead and allocator padding.
    pub fn approximate_memory_bytes(&self) -> i64 {
        self.bit_size / 8 + i64::from(self.bit_size % 8 != 0)
    }

    /// Number of bits currently set
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in `0.0..=1.0`
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.bits.len() as f64
    }

    /// False positive estimate from the current fill: `fill_ratio^k`
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.hash_count)
    }

    /// Indices of the set bits, in ascending order
    pub fn set_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }
}

impl fmt::Debug for ProbabilisticSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbabilisticSet")
            .field("bit_size", &self.bit_size)
            .field("hash_count", &self.hash_count)
            .field("index_mode", &self.index_mode)
            .field("bits_set", &self.bits_set())
            .finish()
    }
}

fn validate_parameters(bit_size: i64, hash_count: i64) -> Result<(usize, i32), FilterError> {
    if bit_size <= 0 {
        return Err(FilterError::invalid("bit_size", bit_size, "must be positive"));
    }
    if hash_count <= 0 {
        return Err(FilterError::invalid(
            "hash_count",
            hash_count,
            "must be positive",
        ));
    }
    let hash_count = i32::try_from(hash_count).map_err(|_| {
        FilterError::invalid("hash_count", hash_count, "exceeds the 32-bit probe counter")
    })?;
    let len = usize::try_from(bit_size).map_err(|_| {
        FilterError::invalid("bit_size", bit_size, "not addressable on this platform")
    })?;
    Ok((len, hash_count))
}
