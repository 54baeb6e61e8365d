//! Probabilistic set configuration and validation
//!
//! # Example
//!
//! ```
//! use ms_01_probabilistic_set::{BloomConfigBuilder, IndexMode, ProbabilisticSet};
//!
//! let config = BloomConfigBuilder::new()
//!     .bit_size(1 << 20)
//!     .hash_count(5)
//!     .index_mode(IndexMode::Unsigned)
//!     .build()
//!     .expect("Valid config");
//!
//! let set = ProbabilisticSet::from_config(&config).expect("Valid config");
//! assert_eq!(set.bit_size(), 1 << 20);
//! ```

use serde::{Deserialize, Serialize};

use super::hash_functions::IndexMode;
use crate::error::FilterError;

/// Default size of the suspicious-domain filter in bits
pub const DEFAULT_BIT_SIZE: i64 = 1_000_000;

/// Default number of probes per element
pub const DEFAULT_HASH_COUNT: i64 = 5;

/// Probabilistic set configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Size in bits (must be positive)
    pub bit_size: i64,
    /// Probes per element (must be positive)
    pub hash_count: i64,
    /// Reduction of combined probe values to indices
    pub index_mode: IndexMode,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            bit_size: DEFAULT_BIT_SIZE,
            hash_count: DEFAULT_HASH_COUNT,
            index_mode: IndexMode::Compatible,
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(bit_size: i64, hash_count: i64, index_mode: IndexMode) -> Result<Self, FilterError> {
        let config = Self {
            bit_size,
            hash_count,
            index_mode,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the construction rules without allocating
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.bit_size <= 0 {
            return Err(FilterError::invalid(
                "bit_size",
                self.bit_size,
                "must be positive",
            ));
        }
        if self.hash_count <= 0 {
            return Err(FilterError::invalid(
                "hash_count",
                self.hash_count,
                "must be positive",
            ));
        }
        if self.hash_count > i64::from(i32::MAX) {
            return Err(FilterError::invalid(
                "hash_count",
                self.hash_count,
                "exceeds the 32-bit probe counter",
            ));
        }
        if usize::try_from(self.bit_size).is_err() {
            return Err(FilterError::invalid(
                "bit_size",
                self.bit_size,
                "not addressable on this platform",
            ));
        }
        Ok(())
    }

    /// Builder-style method to set the bit size
    pub fn with_bit_size(mut self, bit_size: i64) -> Self {
        self.bit_size = bit_size;
        self
    }

    /// Builder-style method to set the probe count
    pub fn with_hash_count(mut self, hash_count: i64) -> Self {
        self.hash_count = hash_count;
        self
    }

    /// Builder-style method to set the index mode
    pub fn with_index_mode(mut self, index_mode: IndexMode) -> Self {
        self.index_mode = index_mode;
        self
    }
}

/// Builder for [`BloomConfig`] with validation
///
/// Unset fields fall back to [`BloomConfig::default`].
#[derive(Default)]
pub struct BloomConfigBuilder {
    bit_size: Option<i64>,
    hash_count: Option<i64>,
    index_mode: Option<IndexMode>,
}

impl BloomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size in bits
    pub fn bit_size(mut self, bit_size: i64) -> Self {
        self.bit_size = Some(bit_size);
        self
    }

    /// Set the number of probes per element
    pub fn hash_count(mut self, hash_count: i64) -> Self {
        self.hash_count = Some(hash_count);
        self
    }

    /// Set the index reduction mode
    pub fn index_mode(mut self, index_mode: IndexMode) -> Self {
        self.index_mode = Some(index_mode);
        self
    }

    /// Build the configuration, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let defaults = BloomConfig::default();

        let config = BloomConfig {
            bit_size: self.bit_size.unwrap_or(defaults.bit_size),
            hash_count: self.hash_count.unwrap_or(defaults.hash_count),
            index_mode: self.index_mode.unwrap_or(defaults.index_mode),
        };

        config.validate()?;
        Ok(config)
    }
}
