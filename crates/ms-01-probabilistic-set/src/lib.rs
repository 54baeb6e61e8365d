//! # MS-01 Probabilistic Set
//!
//! Fixed-capacity Bloom filter used to screen email domains against a list of
//! suspicious domains.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `ProbabilisticSet`: The bit array and its probe loop
//!   - `hash_functions`: Normalization, `h1`/`h2`, index derivation
//!   - `parameters`: False positive maths
//!   - `BloomConfig`: Configuration with validation
//!
//! ## Invariants
//!
//! - **No false negatives**: after `add(s)`, `contains(s)` MUST return true
//! - **Normalization**: inputs differing only by case or surrounding
//!   whitespace are the same element
//! - **Index bound**: every probed index lies in `0..bit_size`
//!
//! ## Usage Example
//!
//! ```
//! use ms_01_probabilistic_set::ProbabilisticSet;
//!
//! let mut set = ProbabilisticSet::new(1024, 3)?;
//! set.add("example.com");
//!
//! assert!(set.contains("Example.com "));
//! assert!(!set.contains(None::<&str>));
//! assert_eq!(set.approximate_memory_bytes(), 128);
//! # Ok::<(), ms_01_probabilistic_set::FilterError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    BloomConfig, BloomConfigBuilder, BloomFilterParams, IndexMode, ProbabilisticSet,
};
pub use error::FilterError;
