//! Domain Layer - Pure logic
//!
//! This layer contains:
//! - The probabilistic set (Bloom filter)
//! - Normalization and the two base hash functions
//! - Parameter maths (theoretical false positive rate)
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::ProbabilisticSet;
pub use config::{BloomConfig, BloomConfigBuilder, DEFAULT_BIT_SIZE, DEFAULT_HASH_COUNT};
pub use hash_functions::{normalize, trim_element, IndexMode};
pub use parameters::{calculate_fpr, calculate_optimal_parameters, optimal_k, BloomFilterParams};
