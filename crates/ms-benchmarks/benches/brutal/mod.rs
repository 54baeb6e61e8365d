//! # Brutal Modular Benchmarks
//!
//! Each crate with a hot path gets a dedicated module that pushes it under
//! adversarial conditions.
//!
//! - `ms_01_probabilistic_set` - add/contains O(k), reference load, hashing

pub mod ms_01_probabilistic_set;
