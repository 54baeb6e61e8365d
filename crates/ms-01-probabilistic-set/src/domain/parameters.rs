//! Bloom filter parameter maths
//!
//! Formulas:
//! - FPR = (1 - e^(-kn/m))^k       -- false positive probability
//! - m = -n*ln(fpr) / (ln(2)^2)    -- optimal bits
//! - k = (m/n) * ln(2)             -- optimal probe count

use std::f64::consts::LN_2;

/// Upper bound applied to a computed probe count
pub const MAX_OPTIMAL_HASH_COUNT: u64 = 32;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter
    pub size_bits: u64,
    /// Number of probes per element
    pub hash_count: u64,
    /// Expected false positive rate with these parameters
    pub expected_fpr: f64,
}

/// Calculate optimal parameters for `num_elements` at `target_fpr`
pub fn calculate_optimal_parameters(num_elements: u64, target_fpr: f64) -> BloomFilterParams {
    if num_elements == 0 {
        return BloomFilterParams {
            size_bits: 1,
            hash_count: 1,
            expected_fpr: 0.0,
        };
    }

    let n = num_elements as f64;
    let ln2_squared = LN_2 * LN_2;

    let m = ((-n * target_fpr.ln() / ln2_squared).ceil() as u64).max(1);
    let k = optimal_k(m, num_elements).clamp(1, MAX_OPTIMAL_HASH_COUNT);

    BloomFilterParams {
        size_bits: m,
        hash_count: k,
        expected_fpr: calculate_fpr(m, num_elements, k),
    }
}

/// Theoretical false positive rate after `n` distinct insertions
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: u64, n: u64, k: u64) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powf(k as f64)
}

/// Optimal probe count for `m` bits and `n` elements
pub fn optimal_k(m: u64, n: u64) -> u64 {
    if n == 0 {
        return 1;
    }
    ((m as f64 / n as f64) * LN_2).round() as u64
}
