//! Hash functions for the probabilistic set
//!
//! Two base hashes are computed over the UTF-16 code units of the normalized
//! element and combined into `hash_count` probe positions:
//!
//! - `h1`: 32-bit polynomial hash (`h = 31*h + c`), zero-extended
//! - `h2`: FNV-style rolling hash (`h = (h ^ c) * P`), low 32 bits
//! - probe `i`: `h1 + i*h2 + i*i`, reduced modulo the bit size
//!
//! Every step wraps on overflow. The outputs are fixed so that other
//! implementations can be checked against the same vectors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Multiplier of the FNV-style secondary hash
pub const FNV_PRIME: u64 = 1_099_511_628_211;

/// Multiplier of the polynomial primary hash
const POLYNOMIAL_BASE: i32 = 31;

const LOW_32_BITS: u64 = 0xFFFF_FFFF;

/// How a combined probe value is reduced to a bit index
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexMode {
    /// `|combined| mod bit_size` with signed arithmetic.
    ///
    /// `|i64::MIN|` wraps back to `i64::MIN`. If that leaves a negative
    /// remainder the probe has no addressable bit and is skipped.
    #[default]
    Compatible,
    /// `combined` reinterpreted as `u64`, then `mod bit_size`.
    Unsigned,
}

impl fmt::Display for IndexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexMode::Compatible => f.write_str("compatible"),
            IndexMode::Unsigned => f.write_str("unsigned"),
        }
    }
}

impl FromStr for IndexMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compatible" => Ok(IndexMode::Compatible),
            "unsigned" => Ok(IndexMode::Unsigned),
            other => Err(format!(
                "unknown index mode '{other}' (expected 'compatible' or 'unsigned')"
            )),
        }
    }
}

/// Normalize an element before hashing
///
/// Lowercases, then strips leading and trailing characters at or below
/// U+0020 (space and the control characters).
pub fn normalize(element: &str) -> String {
    trim_element(&element.to_lowercase()).to_owned()
}

/// Strip leading and trailing characters at or below U+0020
///
/// Unicode whitespace above that range (NBSP, ideographic space) is kept.
pub fn trim_element(element: &str) -> &str {
    element.trim_matches(|c: char| c <= '\u{20}')
}

/// Primary hash `h1`
pub fn polynomial_hash(normalized: &str) -> u64 {
    let hash = normalized.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_mul(POLYNOMIAL_BASE)
            .wrapping_add(i32::from(unit))
    });
    u64::from(hash as u32)
}

/// Secondary hash `h2`
pub fn fnv_style_hash(normalized: &str) -> u64 {
    let hash = normalized.encode_utf16().fold(0u64, |hash, unit| {
        (hash ^ u64::from(unit)).wrapping_mul(FNV_PRIME)
    });
    hash & LOW_32_BITS
}

/// Combine the base hashes for probe `i`
///
/// `i*i` is evaluated on the 32-bit probe counter and only then widened.
pub fn combine(h1: u64, h2: u64, i: i32) -> i64 {
    // Both base hashes fit in 32 bits, so the casts are lossless.
    let h1 = h1 as i64;
    let h2 = h2 as i64;
    h1.wrapping_add(i64::from(i).wrapping_mul(h2))
        .wrapping_add(i64::from(i.wrapping_mul(i)))
}

/// Reduce a combined probe value to a bit index
///
/// `bit_size` must be positive. Returns `None` only in
/// [`IndexMode::Compatible`] when `combined == i64::MIN` and the wrapped
/// magnitude leaves a negative remainder.
pub fn derive_index(combined: i64, bit_size: i64, mode: IndexMode) -> Option<usize> {
    match mode {
        IndexMode::Compatible => usize::try_from(combined.wrapping_abs() % bit_size).ok(),
        IndexMode::Unsigned => usize::try_from((combined as u64) % (bit_size as u64)).ok(),
    }
}

/// Compute the `hash_count` probe results for a normalized element
pub fn probe_positions(
    normalized: &str,
    hash_count: i32,
    bit_size: i64,
    mode: IndexMode,
) -> impl Iterator<Item = Option<usize>> {
    let h1 = polynomial_hash(normalized);
    let h2 = fnv_style_hash(normalized);
    (0..hash_count).map(move |i| derive_index(combine(h1, h2, i), bit_size, mode))
}
