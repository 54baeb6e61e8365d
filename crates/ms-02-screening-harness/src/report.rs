//! Comparison report
//!
//! Rendered as text through `Display`, or as JSON through `serde`.

use std::fmt;

use ms_01_probabilistic_set::IndexMode;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::HarnessError;

/// Result of screening a set of email domains
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ComparisonReport {
    /// Suspicious domains loaded (before de-duplication)
    pub suspicious_loaded: usize,
    /// Email domains loaded
    pub email_domains_loaded: usize,
    pub parameters: FilterParameters,
    pub add_phase: AddPhase,
    pub check_phase: CheckPhase,
    pub accuracy: Accuracy,
    pub sizing: Sizing,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterParameters {
    pub bit_size: i64,
    pub hash_count: i64,
    pub index_mode: IndexMode,
    /// `ceil(bit_size / 8)`
    pub bloom_memory_bytes: i64,
    /// Heap estimate of the exact set
    pub exact_set_memory_bytes: usize,
    /// Fraction of filter bits set after loading
    pub fill_ratio: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AddPhase {
    pub bloom_ms: f64,
    pub exact_set_ms: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CheckPhase {
    pub bloom_ms: f64,
    pub exact_set_ms: f64,
    pub bloom_positives: usize,
    pub exact_set_positives: usize,
}

/// Filter answers measured against the exact set
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Accuracy {
    /// Filter says suspicious, exact set says not
    pub false_positives: usize,
    /// Filter says not suspicious, exact set says suspicious
    pub false_negatives: usize,
    /// Queries the exact set answered "not suspicious"
    pub negatives_checked: usize,
    /// `false_positives / negatives_checked`
    pub observed_fpr: f64,
    /// `(1 - e^(-kn/m))^k` for the distinct suspicious domains
    pub theoretical_fpr: f64,
    /// `fill_ratio^k`
    pub estimated_fpr: f64,
}

/// Filter sizing for the distinct suspicious domains actually loaded
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Sizing {
    pub distinct_domains: u64,
    /// `round(m/n * ln2)` for the configured bit size
    pub optimal_hash_count: u64,
    /// Smallest filter reaching the configured theoretical FPR
    pub recommended_bit_size: u64,
    pub recommended_hash_count: u64,
    pub recommended_fpr: f64,
}

impl ComparisonReport {
    /// Render in the requested format
    pub fn render(&self, format: OutputFormat) -> Result<String, HarnessError> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| HarnessError::Serialization(e.to_string())),
        }
    }
}

fn kib(bytes: f64) -> f64 {
    bytes / 1024.0
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.parameters;
        let add = &self.add_phase;
        let check = &self.check_phase;
        let acc = &self.accuracy;

        writeln!(f, "Loaded {} suspicious domains.", self.suspicious_loaded)?;
        writeln!(f, "Loaded {} email domains.", self.email_domains_loaded)?;
        writeln!(f)?;

        writeln!(f, "=== BLOOM FILTER PARAMETERS ===")?;
        writeln!(f, "Bit array size: {} bits", p.bit_size)?;
        writeln!(f, "Hash functions: {}", p.hash_count)?;
        writeln!(f, "Index mode: {}", p.index_mode)?;
        writeln!(f, "Fill ratio: {:.4}", p.fill_ratio)?;
        writeln!(f, "Bloom Filter memory: {:.3} KB", kib(p.bloom_memory_bytes as f64))?;
        writeln!(
            f,
            "HashSet memory (approx): {:.3} KB",
            kib(p.exact_set_memory_bytes as f64)
        )?;
        writeln!(f)?;

        writeln!(f, "=== ADD PHASE (SUSPICIOUS DOMAINS) ===")?;
        writeln!(f, "Bloom Filter add time: {:.3} ms", add.bloom_ms)?;
        writeln!(f, "HashSet add time:      {:.3} ms", add.exact_set_ms)?;
        writeln!(f)?;

        writeln!(f, "=== CHECK PHASE (EMAIL DOMAINS) ===")?;
        writeln!(f, "Bloom Filter check time: {:.3} ms", check.bloom_ms)?;
        writeln!(f, "HashSet check time:      {:.3} ms", check.exact_set_ms)?;
        writeln!(f, "Bloom positives: {}", check.bloom_positives)?;
        writeln!(f, "HashSet positives: {}", check.exact_set_positives)?;
        writeln!(f)?;

        writeln!(f, "=== ACCURACY (VS HASHSET AS GROUND TRUTH) ===")?;
        writeln!(
            f,
            "False positives (Bloom says suspicious, HashSet says not): {}",
            acc.false_positives
        )?;
        writeln!(
            f,
            "False negatives (Bloom says NOT, HashSet says suspicious): {}",
            acc.false_negatives
        )?;
        writeln!(f, "Observed false positive rate: {:.6}", acc.observed_fpr)?;
        writeln!(f, "Theoretical false positive rate: {:.6}", acc.theoretical_fpr)?;
        writeln!(f, "Estimated false positive rate (from fill): {:.6}", acc.estimated_fpr)?;
        writeln!(f)?;

        let sizing = &self.sizing;
        writeln!(f, "=== SIZING ({} DISTINCT DOMAINS) ===", sizing.distinct_domains)?;
        writeln!(
            f,
            "Optimal hash functions for {} bits: {}",
            p.bit_size, sizing.optimal_hash_count
        )?;
        write!(
            f,
            "Smallest filter at the theoretical rate: {} bits, {} hash functions (FPR {:.6})",
            sizing.recommended_bit_size, sizing.recommended_hash_count, sizing.recommended_fpr
        )
    }
}
