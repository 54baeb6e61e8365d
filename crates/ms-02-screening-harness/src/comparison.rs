//! Bloom filter vs exact set comparison
//!
//! Loads the suspicious domains into both a [`ProbabilisticSet`] and an exact
//! `HashSet`, times each add and check phase, and scores the filter's answers
//! with the exact set as ground truth. Both structures see the same
//! normalized keys, so false negatives must always be zero.

use std::collections::HashSet;

use ms_01_probabilistic_set::domain::parameters::MAX_OPTIMAL_HASH_COUNT;
use ms_01_probabilistic_set::domain::{
    calculate_fpr, calculate_optimal_parameters, normalize, optimal_k,
};
use ms_01_probabilistic_set::{BloomConfig, FilterError, ProbabilisticSet};
use tracing::{info, warn};

use crate::measure::{as_millis_f64, estimate_hash_set_bytes, timed};
use crate::report::{
    Accuracy, AddPhase, CheckPhase, ComparisonReport, FilterParameters, Sizing,
};

/// Screen `email_domains` against `suspicious` and report on the filter
pub fn run_comparison(
    suspicious: &[String],
    email_domains: &[String],
    config: &BloomConfig,
) -> Result<ComparisonReport, FilterError> {
    let mut filter = ProbabilisticSet::from_config(config)?;

    let ((), bloom_add) = timed(|| {
        for domain in suspicious {
            filter.add(domain.as_str());
        }
    });
    let (exact, exact_add) = timed(|| {
        suspicious
            .iter()
            .map(|domain| normalize(domain))
            .collect::<HashSet<String>>()
    });
    info!(
        loaded = suspicious.len(),
        distinct = exact.len(),
        bloom_ms = as_millis_f64(bloom_add),
        exact_ms = as_millis_f64(exact_add),
        "Add phase complete"
    );

    let (bloom_positives, bloom_check) = timed(|| {
        email_domains
            .iter()
            .filter(|domain| filter.contains(domain.as_str()))
            .count()
    });
    let (exact_positives, exact_check) = timed(|| {
        email_domains
            .iter()
            .filter(|domain| exact.contains(normalize(domain).as_str()))
            .count()
    });
    info!(
        queried = email_domains.len(),
        bloom_positives,
        exact_positives,
        "Check phase complete"
    );

    let accuracy = score(&filter, &exact, email_domains);
    let sizing = size_for(&filter, exact.len() as u64, accuracy.theoretical_fpr);
    if accuracy.false_negatives > 0 {
        warn!(
            false_negatives = accuracy.false_negatives,
            "Filter missed domains present in the exact set"
        );
    }

    Ok(ComparisonReport {
        suspicious_loaded: suspicious.len(),
        email_domains_loaded: email_domains.len(),
        parameters: FilterParameters {
            bit_size: filter.bit_size(),
            hash_count: filter.hash_count(),
            index_mode: filter.index_mode(),
            bloom_memory_bytes: filter.approximate_memory_bytes(),
            exact_set_memory_bytes: estimate_hash_set_bytes(&exact),
            fill_ratio: filter.fill_ratio(),
        },
        add_phase: AddPhase {
            bloom_ms: as_millis_f64(bloom_add),
            exact_set_ms: as_millis_f64(exact_add),
        },
        check_phase: CheckPhase {
            bloom_ms: as_millis_f64(bloom_check),
            exact_set_ms: as_millis_f64(exact_check),
            bloom_positives,
            exact_set_positives: exact_positives,
        },
        accuracy,
        sizing,
    })
}

fn size_for(filter: &ProbabilisticSet, distinct: u64, theoretical_fpr: f64) -> Sizing {
    let recommended = calculate_optimal_parameters(distinct, theoretical_fpr);
    Sizing {
        distinct_domains: distinct,
        optimal_hash_count: optimal_k(filter.bit_size().unsigned_abs(), distinct)
            .clamp(1, MAX_OPTIMAL_HASH_COUNT),
        recommended_bit_size: recommended.size_bits,
        recommended_hash_count: recommended.hash_count,
        recommended_fpr: recommended.expected_fpr,
    }
}

fn score(filter: &ProbabilisticSet, exact: &HashSet<String>, email_domains: &[String]) -> Accuracy {
    let mut false_positives = 0;
    let mut false_negatives = 0;
    let mut negatives_checked = 0;

    for domain in email_domains {
        let bloom_says = filter.contains(domain.as_str());
        let exact_says = exact.contains(normalize(domain).as_str());

        match (bloom_says, exact_says) {
            (true, false) => false_positives += 1,
            (false, true) => false_negatives += 1,
            _ => {}
        }
        if !exact_says {
            negatives_checked += 1;
        }
    }

    let observed_fpr = if negatives_checked == 0 {
        0.0
    } else {
        false_positives as f64 / negatives_checked as f64
    };

    Accuracy {
        false_positives,
        false_negatives,
        negatives_checked,
        observed_fpr,
        theoretical_fpr: calculate_fpr(
            filter.bit_size().unsigned_abs(),
            exact.len() as u64,
            filter.hash_count().unsigned_abs(),
        ),
        estimated_fpr: filter.estimated_false_positive_rate(),
    }
}
