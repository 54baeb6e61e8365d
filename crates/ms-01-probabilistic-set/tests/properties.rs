//! # Property Tests for the Probabilistic Set (ms-01)
//!
//! ## Test Categories
//!
//! 1. **No false negatives** - inserted elements are always found
//! 2. **Normalization** - case and surrounding whitespace are ignored
//! 3. **Idempotence** - repeated adds leave the bit array unchanged
//! 4. **Index bound** - every probe lands inside the bit array
//! 5. **False positive rate** - observed rate tracks the theoretical model

use std::collections::HashSet;

use ms_01_probabilistic_set::domain::hash_functions::probe_positions;
use ms_01_probabilistic_set::domain::{calculate_fpr, normalize};
use ms_01_probabilistic_set::{IndexMode, ProbabilisticSet};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// =============================================================================
// TEST HELPERS
// =============================================================================

const DOMAIN_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const TLDS: [&str; 4] = [".com", ".net", ".org", ".xyz"];

fn random_domain(rng: &mut StdRng) -> String {
    let len = rng.gen_range(6..=14);
    let mut domain: String = (0..len)
        .map(|_| DOMAIN_CHARS[rng.gen_range(0..DOMAIN_CHARS.len())] as char)
        .collect();
    domain.push_str(TLDS[rng.gen_range(0..TLDS.len())]);
    domain
}

/// Two disjoint sets of distinct pseudo-random domains
fn disjoint_domains(seed: u64, inserted: usize, queried: usize) -> (Vec<String>, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();

    let mut take = |count: usize| {
        let mut out = Vec::with_capacity(count);
        while out.len() < count {
            let domain = random_domain(&mut rng);
            if seen.insert(domain.clone()) {
                out.push(domain);
            }
        }
        out
    };

    let a = take(inserted);
    let b = take(queried);
    (a, b)
}

fn false_positive_rate(set: &ProbabilisticSet, queries: &[String]) -> f64 {
    let hits = queries.iter().filter(|q| set.contains(q.as_str())).count();
    hits as f64 / queries.len() as f64
}

fn domain_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.-]{0,40}"
}

fn mode_strategy() -> impl Strategy<Value = IndexMode> {
    prop_oneof![Just(IndexMode::Compatible), Just(IndexMode::Unsigned)]
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_no_false_negatives(
        element in domain_strategy(),
        others in prop::collection::vec(domain_strategy(), 0..50),
        bit_size in 1i64..4096,
        hash_count in 1i64..12,
        mode in mode_strategy(),
    ) {
        let mut set = ProbabilisticSet::with_mode(bit_size, hash_count, mode).unwrap();
        set.add(element.as_str());
        prop_assert!(set.contains(element.as_str()));

        for other in &others {
            set.add(other.as_str());
        }
        prop_assert!(set.contains(element.as_str()));
    }

    #[test]
    fn prop_normalization_equivalence(
        element in domain_strategy(),
        probe in domain_strategy(),
    ) {
        let mut set = ProbabilisticSet::new(2048, 4).unwrap();
        set.add(element.as_str());

        for candidate in [element.clone(), probe] {
            let plain = set.contains(candidate.as_str());
            let upper = set.contains(candidate.to_uppercase().as_str());
            let padded = set.contains(format!(" {candidate} ").as_str());
            prop_assert_eq!(plain, upper);
            prop_assert_eq!(plain, padded);
        }
    }

    #[test]
    fn prop_add_is_idempotent(
        element in domain_strategy(),
        repeats in 1usize..8,
    ) {
        let mut once = ProbabilisticSet::new(1000, 5).unwrap();
        let mut many = ProbabilisticSet::new(1000, 5).unwrap();

        once.add(element.as_str());
        for _ in 0..repeats {
            many.add(element.as_str());
        }

        prop_assert!(once.set_positions().eq(many.set_positions()));
    }

    #[test]
    fn prop_index_bound(
        element in any::<String>(),
        bit_size in 1i64..=i64::from(u32::MAX),
        hash_count in 1i32..64,
        mode in mode_strategy(),
    ) {
        let normalized = normalize(&element);
        let positions: Vec<_> =
            probe_positions(&normalized, hash_count, bit_size, mode).collect();

        prop_assert_eq!(positions.len(), hash_count as usize);
        for position in positions {
            let index = position.expect("combined value cannot reach i64::MIN here");
            prop_assert!((index as i64) < bit_size);
        }
    }

    #[test]
    fn prop_missing_input_is_noop(
        elements in prop::collection::vec(domain_strategy(), 0..20),
    ) {
        let mut set = ProbabilisticSet::new(512, 3).unwrap();
        for element in &elements {
            set.add(element.as_str());
        }
        let before: Vec<usize> = set.set_positions().collect();

        set.add(None::<&str>);

        prop_assert!(set.set_positions().eq(before));
        prop_assert!(!set.contains(None::<&str>));
    }
}

// =============================================================================
// FALSE POSITIVE SCENARIOS
// =============================================================================

#[test]
fn test_false_positive_rate_at_reference_load() {
    let (inserted, queried) = disjoint_domains(7, 10_000, 10_000);
    let mut set = ProbabilisticSet::new(1_000_000, 5).unwrap();
    for domain in &inserted {
        set.add(domain.as_str());
    }

    for domain in &inserted {
        assert!(set.contains(domain.as_str()), "False negative for {domain}");
    }

    let theoretical = calculate_fpr(1_000_000, 10_000, 5);
    let observed = false_positive_rate(&set, &queried);
    assert!(
        observed <= 4.0 * theoretical + 0.001,
        "Observed FPR {observed} too far above theoretical {theoretical}"
    );
}

#[test]
fn test_false_positive_rate_dense_filter() {
    // kn/m = 0.5: theoretical FPR ≈ 0.94%
    let (inserted, queried) = disjoint_domains(11, 2_000, 10_000);
    let mut set = ProbabilisticSet::new(20_000, 5).unwrap();
    for domain in &inserted {
        set.add(domain.as_str());
    }

    let theoretical = calculate_fpr(20_000, 2_000, 5);
    let observed = false_positive_rate(&set, &queried);
    assert!(observed > 0.0, "A half-loaded filter should show some false positives");
    assert!(
        observed <= 4.0 * theoretical,
        "Observed FPR {observed} too far above theoretical {theoretical}"
    );

    let estimate = set.estimated_false_positive_rate();
    assert!(
        estimate <= 4.0 * theoretical && estimate >= theoretical / 4.0,
        "Fill-based estimate {estimate} inconsistent with theoretical {theoretical}"
    );
}

#[test]
fn test_reference_vector_mixed_case_lookup() {
    let mut set = ProbabilisticSet::new(1024, 3).unwrap();
    set.add("example.com");

    assert!(set.contains("Example.com "));
    let positions: Vec<usize> = set.set_positions().collect();
    assert_eq!(positions, vec![219, 765, 1003]);
}
