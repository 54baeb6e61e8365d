//! Timing and memory estimation
//!
//! Measurements wrap calls into the probabilistic set from the outside; the
//! set itself keeps no timers or counters.

use std::collections::HashSet;
use std::mem::size_of;
use std::time::{Duration, Instant};

/// Control bytes per group in the std hash table layout
const CONTROL_GROUP_WIDTH: usize = 16;

/// Run `f` and return its output with the elapsed wall time
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let output = f();
    (output, start.elapsed())
}

/// Milliseconds as a float, for reporting
pub fn as_millis_f64(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}

/// Approximate heap bytes held by a `HashSet<String>`
///
/// Counts the bucket array (one `String` header plus one control byte per
/// bucket) and the string buffers. Allocator overhead is not included.
pub fn estimate_hash_set_bytes(set: &HashSet<String>) -> usize {
    let buckets = bucket_count(set.capacity());
    let table = if buckets == 0 {
        0
    } else {
        buckets * (size_of::<String>() + 1) + CONTROL_GROUP_WIDTH
    };
    let strings: usize = set.iter().map(String::capacity).sum();
    table + strings
}

/// Buckets backing a table with the given usable capacity (7/8 load factor)
fn bucket_count(capacity: usize) -> usize {
    match capacity {
        0 => 0,
        1..=3 => 4,
        4..=7 => 8,
        _ => (capacity.saturating_mul(8) / 7).next_power_of_two(),
    }
}
