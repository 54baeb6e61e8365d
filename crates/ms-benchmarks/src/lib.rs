//! Benchmark utilities for the Mailscreen workspace
pub mod utils {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const DOMAIN_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";
    const TLDS: [&str; 5] = [".com", ".net", ".org", ".io", ".xyz"];

    /// Deterministic pseudo-random domain names
    pub fn generate_domains(count: usize, seed: u64) -> Vec<String> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let len = rng.gen_range(5..=16);
                let mut domain: String = (0..len)
                    .map(|_| DOMAIN_CHARS[rng.gen_range(0..DOMAIN_CHARS.len())] as char)
                    .collect();
                domain.push_str(TLDS[rng.gen_range(0..TLDS.len())]);
                domain
            })
            .collect()
    }

    /// Domains sharing a long prefix, which the polynomial hash handles worst
    pub fn generate_shared_prefix_domains(count: usize) -> Vec<String> {
        (0..count)
            .map(|i| format!("login-secure-account-verify-{i}.example"))
            .collect()
    }
}
