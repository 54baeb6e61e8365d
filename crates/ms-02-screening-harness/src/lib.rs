//! # MS-02 Screening Harness
//!
//! Benchmarks the probabilistic set against an exact `HashSet` on a real
//! workload: a newline-delimited list of suspicious domains and a
//! newline-delimited list of email addresses whose domains are screened.
//!
//! ## Modules
//!
//! - `config/` - Defaults, environment overrides, output format
//! - `input/` - Line parsing and email domain extraction
//! - `measure/` - Wall-clock timing and exact-set memory estimate
//! - `comparison/` - Add/check phases and accuracy scoring
//! - `report/` - Text and JSON rendering
//!
//! The probabilistic set never sees a file or a timer; everything here wraps
//! its public API.

pub mod comparison;
pub mod config;
pub mod error;
pub mod input;
pub mod measure;
pub mod report;

use tracing::info;

pub use comparison::run_comparison;
pub use config::{HarnessConfig, OutputFormat};
pub use error::HarnessError;
pub use report::ComparisonReport;

/// Read both input files and run the comparison
pub fn run(config: &HarnessConfig) -> Result<ComparisonReport, HarnessError> {
    config.validate()?;

    let suspicious = input::read_lines(&config.suspicious_path)?;
    let email_domains = input::read_email_domains(&config.emails_path)?;
    info!(
        suspicious = suspicious.len(),
        email_domains = email_domains.len(),
        "Inputs loaded"
    );

    run_comparison(&suspicious, &email_domains, &config.filter).map_err(HarnessError::from)
}
