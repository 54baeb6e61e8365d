//! Error types for the probabilistic set

use thiserror::Error;

/// Errors that can occur when building a probabilistic set
///
/// Only construction can fail. `add` and `contains` are total over their
/// input domain, including missing input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfiguration {
        parameter: &'static str,
        value: i64,
        reason: &'static str,
    },
}

impl FilterError {
    pub(crate) fn invalid(parameter: &'static str, value: i64, reason: &'static str) -> Self {
        Self::InvalidConfiguration {
            parameter,
            value,
            reason,
        }
    }
}
