//! Input parsing
//!
//! Both inputs are newline-delimited text files. Lines are trimmed of
//! characters at or below U+0020 and blank lines are dropped. Email lines are reduced to their domain; addresses
//! without a usable domain are skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use ms_01_probabilistic_set::domain::trim_element;
use tracing::debug;

use crate::error::HarnessError;

/// Trimmed, non-empty lines of a reader
pub fn parse_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = trim_element(&line);
        if !trimmed.is_empty() {
            lines.push(trimmed.to_owned());
        }
    }
    Ok(lines)
}

/// Read the suspicious-domain list
pub fn read_lines(path: &Path) -> Result<Vec<String>, HarnessError> {
    let file = File::open(path).map_err(|e| HarnessError::io(path, e))?;
    let lines = parse_lines(BufReader::new(file)).map_err(|e| HarnessError::io(path, e))?;
    debug!(path = %path.display(), count = lines.len(), "Read domain list");
    Ok(lines)
}

/// Domain portion of an email address
///
/// Takes everything after the last `@`, lowercased and trimmed. Returns
/// `None` when there is no `@`, or when nothing follows it.
pub fn extract_domain(email: &str) -> Option<String> {
    let (_, domain) = trim_element(email).rsplit_once('@')?;
    let domain = domain.to_lowercase();
    let domain = trim_element(&domain);
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_owned())
}

/// Domains of the email addresses in a reader, skipping unusable lines
pub fn parse_email_domains<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    Ok(parse_lines(reader)?
        .iter()
        .filter_map(|email| extract_domain(email))
        .collect())
}

/// Read the email list and extract each address's domain
pub fn read_email_domains(path: &Path) -> Result<Vec<String>, HarnessError> {
    let file = File::open(path).map_err(|e| HarnessError::io(path, e))?;
    let domains =
        parse_email_domains(BufReader::new(file)).map_err(|e| HarnessError::io(path, e))?;
    debug!(path = %path.display(), count = domains.len(), "Read email domains");
    Ok(domains)
}
