//! Batch evaluation of many CIDR entries.
//!
//! Input is one `a.b.c.d/n` entry per line. Blank lines and `#` comments
//! are skipped. A bad line is recorded and the batch carries on.

use super::calculator::HostPolicy;
use super::cidr::calculate_cidr;
use crate::error::ValidationFailure;
use crate::models::SubnetResult;
use std::error::Error;
use std::path::Path;

/// One evaluated line of batch input.
#[derive(Debug)]
pub struct BatchEntry {
    /// 1-based line number in the input.
    pub line: usize,
    /// The trimmed entry text.
    pub input: String,
    pub result: Result<SubnetResult, ValidationFailure>,
}

/// Evaluate every entry in `text`.
pub fn calculate_batch(text: &str, policy: HostPolicy) -> Vec<BatchEntry> {
    log::info!("#Start calculate_batch() policy={policy:?}");
    let entries: Vec<BatchEntry> = text
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let input = line.trim();
            if input.is_empty() || input.starts_with('#') {
                return None;
            }
            let result = calculate_cidr(input, policy);
            if let Err(e) = &result {
                log::warn!("line {}: {e}", i + 1);
            }
            Some(BatchEntry {
                line: i + 1,
                input: input.to_string(),
                result,
            })
        })
        .collect();
    log::info!(
        "# End calculate_batch() entries={} failed={}",
        entries.len(),
        entries.iter().filter(|e| e.result.is_err()).count()
    );
    entries
}

/// Read `file` and evaluate every entry in it.
pub fn read_batch_file(file: &str, policy: HostPolicy) -> Result<Vec<BatchEntry>, Box<dyn Error>> {
    if !Path::new(file).exists() {
        return Err(format!("Batch file does not exist: {file}").into());
    }
    log::info!("Reading batch file: {file}");
    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("Error reading batch file {file}: {e}"))?;
    Ok(calculate_batch(&text, policy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_batch_skips_comments() {
        let text = "# header\n\n10.0.0.0/8\n  192.168.1.1/24  \n# end\n";
        let entries = calculate_batch(text, HostPolicy::Strict);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line, 3);
        assert_eq!(entries[0].input, "10.0.0.0/8");
        assert_eq!(entries[1].line, 4);
        assert_eq!(entries[1].input, "192.168.1.1/24");
        assert!(entries.iter().all(|e| e.result.is_ok()));
    }

    #[test]
    fn test_calculate_batch_keeps_failures() {
        let text = "10.0.0.0/8\n300.1.1.1/24\n192.168.1.1/33\n1.2.3/4\n10.0.0.1/31";
        let entries = calculate_batch(text, HostPolicy::Strict);
        assert_eq!(entries.len(), 5);
        assert!(entries[0].result.is_ok());
        assert!(matches!(
            entries[1].result,
            Err(ValidationFailure::OctetOutOfRange { .. })
        ));
        assert!(matches!(
            entries[2].result,
            Err(ValidationFailure::InvalidPrefixLength { .. })
        ));
        assert!(matches!(
            entries[3].result,
            Err(ValidationFailure::InvalidAddressFormat { .. })
        ));
        assert_eq!(entries[4].result.as_ref().unwrap().usable_hosts, 0);
    }

    #[test]
    fn test_read_batch_file() {
        let entries = read_batch_file("src/tests/test_data/batch_01.txt", HostPolicy::Strict)
            .expect("Error reading batch file");
        assert_eq!(entries.len(), 8);
        assert_eq!(entries.iter().filter(|e| e.result.is_err()).count(), 2);
        let first = entries[0].result.as_ref().unwrap();
        assert_eq!(first.cidr(), "192.168.1.0/24");
    }

    #[test]
    fn test_read_batch_file_missing() {
        let err = read_batch_file("src/tests/test_data/no_such_file.txt", HostPolicy::Strict)
            .unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
