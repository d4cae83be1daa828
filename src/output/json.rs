//! JSON output.

use crate::models::SubnetResult;
use crate::processing::BatchEntry;
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct BatchRecord<'a> {
    line: usize,
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    subnet: Option<&'a SubnetResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Pretty-printed JSON for one subnet.
pub fn subnet_json(subnet: &SubnetResult) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(subnet).map_err(|e| format!("Error serializing JSON: {e}").into())
}

/// Pretty-printed JSON array for a batch, one record per entry.
pub fn batch_json(entries: &[BatchEntry]) -> Result<String, Box<dyn Error>> {
    let records: Vec<BatchRecord> = entries
        .iter()
        .map(|entry| BatchRecord {
            line: entry.line,
            input: &entry.input,
            subnet: entry.result.as_ref().ok(),
            error: entry.result.as_ref().err().map(|e| e.to_string()),
        })
        .collect();
    serde_json::to_string_pretty(&records)
        .map_err(|e| format!("Error serializing JSON: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ipv4Address;
    use crate::processing::{calculate_batch, compute_subnet, HostPolicy};

    #[test]
    fn test_subnet_json() {
        let subnet = compute_subnet(Ipv4Address::new(10, 0, 0, 5), 8).unwrap();
        let json = subnet_json(&subnet).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["broadcast"], "10.255.255.255");
        assert_eq!(value["usable_hosts"], 16777214);
        assert_eq!(value["wildcard_mask"], "0.255.255.255");
    }

    #[test]
    fn test_batch_json() {
        let entries = calculate_batch("0.0.0.0/0\n1.2.3.4/99", HostPolicy::Strict);
        let json = batch_json(&entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["subnet"]["total_addresses"], 4294967296u64);
        assert!(records[0].get("error").is_none());
        assert_eq!(
            records[1]["error"],
            "Invalid prefix length: '99' (expected 0-32)"
        );
        assert!(records[1].get("subnet").is_none());
    }
}
