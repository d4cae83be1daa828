//! CSV output formatting for subnet results.

use crate::models::SubnetResult;
use crate::processing::BatchEntry;

use super::terminal::format_field;

/// Column header matching [`csv_row`].
pub const CSV_HEADER: &str = r#"  "line",             "input",         "network",       "broadcast",            "mask",      "first_host",       "last_host",    "addresses",  "hosts","class",  "error""#;

/// Quote a text column, doubling any embedded `"`.
fn text_field(value: &str, width: usize) -> String {
    format_field(value.replace('"', "\"\""), width)
}

/// One CSV row for a successful result.
pub fn csv_row(line: usize, input: &str, subnet: &SubnetResult) -> String {
    let (first_host, last_host) = match &subnet.usable {
        Some(range) => (range.start.to_string(), range.end.to_string()),
        None => ("none".to_string(), "none".to_string()),
    };
    format!(
        "{line},{input},{network},{broadcast},{mask},{first_host},{last_host},{addresses},{hosts},{class},{error}",
        line = format_field(line, 6),
        input = text_field(input, 20),
        network = format_field(subnet.cidr(), 18),
        broadcast = format_field(&subnet.broadcast, 17),
        mask = format_field(&subnet.mask, 17),
        first_host = format_field(first_host, 17),
        last_host = format_field(last_host, 17),
        addresses = format_field(subnet.total_addresses, 12),
        hosts = format_field(subnet.usable_hosts, 12),
        class = format_field(subnet.class, 6),
        error = format_field("", 8),
    )
}

/// One CSV row for an input that failed validation.
fn csv_error_row(line: usize, input: &str, error: &str) -> String {
    let blank = |width| format_field("", width);
    format!(
        "{line},{input},{network},{broadcast},{mask},{first_host},{last_host},{addresses},{hosts},{class},{error}",
        line = format_field(line, 6),
        input = text_field(input, 20),
        network = blank(18),
        broadcast = blank(17),
        mask = blank(17),
        first_host = blank(17),
        last_host = blank(17),
        addresses = blank(12),
        hosts = blank(12),
        class = blank(6),
        error = text_field(error, 8),
    )
}

/// Header plus one row per batch entry.
pub fn batch_csv(entries: &[BatchEntry]) -> Vec<String> {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(CSV_HEADER.to_string());
    for entry in entries {
        let row = match &entry.result {
            Ok(subnet) => csv_row(entry.line, &entry.input, subnet),
            Err(e) => csv_error_row(entry.line, &entry.input, &e.to_string()),
        };
        rows.push(row);
    }
    rows
}
