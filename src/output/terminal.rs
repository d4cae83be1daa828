//! Terminal output utilities.
//!
//! Provides formatting helpers and the labelled text view of a subnet.

use crate::models::SubnetResult;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Label/value pairs in display order.
pub fn subnet_lines(subnet: &SubnetResult) -> Vec<(&'static str, String)> {
    let usable = match &subnet.usable {
        Some(range) => range.to_string(),
        None => "none".to_string(),
    };
    vec![
        ("Address", subnet.address.to_string()),
        ("Network", subnet.cidr()),
        ("Netmask", format!("{} = {}", subnet.mask, subnet.prefix)),
        ("Wildcard", subnet.wildcard_mask.to_string()),
        ("Broadcast", subnet.broadcast.to_string()),
        ("HostMin-Max", usable),
        ("Addresses", subnet.total_addresses.to_string()),
        ("Hosts/Net", subnet.usable_hosts.to_string()),
        (
            "Class",
            format!("{} ({})", subnet.class, subnet.class.description()),
        ),
        ("Binary", subnet.binary.clone()),
    ]
}

/// Render a subnet as aligned `label: value` lines.
pub fn format_subnet(subnet: &SubnetResult) -> String {
    subnet_lines(subnet)
        .into_iter()
        .map(|(label, value)| format!("{:<12} {}", format!("{label}:").blue(), value))
        .collect::<Vec<String>>()
        .join("\n")
}
