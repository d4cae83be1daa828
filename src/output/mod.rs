//! Output formatting for subnet results.
//!
//! This module handles rendering computed subnets:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output via serde
//! - [`terminal`] - Terminal output with colors

mod csv;
mod json;
mod terminal;

pub use csv::{batch_csv, csv_row, CSV_HEADER};
pub use json::{batch_json, subnet_json};
pub use terminal::{format_field, format_subnet, subnet_lines};
