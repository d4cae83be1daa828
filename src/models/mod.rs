//! Domain models for the subnet calculator.
//!
//! This module contains the core value types:
//! - [`Ipv4Address`] - 32-bit address with dotted-quad and binary codecs
//! - [`PrefixLength`] and [`SubnetMask`] - validated CIDR prefix and its mask
//! - [`AddressClass`] - classful A/B/C/D/E designation
//! - [`SubnetResult`] and [`HostRange`] - computed subnet data

mod class;
mod ipv4;
mod prefix;
mod subnet;

// Re-export public types
pub use class::AddressClass;
pub use ipv4::{Ipv4Address, BINARY_SEPARATOR, MAX_LENGTH};
pub use prefix::{PrefixLength, SubnetMask};
pub use subnet::{HostRange, SubnetResult};
