//! Computed subnet data model.

use super::{AddressClass, Ipv4Address, PrefixLength, SubnetMask};
use serde::Serialize;
use std::fmt;

/// Inclusive range of assignable host addresses, never inverted.
#[derive(Serialize, Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct HostRange {
    pub start: Ipv4Address,
    pub end: Ipv4Address,
}

impl HostRange {
    pub fn contains(&self, addr: Ipv4Address) -> bool {
        self.start <= addr && addr <= self.end
    }
}

impl fmt::Display for HostRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Everything derived from one (address, prefix) pair.
#[derive(Serialize, Eq, PartialEq, Debug, Clone)]
pub struct SubnetResult {
    /// The address the calculation was run for.
    pub address: Ipv4Address,
    pub prefix: PrefixLength,
    pub network: Ipv4Address,
    pub broadcast: Ipv4Address,
    pub mask: SubnetMask,
    /// `NOT mask`, as used in ACLs.
    pub wildcard_mask: Ipv4Address,
    /// `None` when the subnet has no assignable hosts.
    pub usable: Option<HostRange>,
    /// `2^(32 - prefix)`, up to 4294967296 for `/0`.
    pub total_addresses: u64,
    pub usable_hosts: u64,
    pub class: AddressClass,
    /// Binary form of [`SubnetResult::address`].
    pub binary: String,
}

impl SubnetResult {
    /// Network in CIDR notation, e.g. `192.168.1.0/24`.
    pub fn cidr(&self) -> String {
        format!("{}/{}", self.network, self.prefix)
    }

    /// Whether `addr` falls inside this network (network and broadcast included).
    pub fn contains(&self, addr: Ipv4Address) -> bool {
        self.network <= addr && addr <= self.broadcast
    }
}

impl fmt::Display for SubnetResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} in {}", self.address, self.prefix, self.cidr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_range_contains() {
        let range = HostRange {
            start: Ipv4Address::new(10, 0, 0, 1),
            end: Ipv4Address::new(10, 0, 0, 254),
        };
        assert!(range.contains(Ipv4Address::new(10, 0, 0, 1)));
        assert!(range.contains(Ipv4Address::new(10, 0, 0, 100)));
        assert!(range.contains(Ipv4Address::new(10, 0, 0, 254)));
        assert!(!range.contains(Ipv4Address::new(10, 0, 0, 0)));
        assert!(!range.contains(Ipv4Address::new(10, 0, 0, 255)));
        assert_eq!(range.to_string(), "10.0.0.1 - 10.0.0.254");
    }
}
