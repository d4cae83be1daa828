//! Subnet calculation.
//!
//! Derives network, broadcast, mask, usable range, host counts and class
//! from a validated address and a prefix length. All arithmetic is on `u32`
//! with explicit handling of the `/0` and `/31`, `/32` edges.

use crate::error::ValidationFailure;
use crate::models::{AddressClass, HostRange, Ipv4Address, PrefixLength, SubnetResult};

/// How `/31` networks report their usable hosts.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Default)]
pub enum HostPolicy {
    /// `/31` and `/32` have no usable hosts.
    #[default]
    Strict,
    /// RFC 3021: both `/31` addresses are usable point-to-point hosts.
    Rfc3021,
}

/// Compute the subnet for `address` with a prefix of `prefix_len` bits,
/// using [`HostPolicy::Strict`].
///
/// # Examples
/// ```
/// use subnet_calc::models::Ipv4Address;
/// use subnet_calc::processing::compute_subnet;
///
/// let addr = Ipv4Address::parse("192.168.1.1").unwrap();
/// let subnet = compute_subnet(addr, 24).unwrap();
/// assert_eq!(subnet.network.to_string(), "192.168.1.0");
/// assert_eq!(subnet.broadcast.to_string(), "192.168.1.255");
/// assert_eq!(subnet.usable_hosts, 254);
/// assert!(compute_subnet(addr, 33).is_err());
/// ```
pub fn compute_subnet(
    address: Ipv4Address,
    prefix_len: u32,
) -> Result<SubnetResult, ValidationFailure> {
    compute_subnet_with_policy(address, prefix_len, HostPolicy::default())
}

/// Same as [`compute_subnet`] with an explicit `/31` policy.
pub fn compute_subnet_with_policy(
    address: Ipv4Address,
    prefix_len: u32,
    policy: HostPolicy,
) -> Result<SubnetResult, ValidationFailure> {
    let prefix = PrefixLength::new(prefix_len)?;
    Ok(compute(address, prefix, policy))
}

/// Infallible core once both inputs are validated.
pub fn compute(address: Ipv4Address, prefix: PrefixLength, policy: HostPolicy) -> SubnetResult {
    let mask = prefix.mask();
    let network = network_addr(address, prefix);
    let broadcast = broadcast_addr(address, prefix);
    let total_addresses = prefix.total_addresses();
    let (usable, usable_hosts) = usable_range(network, broadcast, prefix, policy);

    log::debug!(
        "compute({address}/{prefix}) network={network} broadcast={broadcast} usable_hosts={usable_hosts}"
    );

    SubnetResult {
        address,
        prefix,
        network,
        broadcast,
        mask,
        wildcard_mask: Ipv4Address::from_bits(mask.wildcard()),
        usable,
        total_addresses,
        usable_hosts,
        class: AddressClass::of(address),
        binary: address.to_binary_string(),
    }
}

/// Clear the host bits: `address AND mask`.
pub fn network_addr(address: Ipv4Address, prefix: PrefixLength) -> Ipv4Address {
    Ipv4Address::from_bits(address.to_bits() & prefix.mask().to_bits())
}

/// Set the host bits: `network OR NOT mask`.
pub fn broadcast_addr(address: Ipv4Address, prefix: PrefixLength) -> Ipv4Address {
    let mask = prefix.mask();
    Ipv4Address::from_bits((address.to_bits() & mask.to_bits()) | mask.wildcard())
}

fn usable_range(
    network: Ipv4Address,
    broadcast: Ipv4Address,
    prefix: PrefixLength,
    policy: HostPolicy,
) -> (Option<HostRange>, u64) {
    match (prefix.get(), policy) {
        (32, _) | (31, HostPolicy::Strict) => (None, 0),
        (31, HostPolicy::Rfc3021) => (
            Some(HostRange {
                start: network,
                end: broadcast,
            }),
            2,
        ),
        _ => {
            // At least 2 host bits, so network < broadcast - 1 and neither step wraps.
            let range = HostRange {
                start: Ipv4Address::from_bits(network.to_bits() + 1),
                end: Ipv4Address::from_bits(broadcast.to_bits() - 1),
            };
            (Some(range), prefix.total_addresses() - 2)
        }
    }
}
