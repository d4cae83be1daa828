//! Text entry points: raw address and prefix strings as typed by a user.

use super::calculator::{compute, HostPolicy};
use crate::error::ValidationFailure;
use crate::models::{Ipv4Address, PrefixLength, SubnetResult};

/// Split `"a.b.c.d/n"` into a validated address and prefix.
///
/// A missing or repeated `/` is an [`ValidationFailure::InvalidAddressFormat`].
pub fn parse_cidr(text: &str) -> Result<(Ipv4Address, PrefixLength), ValidationFailure> {
    let text = text.trim();
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != 2 {
        return Err(ValidationFailure::InvalidAddressFormat {
            input: text.to_string(),
        });
    }
    let addr = Ipv4Address::parse(parts[0])?;
    let prefix = PrefixLength::parse(parts[1])?;
    Ok((addr, prefix))
}

/// Validate raw address and prefix text, then compute.
///
/// The address is checked first; nothing is computed unless both inputs
/// are valid.
///
/// # Examples
/// ```
/// use subnet_calc::processing::{calculate, HostPolicy};
/// let subnet = calculate("10.0.0.5", "8", HostPolicy::Strict).unwrap();
/// assert_eq!(subnet.broadcast.to_string(), "10.255.255.255");
/// ```
pub fn calculate(
    address: &str,
    prefix: &str,
    policy: HostPolicy,
) -> Result<SubnetResult, ValidationFailure> {
    let addr = Ipv4Address::parse(address)?;
    let prefix = PrefixLength::parse(prefix)?;
    Ok(compute(addr, prefix, policy))
}

/// Compute from `"a.b.c.d/n"` notation.
pub fn calculate_cidr(text: &str, policy: HostPolicy) -> Result<SubnetResult, ValidationFailure> {
    let (addr, prefix) = parse_cidr(text)?;
    Ok(compute(addr, prefix, policy))
}
