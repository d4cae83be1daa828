//! CIDR prefix length and the subnet mask derived from it.

use super::ipv4::{is_decimal, Ipv4Address, MAX_LENGTH};
use crate::error::ValidationFailure;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of leading network bits, always within `0..=32`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// Validate an integer prefix.
    ///
    /// # Examples
    /// ```
    /// use subnet_calc::models::PrefixLength;
    /// assert_eq!(PrefixLength::new(24).unwrap().get(), 24);
    /// assert!(PrefixLength::new(33).is_err());
    /// ```
    pub fn new(len: u32) -> Result<PrefixLength, ValidationFailure> {
        if len > u32::from(MAX_LENGTH) {
            Err(ValidationFailure::InvalidPrefixLength {
                input: len.to_string(),
            })
        } else {
            Ok(PrefixLength(len as u8))
        }
    }

    /// Parse a prefix from text. A single leading `/` is accepted (`"/24"`).
    pub fn parse(text: &str) -> Result<PrefixLength, ValidationFailure> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let invalid = || ValidationFailure::InvalidPrefixLength {
            input: trimmed.to_string(),
        };
        if !is_decimal(digits) {
            return Err(invalid());
        }
        let len: u32 = digits.parse().map_err(|_| invalid())?;
        PrefixLength::new(len).map_err(|_| invalid())
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Number of host bits, `32 - prefix`.
    pub const fn host_bits(self) -> u8 {
        MAX_LENGTH - self.0
    }

    /// The mask with the top `prefix` bits set.
    pub fn mask(self) -> SubnetMask {
        SubnetMask::from_prefix(self)
    }

    /// Total addresses covered, `2^(32 - prefix)`. Needs 64 bits for `/0`.
    pub fn total_addresses(self) -> u64 {
        1u64 << self.host_bits()
    }
}

impl FromStr for PrefixLength {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrefixLength::parse(s)
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for PrefixLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Contiguous run of 1-bits followed by 0-bits.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct SubnetMask(u32);

impl SubnetMask {
    /// Build the mask for a prefix.
    ///
    /// `/0` and `/32` are handled explicitly; shifting a `u32` by 32 is not
    /// something to rely on.
    pub fn from_prefix(prefix: PrefixLength) -> SubnetMask {
        let bits = match prefix.get() {
            0 => 0,
            MAX_LENGTH => u32::MAX,
            len => u32::MAX << (MAX_LENGTH - len),
        };
        SubnetMask(bits)
    }

    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Host bits set, network bits clear (`NOT mask`).
    pub const fn wildcard(self) -> u32 {
        !self.0
    }

    /// Recover the prefix from the mask, i.e. its count of leading ones.
    pub fn prefix_len(self) -> u8 {
        self.0.leading_ones() as u8
    }

    pub fn to_address(self) -> Ipv4Address {
        Ipv4Address::from_bits(self.0)
    }
}

impl fmt::Display for SubnetMask {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_address())
    }
}

impl Serialize for SubnetMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
