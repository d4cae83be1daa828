//! IPv4 address codec.
//!
//! Provides [`Ipv4Address`], a 32-bit value type that converts to and from
//! dotted-quad text and renders its binary form.

use crate::error::ValidationFailure;
use itertools::Itertools;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of bits in an IPv4 address.
pub const MAX_LENGTH: u8 = 32;

/// Separator placed between octets in [`Ipv4Address::to_binary_string`].
pub const BINARY_SEPARATOR: char = '.';

/// Plain base-10 digits, no sign and no whitespace.
static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_decimal_regex() -> &'static Regex {
    DECIMAL_REGEX.get_or_init(|| Regex::new(r"^[0-9]+$").expect("Invalid Regex"))
}

/// Whether `text` is a non-empty run of ASCII digits.
pub(crate) fn is_decimal(text: &str) -> bool {
    get_decimal_regex().is_match(text)
}

/// IPv4 address packed into a `u32`, most significant octet first.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Ipv4Address(u32);

impl Ipv4Address {
    /// `0.0.0.0`
    pub const UNSPECIFIED: Ipv4Address = Ipv4Address(0);
    /// `255.255.255.255`
    pub const BROADCAST: Ipv4Address = Ipv4Address(u32::MAX);

    /// Parse dotted-quad text such as `"192.168.1.1"`.
    ///
    /// Surrounding whitespace is ignored. Leading zeros inside an octet are
    /// accepted (`"010"` is 10) and dropped when formatted again.
    ///
    /// # Examples
    /// ```
    /// use subnet_calc::models::Ipv4Address;
    /// let addr = Ipv4Address::parse("10.0.0.5").unwrap();
    /// assert_eq!(addr.to_bits(), 0x0A000005);
    /// assert!(Ipv4Address::parse("300.1.1.1").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Ipv4Address, ValidationFailure> {
        let text = text.trim();
        let segments: Vec<&str> = text.split('.').collect();
        if segments.len() != 4 {
            return Err(ValidationFailure::InvalidAddressFormat {
                input: text.to_string(),
            });
        }

        let mut bits: u32 = 0;
        for segment in segments {
            let octet = parse_octet(segment)?;
            bits = (bits << 8) | u32::from(octet);
        }
        Ok(Ipv4Address(bits))
    }

    /// Build an address from its four octets.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Ipv4Address {
        Ipv4Address(u32::from_be_bytes([a, b, c, d]))
    }

    /// Wrap a raw 32-bit value. Every `u32` is a valid address.
    pub const fn from_bits(bits: u32) -> Ipv4Address {
        Ipv4Address(bits)
    }

    /// The packed 32-bit value.
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// The four octets, most significant first.
    pub fn octets(self) -> [u8; 4] {
        [24u32, 16, 8, 0].map(|shift| ((self.0 >> shift) & 0xFF) as u8)
    }

    /// First (most significant) octet.
    pub fn first_octet(self) -> u8 {
        self.octets()[0]
    }

    /// Render as 4 zero-padded groups of 8 binary digits joined by
    /// [`BINARY_SEPARATOR`], e.g. `11000000.10101000.00000001.00000001`.
    pub fn to_binary_string(self) -> String {
        self.octets()
            .iter()
            .map(|octet| format!("{octet:08b}"))
            .join(&BINARY_SEPARATOR.to_string())
    }
}

fn parse_octet(segment: &str) -> Result<u8, ValidationFailure> {
    let out_of_range = || ValidationFailure::OctetOutOfRange {
        segment: segment.to_string(),
    };
    if !is_decimal(segment) {
        return Err(out_of_range());
    }
    // Digits only, so the only remaining failure is a value above 255.
    segment.parse::<u8>().map_err(|_| out_of_range())
}

impl FromStr for Ipv4Address {
    type Err = ValidationFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Address::parse(s)
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address(u32::from(addr))
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.0)
    }
}

impl From<u32> for Ipv4Address {
    fn from(bits: u32) -> Self {
        Ipv4Address(bits)
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Address::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_packs_octets() {
        let addr = Ipv4Address::parse("192.168.1.1").unwrap();
        assert_eq!(addr.to_bits(), 0xC0A80101);
        assert_eq!(addr, Ipv4Address::new(192, 168, 1, 1));
        assert_eq!(
            Ipv4Address::parse("255.255.255.255").unwrap(),
            Ipv4Address::BROADCAST
        );
        assert_eq!(
            Ipv4Address::parse("0.0.0.0").unwrap(),
            Ipv4Address::UNSPECIFIED
        );
    }

    #[test]
    fn test_parse_trims_and_accepts_leading_zeros() {
        let addr = Ipv4Address::parse("  010.001.000.009 ").unwrap();
        assert_eq!(addr.to_string(), "10.1.0.9");
    }

    #[test]
    fn test_parse_wrong_segment_count() {
        for input in ["", "1.2.3", "1.2.3.4.5", "1234", "a.b.c"] {
            assert!(
                matches!(
                    Ipv4Address::parse(input),
                    Err(ValidationFailure::InvalidAddressFormat { .. })
                ),
                "expected InvalidAddressFormat for '{input}'"
            );
        }
    }

    #[test]
    fn test_parse_bad_octets() {
        for input in [
            "300.1.1.1",
            "1.2.3.256",
            "-1.2.3.4",
            "+1.2.3.4",
            "1.2.x.4",
            "1..3.4",
            "1.2.3. 4",
            "1.2.3.99999999999999999999",
        ] {
            assert!(
                matches!(
                    Ipv4Address::parse(input),
                    Err(ValidationFailure::OctetOutOfRange { .. })
                ),
                "expected OctetOutOfRange for '{input}'"
            );
        }
        assert_eq!(
            Ipv4Address::parse("300.1.1.1").unwrap_err(),
            ValidationFailure::OctetOutOfRange {
                segment: "300".to_string()
            }
        );
    }

    #[test]
    fn test_format_high_bit_addresses() {
        // Top octet must not be sign-extended.
        assert_eq!(Ipv4Address::from_bits(0x80000000).to_string(), "128.0.0.0");
        assert_eq!(Ipv4Address::from_bits(0xFFFFFF00).to_string(), "255.255.255.0");
        assert_eq!(Ipv4Address::from_bits(0xDEADBEEF).to_string(), "222.173.190.239");
    }

    #[test]
    fn test_round_trip() {
        for s in [
            "0.0.0.0",
            "1.2.3.4",
            "10.0.0.5",
            "127.0.0.1",
            "128.0.0.0",
            "172.16.254.3",
            "192.168.1.1",
            "224.0.0.251",
            "255.255.255.255",
        ] {
            assert_eq!(Ipv4Address::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_to_binary_string() {
        let addr = Ipv4Address::new(192, 168, 1, 1);
        assert_eq!(
            addr.to_binary_string(),
            "11000000.10101000.00000001.00000001"
        );
        assert_eq!(
            Ipv4Address::UNSPECIFIED.to_binary_string(),
            "00000000.00000000.00000000.00000000"
        );
    }

    #[test]
    fn test_is_decimal() {
        assert!(is_decimal("0"));
        assert!(is_decimal("0255"));
        for text in ["", "+1", "-1", " 1", "1 ", "1a", "٣"] {
            assert!(!is_decimal(text), "'{text}'");
        }
    }

    #[test]
    fn test_std_conversions() {
        let std_addr = Ipv4Addr::new(10, 1, 2, 3);
        let addr = Ipv4Address::from(std_addr);
        assert_eq!(addr.octets(), [10, 1, 2, 3]);
        assert_eq!(Ipv4Addr::from(addr), std_addr);
    }

    #[test]
    fn test_serde_as_dotted_quad() {
        let addr = Ipv4Address::new(10, 0, 0, 1);
        assert_eq!(serde_json::to_string(&addr).unwrap(), r#""10.0.0.1""#);
        let back: Ipv4Address = serde_json::from_str(r#""10.0.0.1""#).unwrap();
        assert_eq!(back, addr);
        assert!(serde_json::from_str::<Ipv4Address>(r#""10.0.0""#).is_err());
    }

    #[test]
    fn test_ordering_is_numeric() {
        assert!(Ipv4Address::new(9, 255, 255, 255) < Ipv4Address::new(10, 0, 0, 0));
        assert!(Ipv4Address::new(128, 0, 0, 0) > Ipv4Address::new(127, 255, 255, 255));
    }
}
