//! Classful address designation.

use super::Ipv4Address;
use serde::{Serialize, Serializer};
use std::fmt;

/// Legacy A/B/C/D/E class, taken from the first octet only.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    /// Multicast.
    D,
    /// Experimental / reserved.
    E,
}

impl AddressClass {
    pub fn of(addr: Ipv4Address) -> AddressClass {
        match addr.first_octet() {
            0..=127 => AddressClass::A,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            240..=255 => AddressClass::E,
        }
    }

    pub fn letter(self) -> char {
        match self {
            AddressClass::A => 'A',
            AddressClass::B => 'B',
            AddressClass::C => 'C',
            AddressClass::D => 'D',
            AddressClass::E => 'E',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AddressClass::A | AddressClass::B | AddressClass::C => "unicast",
            AddressClass::D => "multicast",
            AddressClass::E => "experimental",
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Serialize for AddressClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.letter())
    }
}
