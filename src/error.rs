//! Validation failures returned by the address codec and subnet calculator.

use thiserror::Error;

/// Reasons an (address, prefix) pair is rejected before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    /// The address does not split into exactly 4 dot-separated segments.
    #[error("Invalid address format: '{input}' (expected 4 dot-separated octets)")]
    InvalidAddressFormat { input: String },

    /// An octet is non-numeric or outside 0-255.
    #[error("Octet out of range: '{segment}' (expected 0-255)")]
    OctetOutOfRange { segment: String },

    /// The prefix is non-numeric or outside 0-32.
    #[error("Invalid prefix length: '{input}' (expected 0-32)")]
    InvalidPrefixLength { input: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = ValidationFailure::OctetOutOfRange {
            segment: "300".to_string(),
        };
        assert_eq!(e.to_string(), "Octet out of range: '300' (expected 0-255)");

        let e = ValidationFailure::InvalidPrefixLength {
            input: "33".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid prefix length: '33' (expected 0-32)");
    }
}
