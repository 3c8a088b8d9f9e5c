use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

const MAC_STR_LEN: usize = 17;

/// A MAC address string validated as XX:XX:XX:XX:XX:XX (hex, any case).
///
/// The original text is kept as-is because the password hash covers those
/// exact bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(String);

impl MacAddress {
    /// Parse a MAC address from a string (XX:XX:XX:XX:XX:XX)
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        let bytes = s.as_bytes();
        if bytes.len() != MAC_STR_LEN {
            return Err(FormatError::new(s));
        }

        let well_formed = bytes.iter().enumerate().all(|(i, b)| {
            if i % 3 == 2 {
                *b == b':'
            } else {
                b.is_ascii_hexdigit()
            }
        });
        if !well_formed {
            return Err(FormatError::new(s));
        }

        Ok(Self(s.to_string()))
    }

    /// The address exactly as it was given
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Same address with upper-case hex digits
    pub fn to_uppercase(&self) -> Self {
        Self(self.0.to_ascii_uppercase())
    }

    /// Decode the six octets
    pub fn octets(&self) -> [u8; 6] {
        let mut octets = [0u8; 6];
        for (octet, part) in octets.iter_mut().zip(self.0.split(':')) {
            // Every group is two hex digits once parsed.
            *octet = u8::from_str_radix(part, 16).unwrap_or_default();
        }
        octets
    }
}

impl FromStr for MacAddress {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
