//! Salted MD5 digest of the MAC address and its nibble decoding.

use md5::{Digest, Md5};

use crate::mac::MacAddress;

/// Salt appended to the MAC bytes before hashing
pub const SALT: &[u8] = b"AEJLY";

/// Nibbles feeding the base fill
pub const BASE_NIBBLES: usize = 16;
/// Nibbles feeding the representative characters
pub const REPRESENTATIVE_NIBBLES: usize = 4;

/// The first 20 hex digits of the digest, decoded to 0..=15
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nibbles {
    pub base: [u8; BASE_NIBBLES],
    pub representatives: [u8; REPRESENTATIVE_NIBBLES],
}

impl Nibbles {
    /// Decode from a hex string; needs at least 20 characters, extra are ignored.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.as_bytes();
        if digits.len() < BASE_NIBBLES + REPRESENTATIVE_NIBBLES {
            return None;
        }

        let mut nibbles = Self::default();
        for (value, digit) in nibbles.base.iter_mut().zip(digits) {
            *value = hex_value(*digit);
        }
        for (value, digit) in nibbles
            .representatives
            .iter_mut()
            .zip(&digits[BASE_NIBBLES..])
        {
            *value = hex_value(*digit);
        }
        Some(nibbles)
    }

    /// All 20 values in digest order
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.base.iter().chain(self.representatives.iter()).copied()
    }
}

/// Lowercase hex MD5 of the MAC string followed by the salt
pub fn hex_digest(mac: &MacAddress) -> String {
    let mut hasher = Md5::new();
    hasher.update(mac.as_str().as_bytes());
    hasher.update(SALT);
    format!("{:x}", hasher.finalize())
}

/// Nibble values of the salted digest of `mac`
pub fn nibbles(mac: &MacAddress) -> Nibbles {
    let hex = hex_digest(mac);
    // An MD5 hex digest is always 32 characters.
    Nibbles::from_hex(&hex).unwrap_or_default()
}

/// Value of one hex digit; anything else decodes to 0
fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mac(s: &str) -> MacAddress {
        MacAddress::parse(s).unwrap()
    }

    #[test]
    fn test_hex_digest_known_vector() {
        // md5("00:11:22:33:44:55AEJLY")
        assert_eq!(
            hex_digest(&mac("00:11:22:33:44:55")),
            "1a91d66d729cd9b09a9239a224323b02"
        );
    }

    #[test]
    fn test_hex_digest_hashes_exact_bytes() {
        assert_eq!(
            hex_digest(&mac("AA:BB:CC:DD:EE:FF")),
            "c42da28873a3db0bf77b6ea002d63094"
        );
        assert_eq!(
            hex_digest(&mac("aa:bb:cc:dd:ee:ff")),
            "aaa04699efb0f5dbb5e905bc8cabb476"
        );
    }

    #[test]
    fn test_nibbles_known_vector() {
        let nibbles = nibbles(&mac("00:11:22:33:44:55"));
        assert_eq!(
            nibbles.base,
            [1, 10, 9, 1, 13, 6, 6, 13, 7, 2, 9, 12, 13, 9, 11, 0]
        );
        assert_eq!(nibbles.representatives, [9, 10, 9, 2]);
        assert_eq!(nibbles.values().count(), 20);
        assert!(nibbles.values().all(|v| v < 16));
    }

    #[test]
    fn test_nibbles_from_hex_accepts_both_cases() {
        let lower = Nibbles::from_hex("0123456789abcdefABCD").unwrap();
        let upper = Nibbles::from_hex("0123456789ABCDEFabcd").unwrap();
        assert_eq!(lower, upper);
        assert_eq!(
            lower.values().collect::<Vec<_>>(),
            (0..16).chain(10..14).collect::<Vec<u8>>()
        );
    }

    #[test]
    fn test_nibbles_from_hex_too_short() {
        assert!(Nibbles::from_hex("0123456789abcdef012").is_none());
    }

    #[test]
    fn test_hex_value_fallback() {
        assert_eq!(hex_value(b'g'), 0);
        assert_eq!(hex_value(b'F'), 15);
    }
}
