//! Fiberhome HG6145F1 admin password derivation
//!
//! The router's factory admin password is a pure function of its MAC address:
//! the address is hashed with a fixed salt, the first 20 hex digits of the MD5
//! digest are turned into a 16-character password, and one character of each
//! class is then forced into the result at collision-free positions.
//!
//! This crate has no I/O and no shared mutable state; every call works on
//! locally owned data and read-only tables.

pub mod charset;
pub mod digest;
pub mod error;
pub mod mac;
pub mod password;

pub use charset::CharClass;
pub use digest::Nibbles;
pub use error::FormatError;
pub use mac::MacAddress;
pub use password::{Password, PASSWORD_LEN};

/// Derive the admin password for `mac`.
///
/// The hash covers the exact bytes given, so `aa:..` and `AA:..` produce
/// different passwords. Callers wanting the router's value usually upper-case
/// the address first.
pub fn derive(mac: &str) -> Result<Password, FormatError> {
    let mac = MacAddress::parse(mac)?;
    Ok(derive_mac(&mac))
}

/// Derive the admin password for an already validated address.
pub fn derive_mac(mac: &MacAddress) -> Password {
    let nibbles = digest::nibbles(mac);
    let mut password = password::base_fill(&nibbles.base);
    let positions = password::representative_positions(&nibbles.representatives);
    password.overwrite(&positions, &nibbles.representatives);
    password
}
