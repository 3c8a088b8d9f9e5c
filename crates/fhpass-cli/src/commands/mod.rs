pub mod derive;
pub mod interactive;

use crate::config::Config;
use fhpass::{FormatError, MacAddress, Password};
use tracing::debug;

/// One derivation attempt: the address as hashed, and its outcome
pub struct Derivation {
    pub mac: String,
    pub result: Result<Password, FormatError>,
}

/// Normalize `input` according to `config` and derive its password
pub fn derive_entry(config: &Config, input: &str) -> Derivation {
    let mac = if config.uppercase_input {
        input.to_ascii_uppercase()
    } else {
        input.to_string()
    };

    let result = MacAddress::parse(&mac).map(|parsed| {
        debug!(
            "Digest for {}: {}",
            parsed,
            fhpass::digest::hex_digest(&parsed)
        );
        fhpass::derive_mac(&parsed)
    });

    Derivation { mac, result }
}
