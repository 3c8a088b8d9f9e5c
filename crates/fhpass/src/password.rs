//! Password assembly: base fill, representative placement and overwrite.

use std::fmt;

use crate::charset::CharClass;
use crate::digest::{BASE_NIBBLES, REPRESENTATIVE_NIBBLES};

pub const PASSWORD_LEN: usize = 16;

/// A derived admin password, 16 ASCII characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Password([u8; PASSWORD_LEN]);

impl Password {
    pub fn as_str(&self) -> &str {
        // Every slot is filled from the ASCII tables in `charset`.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_string(self) -> String {
        self.as_str().to_string()
    }

    /// Force one representative per class into `positions`.
    ///
    /// Slots are overwritten unconditionally, in class order.
    pub fn overwrite(
        &mut self,
        positions: &[usize; REPRESENTATIVE_NIBBLES],
        representatives: &[u8; REPRESENTATIVE_NIBBLES],
    ) {
        for ((class, &pos), &v) in CharClass::REPRESENTATIVE_ORDER
            .iter()
            .zip(positions)
            .zip(representatives)
        {
            self.0[pos % PASSWORD_LEN] = class.pick(v);
        }
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.into_string()
    }
}

/// Fill every slot from its own nibble: `v mod 4` picks the class, `v` the
/// character inside it.
pub fn base_fill(nibbles: &[u8; BASE_NIBBLES]) -> Password {
    let mut slots = [0u8; PASSWORD_LEN];
    for (slot, &v) in slots.iter_mut().zip(nibbles) {
        *slot = CharClass::from_selector(v).pick(v);
    }
    Password(slots)
}

/// Slots receiving the UPPER, LOWER, DIGIT and SYMBOL representatives.
///
/// Each candidate starts at `(v + 1) mod 16` and probes forward, wrapping,
/// past slots taken by earlier candidates only.
pub fn representative_positions(
    nibbles: &[u8; REPRESENTATIVE_NIBBLES],
) -> [usize; REPRESENTATIVE_NIBBLES] {
    let mut positions = [0usize; REPRESENTATIVE_NIBBLES];
    for (k, &v) in nibbles.iter().enumerate() {
        let mut pos = (usize::from(v) + 1) % PASSWORD_LEN;
        while positions[..k].contains(&pos) {
            pos = (pos + 1) % PASSWORD_LEN;
        }
        positions[k] = pos;
    }
    positions
}
