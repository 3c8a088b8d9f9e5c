//! Character classes the password is drawn from.
//!
//! Visually ambiguous characters (I, O, 0, 1, l, ...) are left out of every
//! table.

pub const UPPER: &[u8; 17] = b"ACDFGHJMNPRSTUWXY";
pub const LOWER: &[u8; 17] = b"abcdfghjkmpstuwxy";
pub const DIGIT: &[u8; 7] = b"2345679";
pub const SYMBOL: &[u8; 5] = b"!@$&%";

/// One of the four character classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Symbol,
}

impl CharClass {
    /// Order in which representatives are placed into the password
    pub const REPRESENTATIVE_ORDER: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Class picked by a base nibble (`v mod 4`)
    pub fn from_selector(v: u8) -> Self {
        match v % 4 {
            0 => Self::Upper,
            1 => Self::Lower,
            2 => Self::Digit,
            _ => Self::Symbol,
        }
    }

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            Self::Upper => UPPER,
            Self::Lower => LOWER,
            Self::Digit => DIGIT,
            Self::Symbol => SYMBOL,
        }
    }

    /// Character of this class selected by nibble `v`.
    ///
    /// Digits and symbols index from the end of their table. All operands
    /// are nibbles (0..=15) so none of the subtractions can underflow.
    pub fn pick(self, v: u8) -> u8 {
        let v = usize::from(v & 0x0F);
        let index = match self {
            Self::Upper => (v * 2) % UPPER.len(),
            Self::Lower => (v * 2 + 1) % LOWER.len(),
            Self::Digit => DIGIT.len() - 1 - v % DIGIT.len(),
            Self::Symbol => SYMBOL.len() - 1 - v % SYMBOL.len(),
        };
        self.alphabet()[index]
    }

    /// Class containing `c`, if any
    pub fn of(c: char) -> Option<Self> {
        let byte = u8::try_from(c).ok()?;
        Self::REPRESENTATIVE_ORDER
            .into_iter()
            .find(|class| class.alphabet().contains(&byte))
    }
}
