use std::fmt;

/// A two-character memory location identifier: bank digit then slot digit.
///
/// Construction accepts any string; malformed identifiers are only rejected
/// when [`Address::decode`] is called.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    value: String,
}

impl Address {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_owned(),
        }
    }

    /// Splits the identifier into its bank key and zero-based slot index.
    ///
    /// The bank key is the first character followed by a literal `0`, the
    /// row key used by the grid. The slot is the decimal value of the second
    /// character.
    pub fn decode(&self) -> Result<(Address, usize), DecodeError> {
        let mut chars = self.value.chars();
        let (bank_digit, slot_digit) = match (chars.next(), chars.next(), chars.next()) {
            (Some(bank), Some(slot), None) => (bank, slot),
            _ => {
                return Err(DecodeError::WrongLength {
                    identifier: self.value.clone(),
                })
            }
        };

        let slot = slot_digit
            .to_digit(10)
            .ok_or_else(|| DecodeError::SlotNotADigit {
                identifier: self.value.clone(),
            })?;

        Ok((Address::new(&format!("{bank_digit}0")), slot as usize))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeError {
    WrongLength { identifier: String },
    SlotNotADigit { identifier: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::WrongLength { identifier } => write!(
                f,
                "address {:?} must be exactly two characters",
                identifier
            ),
            DecodeError::SlotNotADigit { identifier } => write!(
                f,
                "address {:?} slot character is not a decimal digit",
                identifier
            ),
        }
    }
}

impl std::error::Error for DecodeError {}
