use std::fmt;

pub const ZERO_CODE: &str = "0000";

const INSTRUCTION_WIDTH: usize = 4;

/// A fixed-format 4-digit operation code. Not interpreted here, only stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    value: String,
}

impl Instruction {
    pub fn new(value: &str) -> Result<Self, FormatError> {
        if value.len() != INSTRUCTION_WIDTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(FormatError {
                value: value.to_owned(),
            });
        }
        Ok(Self {
            value: value.to_owned(),
        })
    }

    pub fn zero() -> Self {
        Self {
            value: ZERO_CODE.to_owned(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatError {
    pub value: String,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "instruction {:?} must be exactly 4 decimal digits",
            self.value
        )
    }
}

impl std::error::Error for FormatError {}

/// Contents of one grid slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Instruction(Instruction),
    Data(String),
}

impl Cell {
    /// Listing form: instructions get a `+` marker, data is bare.
    pub fn render(&self) -> String {
        match self {
            Cell::Instruction(instr) => format!("+{instr}"),
            Cell::Data(data) => data.clone(),
        }
    }

    /// A cell is empty only when it holds data with no content. Instructions,
    /// including the zero code, always count as occupied.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Instruction(_) => false,
            Cell::Data(data) => data.is_empty(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Instruction(instr) => write!(f, "{instr}"),
            Cell::Data(data) => write!(f, "{data}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_accepts_four_digits() {
        assert_eq!(Instruction::new("0000").unwrap(), Instruction::zero());
        assert!(Instruction::new("1099").is_ok());
    }

    #[test]
    fn test_instruction_rejects_bad_shapes() {
        for bad in ["", "123", "12345", "12a4", "-123", "1 23"] {
            assert_eq!(
                Instruction::new(bad),
                Err(FormatError {
                    value: bad.to_owned()
                })
            );
        }
    }

    #[test]
    fn test_render_marks_instructions() {
        assert_eq!(Cell::Instruction(Instruction::zero()).render(), "+0000");
        assert_eq!(Cell::Data("hello".to_owned()).render(), "hello");
    }

    #[test]
    fn test_display_is_bare_value() {
        assert_eq!(Cell::Instruction(Instruction::zero()).to_string(), "0000");
        assert_eq!(Cell::Data("world".to_owned()).to_string(), "world");
    }

    #[test]
    fn test_emptiness_is_over_data_content_only() {
        assert!(!Cell::Instruction(Instruction::zero()).is_empty());
        assert!(!Cell::Data("x".to_owned()).is_empty());
        assert!(Cell::Data(String::new()).is_empty());
    }
}
