use std::fmt;

use crc::{Crc, CRC_32_ISO_HDLC};

use crate::{
    address::{Address, DecodeError},
    cell::{Cell, Instruction},
};

const FIELD_WIDTH: usize = 10;
const LABEL_WIDTH: usize = 2;

/// The machine's memory: a square grid of cells, one row per bank.
///
/// Banks are keyed by two-character addresses of the form `{i}0` and hold as
/// many cells as there are banks. A fresh grid is uninitialized; every access
/// before [`Memory::initialize`] fails with an unknown-bank error.
pub struct Memory {
    banks: Vec<(Address, Vec<Cell>)>,
}

impl Memory {
    pub fn new() -> Self {
        Self { banks: vec![] }
    }

    /// Replaces the whole grid with `n` banks of `n` zero-instruction cells.
    pub fn initialize(&mut self, n: usize) -> Result<(), MemoryError> {
        if n == 0 {
            return Err(MemoryError::InvalidSize { given: n });
        }

        if !self.banks.is_empty() {
            warn!(
                "Reinitializing discards the current {}-bank grid.",
                self.banks.len()
            );
        }

        self.banks = (0..n)
            .map(|i| {
                let row = vec![Cell::Instruction(Instruction::zero()); n];
                (Address::new(&format!("{i}0")), row)
            })
            .collect();

        info!("Memory initialized: {} banks of {} cells.", n, n);

        Ok(())
    }

    fn locate(&self, address: &Address) -> Result<(usize, usize), MemoryError> {
        let (bank, slot) = address.decode()?;

        let row_index = self
            .banks
            .iter()
            .position(|(key, _)| *key == bank)
            .ok_or_else(|| MemoryError::UnknownBank {
                address: address.clone(),
                bank,
            })?;

        let len = self.banks[row_index].1.len();
        if slot >= len {
            return Err(MemoryError::SlotOutOfRange {
                address: address.clone(),
                slot,
                len,
            });
        }

        Ok((row_index, slot))
    }

    /// Overwrites the addressed cell with a data value. The previous cell is
    /// discarded whatever its variant; nothing is mutated on error.
    pub fn store(&mut self, address: &Address, data: &str) -> Result<(), MemoryError> {
        let (row, slot) = self.locate(address)?;
        self.banks[row].1[slot] = Cell::Data(data.to_owned());
        Ok(())
    }

    /// Returns the addressed cell without touching it.
    ///
    /// Bounds are validated exactly as in [`Memory::store`], then the cell is
    /// rejected if it holds empty data.
    pub fn read(&self, address: &Address) -> Result<&Cell, MemoryError> {
        let (row, slot) = self.locate(address)?;

        let cell = &self.banks[row].1[slot];
        if cell.is_empty() {
            return Err(MemoryError::EmptyCell {
                address: address.clone(),
            });
        }

        Ok(cell)
    }

    /// Renders the grid for inspection: a header of column indices, then one
    /// row per bank with each cell right-aligned in a fixed-width field.
    pub fn dump(&self) -> String {
        let mut out = String::new();

        for index in 0..self.banks.len() {
            out.push_str(&format!("{index:>FIELD_WIDTH$} "));
        }
        out.push('\n');

        for (key, row) in &self.banks {
            out.push_str(&format!("{:>LABEL_WIDTH$} ", key.to_string()));
            for cell in row {
                out.push_str(&format!("{:>FIELD_WIDTH$} ", cell.render()));
            }
            out.push('\n');
        }

        out
    }

    /// CRC-32 of the rendered grid, to tell at a glance whether two
    /// inspection points saw the same contents.
    pub fn checksum(&self) -> u32 {
        const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);
        CRC32.checksum(self.dump().as_bytes())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryError {
    Decode(DecodeError),
    InvalidSize { given: usize },
    UnknownBank { address: Address, bank: Address },
    SlotOutOfRange { address: Address, slot: usize, len: usize },
    EmptyCell { address: Address },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::Decode(err) => write!(f, "{err}"),
            MemoryError::InvalidSize { given } => {
                write!(f, "memory size must be at least 1, got {given}")
            }
            MemoryError::UnknownBank { address, bank } => {
                write!(f, "address {address}: bank {bank} is not in the grid")
            }
            MemoryError::SlotOutOfRange { address, slot, len } => {
                write!(
                    f,
                    "address {address}: slot {slot} is outside the bank's {len} cells"
                )
            }
            MemoryError::EmptyCell { address } => {
                write!(f, "address {address}: cell is empty")
            }
        }
    }
}

impl std::error::Error for MemoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MemoryError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DecodeError> for MemoryError {
    fn from(err: DecodeError) -> Self {
        MemoryError::Decode(err)
    }
}
