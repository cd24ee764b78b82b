use crate::{
    address::Address,
    cell::Cell,
    config::Config,
    logger,
    memory::{Memory, MemoryError},
};

/// The assembled machine: one owned memory grid behind the reference
/// machine's access surface. Addresses are taken as their two-character
/// textual identifiers.
pub struct Simpletron {
    memory: Memory,
}

impl Simpletron {
    pub fn new(cfg: &Config) -> Result<Self, MemoryError> {
        logger::init_logger(cfg.log_file_path.clone());

        let mut memory = Memory::new();
        memory.initialize(cfg.size)?;

        Ok(Self { memory })
    }

    pub fn store(&mut self, identifier: &str, data: &str) -> Result<(), MemoryError> {
        self.memory.store(&Address::new(identifier), data)
    }

    pub fn read(&self, identifier: &str) -> Result<&Cell, MemoryError> {
        self.memory.read(&Address::new(identifier))
    }

    pub fn dump(&self) -> String {
        self.memory.dump()
    }

    /// Prints the grid to stdout, for interactive inspection.
    pub fn print_dump(&self) {
        print!("{}", self.dump());
    }

    pub fn checksum(&self) -> u32 {
        self.memory.checksum()
    }
}
