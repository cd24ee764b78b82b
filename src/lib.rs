#[macro_use]
pub mod logger;

pub mod address;
pub mod cell;
pub mod config;
pub mod memory;
pub mod simpletron;
