/*
[INPUT]:  Public API exports for the column-cli crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod commands;
pub mod config;
pub mod signal;

pub use commands::{Command, execute};
pub use config::CliConfig;
