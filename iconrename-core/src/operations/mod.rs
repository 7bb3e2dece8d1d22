//! High-level operations that correspond to CLI commands
//!
//! These contain the business logic for each iconrename command, separated
//! from CLI concerns like argument parsing and output formatting.

pub mod sf6;
pub mod stock;

pub use sf6::sf6_operation;
pub use stock::stock_operation;
