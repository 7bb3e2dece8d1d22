#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod engine;
pub mod operations;
pub mod output;
pub mod rule;

pub use engine::{scan_and_rename, EngineError, RunReport};
pub use operations::{sf6_operation, stock_operation};
pub use output::{OutputFormat, RenameRunResult, RenamedEntry};
pub use rule::{RenameRule, Sf6IconRule, TrailingOneRule};
