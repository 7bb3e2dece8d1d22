use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Batch-rename icon asset directories
#[derive(Parser, Debug)]
#[command(name = "iconrename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "summary")]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename `<N>px-SF6_<Name>_Icon.<ext>` wiki exports to `<name>.<ext>`
    Sf6 {
        /// Directory whose immediate entries are renamed (non-recursive)
        #[arg(value_name = "DIR", default_value = "./sf6_icons")]
        dir: PathBuf,
    },

    /// Strip a trailing `1` from filename bases and lowercase the result
    Stock {
        /// Directory whose immediate entries are renamed (non-recursive)
        #[arg(value_name = "DIR", default_value = "./stock_icons")]
        dir: PathBuf,
    },
}
