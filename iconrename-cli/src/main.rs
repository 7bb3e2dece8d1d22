use clap::Parser;
use std::process;

mod cli;
mod sf6;
mod stock;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let output = cli.output.into();

    let result = match cli.command {
        Commands::Sf6 { dir } => sf6::handle_sf6(&dir, output),
        Commands::Stock { dir } => stock::handle_stock(&dir, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
