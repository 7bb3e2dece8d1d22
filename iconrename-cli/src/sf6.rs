use anyhow::Result;
use iconrename_core::{sf6_operation, OutputFormat};
use std::path::Path;

pub fn handle_sf6(dir: &Path, output: OutputFormat) -> Result<()> {
    let result = match output {
        OutputFormat::Summary => sf6_operation(dir, |from, to| {
            println!("Renamed: {from} → {to}");
        })?,
        OutputFormat::Json => sf6_operation(dir, |_, _| {})?,
    };

    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string(&result)?);
    }

    Ok(())
}
