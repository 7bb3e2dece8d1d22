use anyhow::Result;
use iconrename_core::{stock_operation, OutputFormat};
use std::path::Path;

pub fn handle_stock(dir: &Path, output: OutputFormat) -> Result<()> {
    let result = match output {
        OutputFormat::Summary => stock_operation(dir, |from, to| {
            println!("Renamed: {from} → {to}");
        })?,
        OutputFormat::Json => stock_operation(dir, |_, _| {})?,
    };

    if output == OutputFormat::Json {
        println!("{}", serde_json::to_string(&result)?);
    }

    Ok(())
}
