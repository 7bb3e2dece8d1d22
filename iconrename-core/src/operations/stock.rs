use crate::engine::scan_and_rename;
use crate::output::RenameRunResult;
use crate::rule::TrailingOneRule;
use anyhow::{Context, Result};
use std::path::Path;

/// Strips a single trailing `1` from filename bases inside `directory` and
/// lowercases the results. Returns structured data; `on_rename` fires once
/// per applied rename.
pub fn stock_operation<F>(directory: &Path, on_rename: F) -> Result<RenameRunResult>
where
    F: FnMut(&str, &str),
{
    let report = scan_and_rename(directory, &TrailingOneRule, on_rename)
        .with_context(|| format!("failed to rename icons in {}", directory.display()))?;

    Ok(RenameRunResult::new(directory, report))
}
