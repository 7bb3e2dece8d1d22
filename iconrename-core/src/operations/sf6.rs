use crate::engine::scan_and_rename;
use crate::output::RenameRunResult;
use crate::rule::Sf6IconRule;
use anyhow::{Context, Result};
use std::path::Path;

/// Renames `<digits>px-SF6_<Name>_Icon.<ext>` wiki exports inside `directory`
/// to `<name>.<ext>`, lowercased. Returns structured data; `on_rename` fires
/// once per applied rename so the caller can report incrementally.
pub fn sf6_operation<F>(directory: &Path, on_rename: F) -> Result<RenameRunResult>
where
    F: FnMut(&str, &str),
{
    let rule = Sf6IconRule::new().context("failed to compile the icon filename pattern")?;

    let report = scan_and_rename(directory, &rule, on_rename)
        .with_context(|| format!("failed to rename icons in {}", directory.display()))?;

    Ok(RenameRunResult::new(directory, report))
}
