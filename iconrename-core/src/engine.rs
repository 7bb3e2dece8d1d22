use crate::output::RenamedEntry;
use crate::rule::RenameRule;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal failures of a scan-and-rename run. Every variant aborts the run;
/// renames already performed stay in place.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to list directory {dir}: {source}")]
    ListDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("refusing to rename {from:?} to {to:?}: destination already exists")]
    DestinationExists { from: String, to: String },

    #[error("failed to rename {from:?} to {to:?}: {source}")]
    Rename {
        from: String,
        to: String,
        #[source]
        source: io::Error,
    },
}

/// What a single run did: the renames in the order they were applied, plus a
/// count of entries skipped because the rule didn't fire or the computed name
/// equalled the old one.
#[derive(Debug, Default)]
pub struct RunReport {
    pub renamed: Vec<RenamedEntry>,
    pub skipped: usize,
}

/// Applies `rule` to every immediate entry of `dir` and renames the matches
/// in place. Files and subdirectories are treated alike; the walk is not
/// recursive.
///
/// The listing is snapshotted before the first rename, so renames performed
/// mid-run never change which entries are visited. `on_rename` fires after
/// each successful rename, which is what lets callers report incrementally
/// rather than only after the run completes.
pub fn scan_and_rename<F>(
    dir: &Path,
    rule: &dyn RenameRule,
    mut on_rename: F,
) -> Result<RunReport, EngineError>
where
    F: FnMut(&str, &str),
{
    let entries = list_entries(dir)?;
    let mut report = RunReport::default();

    for name in entries {
        let Some(new_name) = rule.apply(&name) else {
            report.skipped += 1;
            continue;
        };

        // No-op guard: an already-normalized name costs no filesystem call
        // and no log line.
        if new_name == name {
            report.skipped += 1;
            continue;
        }

        let from = dir.join(&name);
        let to = dir.join(&new_name);

        // Fail loudly instead of letting fs::rename overwrite whatever is
        // already at the destination. symlink_metadata also sees dangling
        // symlinks, which Path::exists would miss.
        if to.symlink_metadata().is_ok() {
            return Err(EngineError::DestinationExists {
                from: name,
                to: new_name,
            });
        }

        fs::rename(&from, &to).map_err(|source| EngineError::Rename {
            from: name.clone(),
            to: new_name.clone(),
            source,
        })?;

        on_rename(&name, &new_name);
        report.renamed.push(RenamedEntry {
            from: name,
            to: new_name,
        });
    }

    Ok(report)
}

/// Snapshots the immediate entry names of `dir`, in whatever order the OS
/// hands them back. Entries with non-UTF-8 names can't match either rule and
/// are dropped like any other non-match.
fn list_entries(dir: &Path) -> Result<Vec<String>, EngineError> {
    let read_dir = fs::read_dir(dir).map_err(|source| EngineError::ListDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| EngineError::ListDir {
            dir: dir.to_path_buf(),
            source,
        })?;
        if let Ok(name) = entry.file_name().into_string() {
            names.push(name);
        }
    }
    Ok(names)
}
