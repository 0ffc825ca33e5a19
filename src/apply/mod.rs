use crate::safety;
use crate::ux;
use crate::wire::{ApplyResult, ModificationSet};
use anyhow::Result;
use fs_err as fs;
use std::path::Path;

/// Write every modification under `root`, in mapping order. A failing path is
/// reported and skipped; the result lists only the paths that were written.
pub fn apply(modifications: &ModificationSet, root: &Path) -> ApplyResult {
    let mut applied = ApplyResult::with_capacity(modifications.len());

    for (path, content) in modifications {
        ux::step(&format!("Applying AI modifications to {path}..."));
        match write_one(root, path, content) {
            Ok(bytes) => {
                tracing::debug!(path = %path, bytes, "file written");
                ux::ok(&format!("Modified {path}"));
                applied.push(path.clone());
            }
            Err(e) => {
                tracing::error!(path = %path, error = %e, "failed to write modification");
                ux::fail(&format!("Error modifying {path}: {e:#}"));
            }
        }
    }

    applied
}

/// Truncate and rewrite in place: an existing file keeps its mode and a
/// symlinked template keeps pointing at its target.
fn write_one(root: &Path, rel: &str, content: &str) -> Result<usize> {
    let abs = safety::resolve_within(root, rel)?;
    if let Some(parent) = abs.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&abs, content)?;
    Ok(content.len())
}
