use anyhow::{Context, Result};
use fs_err as fs;
use std::path::Path;
use walkdir::WalkDir;

/// Replace `dest` with a full recursive copy of `src`. Symlinks are followed
/// and their targets copied as regular files.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        fs::remove_dir_all(dest)?;
    }
    fs::create_dir_all(dest)?;

    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", src.display()))?;
        let rel = entry.path().strip_prefix(src)?;
        if rel.as_os_str().is_empty() {
            continue;
        }
        let target = dest.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    tracing::debug!(src = %src.display(), dest = %dest.display(), "theme copied");
    Ok(())
}
