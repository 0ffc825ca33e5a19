use std::path::{Component, Path, PathBuf};

use crate::errors::InjectorError;

/// Resolve a model-supplied relative path under `root`, refusing anything
/// that could land outside it (absolute paths, `..`, drive prefixes).
pub fn resolve_within(root: &Path, candidate: &str) -> Result<PathBuf, InjectorError> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(InjectorError::UnsafePath("empty path".into()));
    }
    let rel = Path::new(trimmed);
    let mut out = root.to_path_buf();
    for comp in rel.components() {
        match comp {
            Component::Normal(seg) => out.push(seg),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(InjectorError::UnsafePath(candidate.to_string()));
            }
        }
    }
    if out == root {
        return Err(InjectorError::UnsafePath(candidate.to_string()));
    }
    Ok(out)
}
