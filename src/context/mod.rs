use crate::ux;
use crate::wire::ThemeFileSet;
use fs_err as fs;
use std::path::Path;
use walkdir::WalkDir;

pub const TRUNCATION_MARKER: &str = "\n... [truncated]";

/// Walk `root` in lexical tree order and collect every file whose extension is
/// in `extensions` (case-insensitive, with leading dot). Unreadable files are
/// reported and left out of the set.
pub fn read_theme(root: &Path, extensions: &[String], max_chars: usize) -> ThemeFileSet {
    let mut out = ThemeFileSet::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                ux::warn(&format!("Could not walk {}: {}", root.display(), e));
                tracing::warn!(error = %e, "theme walk error");
                continue;
            }
        };
        if !entry.file_type().is_file() || !has_allowed_extension(entry.path(), extensions) {
            continue;
        }
        let Some(rel) = relative_key(root, entry.path()) else { continue };
        match fs::read_to_string(entry.path()) {
            Ok(content) => {
                out.insert(rel, truncate(content, max_chars));
            }
            Err(e) => {
                ux::warn(&format!("Could not read {rel}: {e}"));
                tracing::warn!(path = %rel, error = %e, "skipping unreadable theme file");
            }
        }
    }
    tracing::debug!(files = out.len(), root = %root.display(), "theme scan complete");
    out
}

fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension() else { return false };
    let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
    extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&ext))
}

/// Forward-slash path of `path` relative to `root`.
fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.is_empty() { None } else { Some(parts.join("/")) }
}

/// Keep the first `max_chars` characters and append the marker when longer.
pub fn truncate(content: String, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut s = content[..cut].to_string();
            s.push_str(TRUNCATION_MARKER);
            s
        }
        None => content,
    }
}
