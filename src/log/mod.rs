use crate::wire::RunSummary;
use anyhow::Result;
use fs_err as fs;
use serde_json::to_string_pretty;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Diagnostic events go to stderr; `filter` takes `RUST_LOG`-style directives.
pub fn init_tracing(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn save_summary(path: &Path, summary: &RunSummary) -> Result<()> {
    fs::write(path, to_string_pretty(summary)?)?;
    Ok(())
}

/// Raw model output kept for manual inspection when nothing could be parsed.
pub fn save_debug_response(path: &Path, response: &str) -> Result<()> {
    fs::write(path, response)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn summary_has_expected_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let summary = RunSummary {
            success: true,
            theme_name: "Cornerstone".into(),
            environment: "sandbox".into(),
            modifications: vec!["templates/layout/base.html".into()],
            output_directory: "out".into(),
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
        };
        save_summary(&path, &summary).unwrap();

        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["success"], true);
        assert_eq!(v["theme_name"], "Cornerstone");
        assert_eq!(v["environment"], "sandbox");
        assert_eq!(v["modifications"][0], "templates/layout/base.html");
        assert_eq!(v["output_directory"], "out");
    }

    #[test]
    fn debug_dump_is_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug.txt");
        save_debug_response(&path, "no markers\nhere").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "no markers\nhere");
    }
}
