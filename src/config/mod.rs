use anyhow::Context;
use fs_err as fs;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::wire::ResponseFormat;

/// Run settings that are not merchant-specific. Loaded from defaults, then an
/// optional TOML file, then CLI overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub api_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub max_file_chars: usize,
    pub extensions: Vec<String>,
    pub response_format: ResponseFormat,
    pub summary_path: String,
    pub debug_response_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".into(),
            api_url: "https://api.openai.com/v1/chat/completions".into(),
            max_tokens: 16_000,
            temperature: 0.1,
            timeout_secs: 600,
            max_file_chars: 50_000,
            extensions: vec![
                ".html".into(), ".css".into(), ".js".into(), ".json".into(),
                ".scss".into(), ".handlebars".into(), ".hbs".into(),
            ],
            response_format: ResponseFormat::Markers,
            summary_path: "bolt_integration_summary.json".into(),
            debug_response_path: "openai_response_debug.txt".into(),
        }
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_path_yields_defaults() {
        let cfg = Config::load(None).unwrap();
        assert_eq!(cfg.model, "gpt-4o-mini");
        assert_eq!(cfg.max_tokens, 16_000);
        assert_eq!(cfg.max_file_chars, 50_000);
        assert_eq!(cfg.extensions.len(), 7);
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "model = \"gpt-4.1-mini\"\nresponse_format = \"json\"").unwrap();
        let cfg = Config::load(Some(f.path())).unwrap();
        assert_eq!(cfg.model, "gpt-4.1-mini");
        assert_eq!(cfg.response_format, ResponseFormat::Json);
        assert_eq!(cfg.timeout_secs, 600);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "model = [").unwrap();
        assert!(Config::load(Some(f.path())).is_err());
    }
}
