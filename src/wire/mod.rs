use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// ========================================
/// Theme data flowing between the stages
/// ========================================

/// Relative forward-slash path -> (possibly truncated) file text, in tree order.
pub type ThemeFileSet = IndexMap<String, String>;

/// Relative path -> full replacement content. Re-inserting a path keeps its
/// original position and replaces the value.
pub type ModificationSet = IndexMap<String, String>;

/// Paths actually written, in the order they were processed.
pub type ApplyResult = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Sandbox,
}

impl Environment {
    /// Only the literal `sandbox` selects the sandbox; everything else is production.
    pub fn from_arg(raw: &str) -> Self {
        if raw == "sandbox" {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Sandbox => "sandbox",
        }
    }

    /// Subdomain of bolt.com serving the tracking and connect scripts.
    pub fn subdomain(self) -> &'static str {
        match self {
            Environment::Production => "connect",
            Environment::Sandbox => "connectsandbox",
        }
    }
}

/// Merchant-specific values interpolated into the prompt snippets.
#[derive(Debug, Clone)]
pub struct IntegrationConfig {
    pub publishable_key: String,
    pub environment: Environment,
    pub route_token: Option<String>,
    pub response_format: ResponseFormat,
}

impl IntegrationConfig {
    pub fn new(publishable_key: impl Into<String>, environment: Environment) -> Self {
        Self {
            publishable_key: publishable_key.into(),
            environment,
            route_token: None,
            response_format: ResponseFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// `FILE_PATH:` / `CONTENT:` blocks.
    #[default]
    Markers,
    /// A single `{"files": [...]}` object.
    Json,
}

/// Structured form of the model output, tried before the marker scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOutput {
    pub files: Vec<FileChange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChange {
    pub path: String,
    pub content: String,
}

/// Summary artifact written at the end of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub success: bool,
    pub theme_name: String,
    pub environment: String,
    pub modifications: Vec<String>,
    pub output_directory: String,
    pub run_id: uuid::Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
