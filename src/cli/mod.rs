use clap::Parser;

/// Positional order mirrors the CI action that invokes the tool.
#[derive(Parser, Debug)]
#[command(name = "bolt_theme_injector", version, about = "Inject Bolt checkout snippets into a BigCommerce theme using an LLM")]
pub struct Args {
    /// Theme root to read; a minimal scaffold is created when missing.
    pub theme_dir: String,

    /// Destination for the modified copy (replaced if it exists).
    pub output_dir: String,

    pub publishable_key: String,

    /// `production` or `sandbox`.
    #[arg(default_value = "production")]
    pub environment: String,

    #[arg(default_value = "")]
    pub theme_name: String,

    #[arg(default_value = "")]
    pub route_token: String,

    #[arg(env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub summary_path: Option<String>,

    #[arg(long)]
    pub debug_response_path: Option<String>,

    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}
