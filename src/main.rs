use chrono::Utc;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use uuid::Uuid;

mod apply;
mod cli;
mod config;
mod context;
mod errors;
mod log;
mod parse;
mod pipeline;
mod prompt;
mod provider;
mod safety;
mod scaffold;
mod ux;
mod wire;
mod workspace;

use errors::InjectorError;
use wire::{Environment, IntegrationConfig, RunSummary};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Secrets may live in a local .env; only this bootstrap layer reads them.
    let _ = dotenvy::dotenv();
    let args = cli::Args::parse();
    log::init_tracing(&args.log_level);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "integration aborted");
            ux::fail(&format!("Error during integration: {e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn require(value: Option<&str>, name: &str) -> Result<String, InjectorError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(InjectorError::Config(format!("{name} is required but not provided"))),
    }
}

async fn run(args: cli::Args) -> anyhow::Result<()> {
    ux::step("Starting Bolt BigCommerce theme integration...");
    ux::item(&format!("Theme directory: {}", args.theme_dir));
    ux::item(&format!("Output directory: {}", args.output_dir));
    ux::item(&format!("Environment: {}", args.environment));

    let publishable_key = require(Some(args.publishable_key.as_str()), "publishable_key")?;
    let api_key = require(args.openai_api_key.as_deref(), "openai_api_key")?;

    let mut cfg = config::Config::load(args.config.as_deref().map(Path::new))?;
    if let Some(model) = &args.model {
        cfg.model = model.clone();
    }
    if let Some(p) = &args.summary_path {
        cfg.summary_path = p.clone();
    }
    if let Some(p) = &args.debug_response_path {
        cfg.debug_response_path = p.clone();
    }

    if !matches!(args.environment.as_str(), "" | "production" | "sandbox") {
        ux::warn(&format!("Unknown environment '{}', using production", args.environment));
    }
    let mut integration = IntegrationConfig::new(publishable_key, Environment::from_arg(&args.environment));
    integration.route_token = Some(args.route_token.clone()).filter(|t| !t.is_empty());
    integration.response_format = cfg.response_format;

    let model = provider::openai::OpenAiCompletion::new(api_key, &cfg)?;
    let run_id = Uuid::new_v4();
    tracing::info!(
        %run_id,
        model = %cfg.model,
        environment = integration.environment.as_str(),
        route_token = integration.route_token.is_some(),
        "run started"
    );

    let plan = pipeline::RunPlan {
        theme_dir: Path::new(&args.theme_dir),
        output_dir: Path::new(&args.output_dir),
        integration: &integration,
        config: &cfg,
        progress: !args.no_progress,
    };
    let modifications = pipeline::process_theme_directory(&plan, &model).await?;
    ux::print_modified(&modifications);

    let summary = RunSummary {
        success: true,
        theme_name: args.theme_name.clone(),
        environment: args.environment.clone(),
        modifications,
        output_directory: args.output_dir.clone(),
        run_id,
        generated_at: Utc::now(),
    };
    let summary_path = PathBuf::from(&cfg.summary_path);
    log::save_summary(&summary_path, &summary)?;
    ux::ok(&format!("Integration summary saved to {}", summary_path.display()));
    ux::ok("Bolt integration completed successfully!");
    Ok(())
}
