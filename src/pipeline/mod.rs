use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::provider::Completion;
use crate::wire::{ApplyResult, IntegrationConfig};
use crate::{apply, context, log, parse, prompt, scaffold, ux, workspace};

/// Everything one run needs besides the model client.
pub struct RunPlan<'a> {
    pub theme_dir: &'a Path,
    pub output_dir: &'a Path,
    pub integration: &'a IntegrationConfig,
    pub config: &'a Config,
    pub progress: bool,
}

/// Copy the theme, ask the model for changes and write them into the copy.
/// Model failures and unparseable replies yield an empty result, not an error.
pub async fn process_theme_directory(plan: &RunPlan<'_>, model: &dyn Completion) -> Result<ApplyResult> {
    let cfg = plan.config;

    if !plan.theme_dir.exists() {
        ux::warn(&format!("Theme directory does not exist: {}", plan.theme_dir.display()));
        ux::step("Creating minimal theme structure for testing...");
        scaffold::create_minimal_theme(plan.theme_dir)?;
        ux::ok("Created minimal theme structure for testing");
    }

    workspace::copy_tree(plan.theme_dir, plan.output_dir)?;

    ux::step("Reading theme structure...");
    let files = context::read_theme(plan.theme_dir, &cfg.extensions, cfg.max_file_chars);
    ux::step(&format!("Found {} theme files to analyze", files.len()));
    for path in files.keys() {
        ux::item(path);
    }

    let prompt_text = prompt::build(&files, plan.integration);
    tracing::info!(files = files.len(), prompt_chars = prompt_text.chars().count(), "prompt built");

    ux::step("Analyzing theme structure with OpenAI...");
    ux::step(&format!("Sending {} files for analysis ({})...", files.len(), ux::size(prompt_text.len())));
    let spinner = ux::spinner("Waiting for model response", plan.progress);
    let reply = model.complete(&prompt_text).await;
    spinner.finish_and_clear();

    let response = match reply {
        Ok(Some(text)) => text,
        Ok(None) => {
            ux::fail("Failed to get OpenAI modifications: empty response");
            return Ok(ApplyResult::new());
        }
        Err(e) => {
            tracing::error!(error = %e, "completion call failed");
            ux::fail(&format!("OpenAI API error: {e:#}"));
            ux::fail("Failed to get OpenAI modifications");
            return Ok(ApplyResult::new());
        }
    };

    ux::step("Parsing OpenAI response...");
    ux::item(&format!("Response length: {} characters", response.chars().count()));
    let modifications = parse::parse(&response);
    ux::step(&format!("Total files to modify: {}", modifications.len()));

    if modifications.is_empty() {
        ux::warn("No modifications found in OpenAI response");
        let debug_path = PathBuf::from(&cfg.debug_response_path);
        log::save_debug_response(&debug_path, &response)?;
        ux::warn(&format!("Raw OpenAI response saved to {}", debug_path.display()));
        return Ok(ApplyResult::new());
    }

    Ok(apply::apply(&modifications, plan.output_dir))
}
