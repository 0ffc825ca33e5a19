use colored::Colorize;
use humansize::{format_size, BINARY};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub fn step(msg: &str) {
    println!("{} {}", "»".cyan().bold(), msg);
}

pub fn ok(msg: &str) {
    println!("{} {}", "✔".green().bold(), msg);
}

pub fn warn(msg: &str) {
    println!("{} {}", "!".yellow().bold(), msg.yellow());
}

pub fn fail(msg: &str) {
    eprintln!("{} {}", "✘".red().bold(), msg.red());
}

pub fn item(msg: &str) {
    println!("  - {}", msg);
}

pub fn size(bytes: usize) -> String {
    format_size(bytes, BINARY)
}

/// Spinner shown while waiting on the model. Hidden when progress is off.
pub fn spinner(msg: &str, enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

pub fn print_modified(paths: &[String]) {
    println!(
        "\n{}",
        format!("Successfully modified {} files:", paths.len()).green().bold()
    );
    for p in paths {
        item(p);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_human_readable() {
        assert!(size(0).starts_with('0'));
        assert!(size(2048).contains("KiB"));
    }

    #[test]
    fn disabled_spinner_is_hidden() {
        assert!(spinner("waiting", false).is_hidden());
    }
}
