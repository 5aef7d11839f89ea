//! Output formatting for CLI

use std::sync::atomic::{AtomicBool, Ordering};

use console::style;
use serde::Serialize;

/// Set by `--json`: human-readable status lines are dropped so stdout only
/// carries the JSON document (and whatever external generators print)
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print a success message
pub fn success(message: &str) {
    if !quiet() {
        println!("{} {}", style("✓").green().bold(), message);
    }
}

/// Print an info message
pub fn info(message: &str) {
    if !quiet() {
        println!("{} {}", style("ℹ").blue().bold(), message);
    }
}

/// Print a warning message
pub fn warning(message: &str) {
    if !quiet() {
        println!("{} {}", style("⚠").yellow().bold(), message);
    }
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("error:").red().bold(), message);
}

/// Print a step in a process
pub fn step(number: usize, total: usize, message: &str) {
    if !quiet() {
        println!(
            "{} {}",
            style(format!("[{}/{}]", number, total)).dim(),
            message
        );
    }
}

/// Print JSON output
pub fn json<T: Serialize>(data: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a divider line
pub fn divider() {
    println!("{}", style("─".repeat(60)).dim());
}

/// Format a duration in human-readable form
pub fn format_duration(millis: u128) -> String {
    if millis < 1000 {
        format!("{}ms", millis)
    } else if millis < 60000 {
        format!("{:.2}s", millis as f64 / 1000.0)
    } else {
        let seconds = millis / 1000;
        let minutes = seconds / 60;
        let remaining_seconds = seconds % 60;
        format!("{}m {}s", minutes, remaining_seconds)
    }
}

/// Create a progress spinner, hidden in quiet mode
pub fn spinner(message: &str) -> indicatif::ProgressBar {
    if quiet() {
        return indicatif::ProgressBar::hidden();
    }

    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}
