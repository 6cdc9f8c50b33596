//! Terminal output for the `dirsort` binary.
//!
//! All styling lives here so the engine only ever deals in structured
//! [`FileOutcome`]s.

use crate::file_organizer::{Action, FileOutcome, RunResult};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::Duration;

/// Prints messages, outcomes and summaries with consistent styling.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Prints an error message in red with an X mark.
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Prints a warning message in yellow with a warning symbol.
    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Prints a success message in green with a checkmark.
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    pub fn info(message: &str) {
        println!("{}", message.cyan());
    }

    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Formats one outcome as a single plain line, e.g.
    /// `moved: /in/a.txt -> /out/Documents/a.txt`.
    pub fn outcome_line(outcome: &FileOutcome) -> String {
        let source = outcome.source.display();
        let destination = outcome
            .destination
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_default();

        match &outcome.action {
            Action::Moved | Action::WouldMove => {
                format!("{}: {} -> {}", outcome.action.label(), source, destination)
            }
            Action::Skipped { reason } => {
                format!("{}: {} ({})", outcome.action.label(), source, reason)
            }
            Action::Failed { reason } => format!(
                "{}: {} -> {} ({})",
                outcome.action.label(),
                source,
                destination,
                reason
            ),
        }
    }

    /// Prints one outcome, coloured by action.
    pub fn outcome(outcome: &FileOutcome) {
        let line = Self::outcome_line(outcome);
        match outcome.action {
            Action::Moved => println!("{}", line.green()),
            Action::WouldMove => println!("{}", line.yellow()),
            Action::Skipped { .. } => println!("{}", line.dimmed()),
            Action::Failed { .. } => eprintln!("{}", line.red()),
        }
    }

    /// Creates a spinner shown while a run is in progress.
    pub fn create_spinner(message: String) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} [{pos} files]")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Counts relocated files per category, sorted by category name.
    pub fn category_counts(result: &RunResult) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for outcome in result.relocated() {
            if let Some(category) = &outcome.category {
                *counts.entry(category.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Prints a table of files per category followed by skip and failure totals.
    pub fn summary_table(result: &RunResult) {
        Self::header(if result.dry_run {
            "DRY RUN SUMMARY"
        } else {
            "SUMMARY"
        });

        let counts = Self::category_counts(result);
        let total: usize = counts.values().sum();

        let width = counts
            .keys()
            .map(|name| name.len())
            .max()
            .unwrap_or(0)
            .max(8);

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = width
        );
        println!("{}", "-".repeat(width + 10));

        for (category, count) in &counts {
            println!(
                "{:<width$} | {} {}",
                category,
                count.to_string().green(),
                plural(*count),
                width = width
            );
        }

        println!("{}", "-".repeat(width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total.to_string().green().bold(),
            plural(total),
            width = width
        );

        let skipped = result
            .outcomes
            .iter()
            .filter(|o| matches!(o.action, Action::Skipped { .. }))
            .count();
        if skipped > 0 {
            println!("Skipped: {} {}", skipped, plural(skipped));
        }

        let failed = result.failures().count();
        if failed > 0 {
            Self::warning(&format!("Failed: {} {}", failed, plural(failed)));
        }
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
