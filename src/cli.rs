//! Command-line front end.
//!
//! Parses arguments, merges them with the configuration file, runs the
//! [`Organizer`] and renders its outcomes as text or JSON.

use crate::config::Settings;
use crate::file_category::Classifier;
use crate::file_organizer::{FailurePolicy, OrganizeOptions, Organizer, RunResult};
use crate::output::OutputFormatter;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

/// Sort the files of a folder into category subfolders by extension.
#[derive(Debug, Clone, Parser)]
#[command(name = "dirsort", version, about, long_about = None)]
pub struct Cli {
    /// Folder whose files should be sorted [default: your download folder]
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Where the category folders are created [default: same as --source]
    #[arg(long, value_name = "DIR")]
    pub target_root: Option<PathBuf>,

    /// Show what would be moved without moving anything
    #[arg(long)]
    pub dry_run: bool,

    /// Create the source folder if it does not exist (default)
    #[arg(long, overrides_with = "no_create_source")]
    pub create_source: bool,

    /// Fail if the source folder does not exist
    #[arg(long, overrides_with = "create_source")]
    pub no_create_source: bool,

    /// Keep going when a file cannot be moved instead of stopping
    #[arg(long)]
    pub keep_going: bool,

    /// Path to a configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the run result as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The create-source choice made on the command line, if any.
    fn create_source_flag(&self) -> Option<bool> {
        if self.no_create_source {
            Some(false)
        } else if self.create_source {
            Some(true)
        } else {
            None
        }
    }

    /// Builds run options: command-line flags first, then the configuration
    /// file, then built-in defaults.
    pub fn resolve_options(&self, settings: &Settings) -> OrganizeOptions {
        let source = self
            .source
            .clone()
            .or_else(|| settings.source.clone())
            .unwrap_or_else(default_source);
        let target_root = self
            .target_root
            .clone()
            .or_else(|| settings.target_root.clone())
            .unwrap_or_else(|| source.clone());
        let create_source = self
            .create_source_flag()
            .or(settings.create_source)
            .unwrap_or(true);
        let on_failure = if self.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        };

        OrganizeOptions::new(source, target_root)
            .dry_run(self.dry_run)
            .create_source(create_source)
            .on_failure(on_failure)
    }
}

/// The platform download folder, or `~/Downloads` when the platform has none.
pub fn default_source() -> PathBuf {
    dirs::download_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
        .unwrap_or_else(|| PathBuf::from("Downloads"))
}

/// Runs one organize pass for the parsed command line.
///
/// Outcomes are printed as they happen unless `--json` is set, in which case
/// the whole [`RunResult`] is printed at the end. An aborted run still prints
/// the outcomes it recorded before returning the error.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use dirsort::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from(["dirsort", "--source", "/tmp/inbox", "--dry-run"]);
/// let result = run_cli(&cli)?;
/// println!("{} files", result.outcomes.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn run_cli(cli: &Cli) -> anyhow::Result<RunResult> {
    let settings = Settings::load(cli.config.as_deref()).context("Error loading configuration")?;
    let table = settings
        .category_table()
        .context("Error building category table")?;
    let filters = settings
        .compile_filters()
        .context("Error compiling filters")?;

    let organizer = Organizer::new(Classifier::new(table)).with_filters(filters);
    let options = cli.resolve_options(&settings);

    if cli.json {
        return match organizer.organize(&options) {
            Ok(result) => {
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(result)
            }
            Err(err) => {
                if let Some(partial) = err.partial_result() {
                    println!("{}", serde_json::to_string_pretty(partial)?);
                }
                Err(err.into())
            }
        };
    }

    if options.dry_run {
        OutputFormatter::dry_run_notice(&format!(
            "Analyzing contents of: {}",
            options.source.display()
        ));
    } else {
        OutputFormatter::info(&format!(
            "Organizing contents of: {}",
            options.source.display()
        ));
    }

    let spinner = OutputFormatter::create_spinner(format!("Sorting {}", options.source.display()));
    let outcome = organizer.organize_with(&options, |outcome| {
        spinner.suspend(|| OutputFormatter::outcome(outcome));
        spinner.inc(1);
    });
    spinner.finish_and_clear();
    let result = outcome?;

    if result.created_source {
        OutputFormatter::info(&format!(
            "Created source folder: {}",
            result.source.display()
        ));
    }

    if result.outcomes.is_empty() {
        OutputFormatter::info("No files found to organize.");
        return Ok(result);
    }

    OutputFormatter::summary_table(&result);

    if result.dry_run {
        OutputFormatter::success("Dry run complete. No files were moved.");
    } else if result.has_failures() {
        OutputFormatter::warning("Some files could not be moved. Please review errors above.");
    } else {
        OutputFormatter::success("Organization complete!");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("dirsort").chain(args.iter().copied()))
    }

    #[test]
    fn test_target_root_defaults_to_source() {
        let cli = parse(&["--source", "/data/inbox"]);
        let options = cli.resolve_options(&Settings::default());

        assert_eq!(options.source, PathBuf::from("/data/inbox"));
        assert_eq!(options.target_root, PathBuf::from("/data/inbox"));
        assert!(!options.dry_run);
        assert!(options.create_source);
        assert_eq!(options.on_failure, FailurePolicy::Abort);
    }

    #[test]
    fn test_flags_override_settings() {
        let settings = Settings {
            source: Some(PathBuf::from("/config/src")),
            target_root: Some(PathBuf::from("/config/dst")),
            create_source: Some(true),
            ..Default::default()
        };
        let cli = parse(&[
            "--source",
            "/cli/src",
            "--no-create-source",
            "--dry-run",
            "--keep-going",
        ]);
        let options = cli.resolve_options(&settings);

        assert_eq!(options.source, PathBuf::from("/cli/src"));
        assert_eq!(options.target_root, PathBuf::from("/config/dst"));
        assert!(!options.create_source);
        assert!(options.dry_run);
        assert_eq!(options.on_failure, FailurePolicy::Continue);
    }

    #[test]
    fn test_settings_fill_missing_flags() {
        let settings = Settings {
            source: Some(PathBuf::from("/config/src")),
            create_source: Some(false),
            ..Default::default()
        };
        let options = parse(&[]).resolve_options(&settings);

        assert_eq!(options.source, PathBuf::from("/config/src"));
        assert_eq!(options.target_root, PathBuf::from("/config/src"));
        assert!(!options.create_source);
    }

    #[test]
    fn test_last_create_source_flag_wins() {
        let cli = parse(&["--no-create-source", "--create-source"]);
        assert_eq!(cli.create_source_flag(), Some(true));

        let cli = parse(&["--create-source", "--no-create-source"]);
        assert_eq!(cli.create_source_flag(), Some(false));

        assert_eq!(parse(&[]).create_source_flag(), None);
    }

    #[test]
    fn test_default_source_is_not_empty() {
        assert!(!default_source().as_os_str().is_empty());
    }
}
