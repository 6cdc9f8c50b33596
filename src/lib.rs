//! dirsort - sort the files of a folder into category subfolders
//!
//! The library classifies files by extension ([`file_category`]), moves them
//! into `target_root/<Category>/` with collision-safe names
//! ([`file_organizer`]), and supports a dry-run preview. Defaults, an
//! alternate category table and exclusion filters can be supplied through a
//! TOML file ([`config`]).

pub mod cli;
pub mod config;
pub mod file_category;
pub mod file_organizer;
pub mod output;

pub use config::{CompiledFilters, ConfigError, Settings};
pub use file_category::{CategoryTable, Classifier, OTHER};
pub use file_organizer::{
    Action, FailurePolicy, FileOutcome, OrganizeError, OrganizeOptions, Organizer, RunResult,
    next_available_path,
};

pub use cli::{Cli, run_cli};
