//! TOML configuration: invocation defaults, category table and exclusion filters.
//!
//! Every key is optional. A missing file means "use the built-in defaults".
//!
//! # Configuration File Format
//!
//! ```toml
//! source = "/home/me/Downloads"
//! target_root = "/home/me/Sorted"
//! create_source = true
//!
//! # Replaces the standard table when present. Order matters: the first
//! # category listing an extension keeps it.
//! [[categories]]
//! name = "Images"
//! extensions = ["jpg", ".png"]
//!
//! [filters]
//! enable_hidden_files = true
//!
//! [filters.exclude]
//! filenames = ["Thumbs.db"]
//! patterns = ["*.part"]
//! extensions = ["crdownload"]
//! regex = []
//!
//! [filters.include]
//! patterns = []
//! ```

use crate::file_category::{CategoryTable, normalize_extension};
use glob::Pattern;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = ".dirsortrc.toml";

/// Errors that can occur while loading configuration or compiling filters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid configuration in {}: {reason}", path.display())]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Invalid glob pattern '{0}'")]
    InvalidGlobPattern(String),

    #[error("Invalid regex pattern '{pattern}': {reason}")]
    InvalidRegexPattern { pattern: String, reason: String },

    #[error("Category entry #{0} has an empty name")]
    EmptyCategoryName(usize),

    #[error("IO error reading configuration {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Settings loaded from a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Default source folder when `--source` is not given.
    #[serde(default)]
    pub source: Option<PathBuf>,

    /// Default target root when `--target-root` is not given.
    #[serde(default)]
    pub target_root: Option<PathBuf>,

    /// Default for creating a missing source folder.
    #[serde(default)]
    pub create_source: Option<bool>,

    /// Alternate category table. Empty means the standard table.
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,

    #[serde(default)]
    pub filters: FilterRules,
}

/// One `[[categories]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Root-level filter rules.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterRules {
    /// Whether files starting with "." are sorted too. Defaults to true.
    #[serde(default = "default_enable_hidden_files")]
    pub enable_hidden_files: bool,

    #[serde(default)]
    pub exclude: ExcludeRules,

    /// Whitelist that overrides every exclude rule.
    #[serde(default)]
    pub include: IncludeRules,
}

fn default_enable_hidden_files() -> bool {
    true
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            enable_hidden_files: default_enable_hidden_files(),
            exclude: ExcludeRules::default(),
            include: IncludeRules::default(),
        }
    }
}

/// Rules for leaving files where they are.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeRules {
    /// Exact file names (e.g. "Thumbs.db").
    #[serde(default)]
    pub filenames: Vec<String>,

    /// Glob patterns matched against the file name (e.g. "*.part").
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Extensions, with or without the leading dot, any case.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Regex patterns matched against the file name.
    #[serde(default)]
    pub regex: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncludeRules {
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl Settings {
    /// Loads settings, falling back to defaults.
    ///
    /// Lookup order:
    /// 1. `config_path`, if given (must exist)
    /// 2. `.dirsortrc.toml` in the current directory
    /// 3. `~/.config/dirsort/config.toml`
    /// 4. built-in defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.is_file() {
            return Self::load_from_file(&local_config);
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("dirsort").join("config.toml");
            if home_config.is_file() {
                return Self::load_from_file(&home_config);
            }
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Loads settings from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::parse(&content).map_err(|e| match e {
            ConfigError::ConfigInvalid { reason, .. } => ConfigError::ConfigInvalid {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ConfigInvalid {
            path: PathBuf::new(),
            reason: e.to_string(),
        })
    }

    /// Builds the category table. No `[[categories]]` entries means the
    /// standard table.
    pub fn category_table(&self) -> Result<CategoryTable, ConfigError> {
        if self.categories.is_empty() {
            return Ok(CategoryTable::standard());
        }

        let mut table = CategoryTable::empty();
        for (index, entry) in self.categories.iter().enumerate() {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(ConfigError::EmptyCategoryName(index + 1));
            }
            table.add_category(name, &entry.extensions);
        }
        Ok(table)
    }

    /// Compiles the filter rules.
    pub fn compile_filters(&self) -> Result<CompiledFilters, ConfigError> {
        CompiledFilters::new(&self.filters)
    }
}

/// Filter rules with patterns pre-compiled.
#[derive(Debug, Clone)]
pub struct CompiledFilters {
    enable_hidden_files: bool,
    exclude_filenames: HashSet<String>,
    exclude_extensions: HashSet<String>,
    exclude_patterns: Vec<Pattern>,
    exclude_regexes: Vec<Regex>,
    include_patterns: Vec<Pattern>,
}

impl CompiledFilters {
    pub fn new(rules: &FilterRules) -> Result<Self, ConfigError> {
        let exclude_patterns = compile_globs(&rules.exclude.patterns)?;
        let include_patterns = compile_globs(&rules.include.patterns)?;

        let exclude_regexes = rules
            .exclude
            .regex
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::InvalidRegexPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            enable_hidden_files: rules.enable_hidden_files,
            exclude_filenames: rules.exclude.filenames.iter().cloned().collect(),
            exclude_extensions: rules
                .exclude
                .extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .filter(|ext| !ext.is_empty())
                .collect(),
            exclude_patterns,
            exclude_regexes,
            include_patterns,
        })
    }

    /// Filters that let every file through.
    pub fn allow_all() -> Self {
        Self {
            enable_hidden_files: true,
            exclude_filenames: HashSet::new(),
            exclude_extensions: HashSet::new(),
            exclude_patterns: Vec::new(),
            exclude_regexes: Vec::new(),
            include_patterns: Vec::new(),
        }
    }

    /// Returns why a file should be left in place, or `None` if it should be
    /// sorted.
    ///
    /// Include patterns win over everything. Then, in order: hidden files,
    /// exact names, extensions, glob patterns, regexes.
    pub fn exclusion_reason(&self, file_path: &Path) -> Option<String> {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if self
            .include_patterns
            .iter()
            .any(|pattern| pattern.matches(&file_name))
        {
            return None;
        }

        if !self.enable_hidden_files && file_name.starts_with('.') {
            return Some("hidden file".to_string());
        }

        if self.exclude_filenames.contains(file_name.as_ref()) {
            return Some(format!("excluded file name '{}'", file_name));
        }

        if let Some(ext) = file_path.extension() {
            let ext = normalize_extension(&ext.to_string_lossy());
            if self.exclude_extensions.contains(&ext) {
                return Some(format!("excluded extension '{}'", ext));
            }
        }

        if let Some(pattern) = self
            .exclude_patterns
            .iter()
            .find(|pattern| pattern.matches(&file_name))
        {
            return Some(format!("matches exclude pattern '{}'", pattern.as_str()));
        }

        if let Some(regex) = self
            .exclude_regexes
            .iter()
            .find(|regex| regex.is_match(&file_name))
        {
            return Some(format!("matches exclude regex '{}'", regex.as_str()));
        }

        None
    }
}

impl Default for CompiledFilters {
    fn default() -> Self {
        Self::allow_all()
    }
}

fn compile_globs(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|_| ConfigError::InvalidGlobPattern(pattern.clone()))
        })
        .collect()
}
