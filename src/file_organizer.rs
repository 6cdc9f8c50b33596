//! Scan-classify-move engine.
//!
//! [`Organizer`] lists the immediate children of a source folder, classifies
//! every regular file with a [`Classifier`] and moves it to
//! `target_root/<Category>/`, picking a `_N` suffixed name when the
//! destination is taken. In dry-run mode it only reports the moves it would
//! make.
//!
//! Collision checks are not atomic: another process creating the same
//! destination between the check and the move can still race with us.

use crate::config::CompiledFilters;
use crate::file_category::Classifier;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort an organize run.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The source folder does not exist and creating it was not requested.
    #[error("Source folder not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// The source path exists but is not a folder.
    #[error("Source path is not a folder: {}", path.display())]
    SourceNotADirectory { path: PathBuf },

    #[error("Failed to create source folder {}: {source}", path.display())]
    SourceCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read folder {}: {source}", path.display())]
    ReadDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single file could not be moved.
    #[error("Failed to move {} to {}: {reason}", file.display(), destination.display())]
    MoveFailed {
        file: PathBuf,
        destination: PathBuf,
        reason: String,
    },

    /// A move failed under [`FailurePolicy::Abort`]. `partial` holds every
    /// outcome recorded before the run stopped, the failed file included.
    #[error("Run aborted")]
    RunAborted {
        #[source]
        cause: Box<OrganizeError>,
        partial: Box<RunResult>,
    },
}

impl OrganizeError {
    /// The outcomes recorded before an aborted run stopped.
    pub fn partial_result(&self) -> Option<&RunResult> {
        match self {
            OrganizeError::RunAborted { partial, .. } => Some(&**partial),
            _ => None,
        }
    }
}

/// Result type for organize operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// What to do when moving one file fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failure. Files already moved stay moved.
    #[default]
    Abort,
    /// Record the failure and carry on with the remaining files.
    Continue,
}

/// Parameters of one organize run.
#[derive(Debug, Clone)]
pub struct OrganizeOptions {
    pub source: PathBuf,
    pub target_root: PathBuf,
    pub dry_run: bool,
    pub create_source: bool,
    pub on_failure: FailurePolicy,
}

impl OrganizeOptions {
    /// Live run that creates a missing source and aborts on the first failure.
    pub fn new(source: impl Into<PathBuf>, target_root: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target_root: target_root.into(),
            dry_run: false,
            create_source: true,
            on_failure: FailurePolicy::Abort,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn create_source(mut self, create_source: bool) -> Self {
        self.create_source = create_source;
        self
    }

    pub fn on_failure(mut self, policy: FailurePolicy) -> Self {
        self.on_failure = policy;
        self
    }
}

/// Where one file is going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub category: String,
}

/// The kind of outcome recorded for a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// The file was moved.
    Moved,
    /// Dry run: the file would have been moved.
    WouldMove,
    /// The file matched an exclusion filter and was left in place.
    Skipped { reason: String },
    /// The move failed and the run continued.
    Failed { reason: String },
}

impl Action {
    /// Short label used in text output.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Moved => "moved",
            Action::WouldMove => "dry-run",
            Action::Skipped { .. } => "skipped",
            Action::Failed { .. } => "failed",
        }
    }
}

/// Outcome for a single file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    #[serde(flatten)]
    pub action: Action,
    pub source: PathBuf,
    /// Destination path. `None` for skipped files.
    pub destination: Option<PathBuf>,
    /// Category the file was classified into. `None` for skipped files.
    pub category: Option<String>,
}

impl FileOutcome {
    fn planned(plan: MovePlan, action: Action) -> Self {
        Self {
            action,
            source: plan.source,
            destination: Some(plan.destination),
            category: Some(plan.category),
        }
    }

    fn failed(plan: MovePlan, reason: String) -> Self {
        Self::planned(plan, Action::Failed { reason })
    }

    fn skipped(source: PathBuf, reason: String) -> Self {
        Self {
            action: Action::Skipped { reason },
            source,
            destination: None,
            category: None,
        }
    }
}

/// Everything one organize run did, in scan order.
#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub started_at: DateTime<Local>,
    pub source: PathBuf,
    pub target_root: PathBuf,
    pub dry_run: bool,
    /// Whether the source folder had to be created.
    pub created_source: bool,
    pub outcomes: Vec<FileOutcome>,
    /// Set when the run stopped early, with the error that stopped it.
    pub aborted: Option<String>,
}

impl RunResult {
    fn new(options: &OrganizeOptions) -> Self {
        Self {
            started_at: Local::now(),
            source: options.source.clone(),
            target_root: options.target_root.clone(),
            dry_run: options.dry_run,
            created_source: false,
            outcomes: Vec::new(),
            aborted: None,
        }
    }

    /// Outcomes that moved (or would move) a file.
    pub fn relocated(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.action, Action::Moved | Action::WouldMove))
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.action, Action::Failed { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}

/// Returns `candidate` if nothing exists there, otherwise the first free
/// `stem_N.ext` sibling for N = 1, 2, 3, ...
///
/// ```no_run
/// use dirsort::file_organizer::next_available_path;
/// use std::path::Path;
///
/// // With "Spreadsheets/report.csv" already on disk:
/// let path = next_available_path(Path::new("Spreadsheets/report.csv"));
/// assert_eq!(path, Path::new("Spreadsheets/report_1.csv"));
/// ```
pub fn next_available_path(candidate: &Path) -> PathBuf {
    next_available_path_with(candidate, |path| path.exists())
}

/// Like [`next_available_path`], with a caller-supplied "is this taken" check.
pub fn next_available_path_with<F>(candidate: &Path, is_taken: F) -> PathBuf
where
    F: Fn(&Path) -> bool,
{
    if !is_taken(candidate) {
        return candidate.to_path_buf();
    }

    let parent = candidate.parent().unwrap_or_else(|| Path::new(""));
    let stem = candidate
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = candidate
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let mut counter: u64 = 1;
    loop {
        let path = parent.join(format!("{}_{}{}", stem, counter, suffix));
        if !is_taken(&path) {
            return path;
        }
        counter += 1;
    }
}

/// Moves a file, falling back to [`copy_then_remove`] when `rename` cannot
/// cross filesystems.
pub fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            tracing::warn!(
                source = %source.display(),
                destination = %destination.display(),
                "rename crosses filesystems, copying instead"
            );
            copy_then_remove(source, destination)
        }
        Err(e) => Err(e),
    }
}

/// Copies `source` to `destination`, then removes `source`.
///
/// Symlinks are re-created as links pointing at the same target rather than
/// copied through. The source is only removed once the copy succeeded.
pub fn copy_then_remove(source: &Path, destination: &Path) -> io::Result<()> {
    let metadata = fs::symlink_metadata(source)?;
    if metadata.file_type().is_symlink() {
        let target = fs::read_link(source)?;
        create_symlink(&target, destination)?;
    } else {
        fs::copy(source, destination)?;
    }
    fs::remove_file(source)
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(not(any(unix, windows)))]
fn create_symlink(_target: &Path, link: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("cannot re-create symlink {}", link.display()),
    ))
}

/// Sorts files from a source folder into category folders.
#[derive(Debug, Clone, Default)]
pub struct Organizer {
    classifier: Classifier,
    filters: CompiledFilters,
}

impl Organizer {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            filters: CompiledFilters::allow_all(),
        }
    }

    /// Files matching these filters are reported as skipped instead of moved.
    pub fn with_filters(mut self, filters: CompiledFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Runs the organizer and collects every outcome.
    ///
    /// # Errors
    ///
    /// * [`OrganizeError::SourceNotFound`] - source missing and `create_source` is false
    /// * [`OrganizeError::SourceNotADirectory`] - source is a file
    /// * [`OrganizeError::RunAborted`] - a move failed under [`FailurePolicy::Abort`];
    ///   the error carries the outcomes recorded so far
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::file_organizer::{OrganizeOptions, Organizer};
    ///
    /// let organizer = Organizer::default();
    /// let options = OrganizeOptions::new("/home/me/Downloads", "/home/me/Downloads").dry_run(true);
    /// let result = organizer.organize(&options)?;
    /// for outcome in &result.outcomes {
    ///     println!("{:?}", outcome);
    /// }
    /// # Ok::<(), dirsort::file_organizer::OrganizeError>(())
    /// ```
    pub fn organize(&self, options: &OrganizeOptions) -> OrganizeResult<RunResult> {
        self.organize_with(options, |_| {})
    }

    /// Runs the organizer, handing each outcome to `on_outcome` as soon as it
    /// is produced. The returned [`RunResult`] holds the same outcomes in the
    /// same order.
    pub fn organize_with<F>(
        &self,
        options: &OrganizeOptions,
        mut on_outcome: F,
    ) -> OrganizeResult<RunResult>
    where
        F: FnMut(&FileOutcome),
    {
        let mut result = RunResult::new(options);
        result.created_source = prepare_source(&options.source, options.create_source)?;

        let entries = list_entries(&options.source)?;
        tracing::debug!(
            source = %options.source.display(),
            entries = entries.len(),
            "scanned source folder"
        );

        // Destinations handed out during a dry run, so later files see them as taken.
        let mut planned: HashSet<PathBuf> = HashSet::new();

        for path in entries {
            if path.is_dir() {
                continue;
            }

            if let Some(reason) = self.filters.exclusion_reason(&path) {
                tracing::debug!(file = %path.display(), %reason, "skipping");
                let outcome = FileOutcome::skipped(path, reason);
                on_outcome(&outcome);
                result.outcomes.push(outcome);
                continue;
            }

            let (outcome, error) = match self.process_file(&path, options, &mut planned) {
                Ok(outcome) => (outcome, None),
                Err((plan, reason)) => {
                    let error = OrganizeError::MoveFailed {
                        file: plan.source.clone(),
                        destination: plan.destination.clone(),
                        reason: reason.clone(),
                    };
                    tracing::warn!("{}", error);
                    (FileOutcome::failed(plan, reason), Some(error))
                }
            };

            on_outcome(&outcome);
            result.outcomes.push(outcome);

            if let (Some(error), FailurePolicy::Abort) = (error, options.on_failure) {
                result.aborted = Some(error.to_string());
                return Err(OrganizeError::RunAborted {
                    cause: Box::new(error),
                    partial: Box::new(result),
                });
            }
        }

        tracing::info!(
            files = result.outcomes.len(),
            dry_run = options.dry_run,
            "organize run finished"
        );
        Ok(result)
    }

    /// Classifies `path` and picks its destination without touching the disk.
    pub fn plan(&self, path: &Path, target_root: &Path) -> MovePlan {
        self.plan_with(path, target_root, |candidate| candidate.exists())
    }

    fn plan_with<F>(&self, path: &Path, target_root: &Path, is_taken: F) -> MovePlan
    where
        F: Fn(&Path) -> bool,
    {
        let category = self.classifier.category_for_path(path).to_string();
        let file_name = path.file_name().unwrap_or(path.as_os_str());
        let candidate = target_root.join(&category).join(file_name);
        let destination = next_available_path_with(&candidate, is_taken);

        MovePlan {
            source: path.to_path_buf(),
            destination,
            category,
        }
    }

    /// Plans and performs (or simulates) one move. On failure, returns the
    /// plan with the reason.
    fn process_file(
        &self,
        path: &Path,
        options: &OrganizeOptions,
        planned: &mut HashSet<PathBuf>,
    ) -> Result<FileOutcome, (MovePlan, String)> {
        if options.dry_run {
            let plan = self.plan_with(path, &options.target_root, |candidate| {
                candidate.exists() || planned.contains(candidate)
            });
            planned.insert(plan.destination.clone());
            tracing::debug!(
                file = %path.display(),
                category = %plan.category,
                destination = %plan.destination.display(),
                "would move"
            );
            return Ok(FileOutcome::planned(plan, Action::WouldMove));
        }

        let plan = self.plan(path, &options.target_root);
        let category_dir = options.target_root.join(&plan.category);
        if let Err(e) = fs::create_dir_all(&category_dir) {
            let reason = format!("could not create category folder: {}", e);
            return Err((plan, reason));
        }

        if let Err(e) = move_file(&plan.source, &plan.destination) {
            let reason = e.to_string();
            return Err((plan, reason));
        }

        tracing::debug!(
            file = %path.display(),
            category = %plan.category,
            destination = %plan.destination.display(),
            "moved"
        );
        Ok(FileOutcome::planned(plan, Action::Moved))
    }
}

/// Makes sure the source folder exists. Returns true if it had to be created.
fn prepare_source(source: &Path, create_source: bool) -> OrganizeResult<bool> {
    let mut created = false;

    if !source.exists() {
        if !create_source {
            return Err(OrganizeError::SourceNotFound {
                path: source.to_path_buf(),
            });
        }
        fs::create_dir_all(source).map_err(|e| OrganizeError::SourceCreationFailed {
            path: source.to_path_buf(),
            source: e,
        })?;
        tracing::info!(path = %source.display(), "created source folder");
        created = true;
    }

    if !source.is_dir() {
        return Err(OrganizeError::SourceNotADirectory {
            path: source.to_path_buf(),
        });
    }

    Ok(created)
}

/// Lists the immediate children of `dir`, sorted by file name.
fn list_entries(dir: &Path) -> OrganizeResult<Vec<PathBuf>> {
    let read_dir_failed = |e| OrganizeError::ReadDirFailed {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_dir_failed)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(read_dir_failed)?;

    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "content").expect("Failed to write test file");
    }

    #[test]
    fn test_next_available_path_free_candidate() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let candidate = temp_dir.path().join("report.csv");

        assert_eq!(next_available_path(&candidate), candidate);
    }

    #[test]
    fn test_next_available_path_is_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let candidate = temp_dir.path().join("report.csv");
        touch(&candidate);

        let first = next_available_path(&candidate);
        let second = next_available_path(&candidate);
        assert_eq!(first, second);
        assert!(!first.exists());
    }

    #[test]
    fn test_next_available_path_counts_up_without_gaps() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path();
        let candidate = dir.join("report.csv");

        touch(&candidate);
        assert_eq!(next_available_path(&candidate), dir.join("report_1.csv"));

        touch(&dir.join("report_1.csv"));
        assert_eq!(next_available_path(&candidate), dir.join("report_2.csv"));

        touch(&dir.join("report_2.csv"));
        assert_eq!(next_available_path(&candidate), dir.join("report_3.csv"));
    }

    #[test]
    fn test_next_available_path_without_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let candidate = temp_dir.path().join("Makefile");
        touch(&candidate);

        assert_eq!(
            next_available_path(&candidate),
            temp_dir.path().join("Makefile_1")
        );
    }

    #[test]
    fn test_next_available_path_multiple_dots() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let candidate = temp_dir.path().join("backup.tar.gz");
        touch(&candidate);

        assert_eq!(
            next_available_path(&candidate),
            temp_dir.path().join("backup.tar_1.gz")
        );
    }

    #[test]
    fn test_next_available_path_with_custom_check() {
        let taken: HashSet<PathBuf> = ["a.txt", "a_1.txt"].into_iter().map(PathBuf::from).collect();
        let path = next_available_path_with(Path::new("a.txt"), |p| taken.contains(p));
        assert_eq!(path, PathBuf::from("a_2.txt"));
    }

    #[test]
    fn test_move_file_renames() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("a.txt");
        let destination = temp_dir.path().join("b.txt");
        fs::write(&source, "hello").unwrap();

        move_file(&source, &destination).expect("Failed to move file");

        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&destination).unwrap(), "hello");
    }

    #[test]
    fn test_move_file_missing_source_is_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = move_file(
            &temp_dir.path().join("missing.txt"),
            &temp_dir.path().join("out.txt"),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_copy_then_remove_moves_contents() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("a.txt");
        let destination = temp_dir.path().join("out").join("a.txt");
        fs::create_dir(temp_dir.path().join("out")).unwrap();
        fs::write(&source, "hello").unwrap();

        copy_then_remove(&source, &destination).expect("Failed to copy file");

        assert!(!source.exists());
        assert_eq!(fs::read_to_string(&destination).unwrap(), "hello");
    }

    #[test]
    fn test_copy_then_remove_keeps_source_when_copy_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("a.txt");
        fs::write(&source, "hello").unwrap();

        let result = copy_then_remove(&source, &temp_dir.path().join("missing").join("a.txt"));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&source).unwrap(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_copy_then_remove_recreates_symlink() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target = temp_dir.path().join("real.txt");
        let link = temp_dir.path().join("link.txt");
        let destination = temp_dir.path().join("moved.txt");
        fs::write(&target, "hello").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        copy_then_remove(&link, &destination).expect("Failed to move symlink");

        assert!(fs::symlink_metadata(&link).is_err());
        assert!(
            fs::symlink_metadata(&destination)
                .unwrap()
                .file_type()
                .is_symlink()
        );
        assert_eq!(fs::read_link(&destination).unwrap(), target);
        assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
    }

    #[test]
    fn test_plan_does_not_touch_disk() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let target = temp_dir.path().join("target");
        let organizer = Organizer::default();

        let plan = organizer.plan(Path::new("/downloads/photo.JPG"), &target);

        assert_eq!(plan.category, "Images");
        assert_eq!(plan.destination, target.join("Images").join("photo.JPG"));
        assert!(!target.exists());
    }

    #[test]
    fn test_prepare_source_missing_without_create() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("missing");

        let result = prepare_source(&source, false);
        assert!(matches!(result, Err(OrganizeError::SourceNotFound { .. })));
        assert!(!source.exists());
    }

    #[test]
    fn test_prepare_source_creates_parents() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("a").join("b");

        assert!(prepare_source(&source, true).expect("Failed to prepare source"));
        assert!(source.is_dir());
        assert!(!prepare_source(&source, true).expect("Failed to prepare source"));
    }

    #[test]
    fn test_prepare_source_rejects_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("file.txt");
        touch(&source);

        let result = prepare_source(&source, true);
        assert!(matches!(
            result,
            Err(OrganizeError::SourceNotADirectory { .. })
        ));
    }

    #[test]
    fn test_list_entries_sorted() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        for name in ["c.txt", "a.txt", "b.txt"] {
            touch(&temp_dir.path().join(name));
        }

        let names: Vec<_> = list_entries(temp_dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_dry_run_reserves_planned_destinations() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("src");
        let target = temp_dir.path().join("target");
        fs::create_dir_all(target.join("Documents")).unwrap();
        fs::create_dir(&source).unwrap();
        touch(&target.join("Documents").join("notes.txt"));
        touch(&source.join("notes.txt"));
        touch(&source.join("notes_1.txt"));

        let organizer = Organizer::default();
        let options = OrganizeOptions::new(&source, &target).dry_run(true);
        let dry = organizer.organize(&options).expect("Dry run failed");
        let live = organizer
            .organize(&options.clone().dry_run(false))
            .expect("Live run failed");

        let destinations = |result: &RunResult| -> Vec<Option<PathBuf>> {
            result.outcomes.iter().map(|o| o.destination.clone()).collect()
        };
        assert_eq!(destinations(&dry), destinations(&live));
        assert!(target.join("Documents").join("notes_1.txt").exists());
        assert!(target.join("Documents").join("notes_1_1.txt").exists());
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(Action::Moved.label(), "moved");
        assert_eq!(Action::WouldMove.label(), "dry-run");
        assert_eq!(
            Action::Skipped {
                reason: String::new()
            }
            .label(),
            "skipped"
        );
        assert_eq!(
            Action::Failed {
                reason: String::new()
            }
            .label(),
            "failed"
        );
    }

    #[test]
    fn test_outcome_serializes_with_action_tag() {
        let outcome = FileOutcome {
            action: Action::Moved,
            source: PathBuf::from("/in/a.txt"),
            destination: Some(PathBuf::from("/out/Documents/a.txt")),
            category: Some("Documents".to_string()),
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["action"], "moved");
        assert_eq!(json["source"], "/in/a.txt");
        assert_eq!(json["destination"], "/out/Documents/a.txt");
        assert_eq!(json["category"], "Documents");
    }
}
