//! Extension-based file categorization.
//!
//! A [`CategoryTable`] maps normalized file extensions (lowercase, leading
//! dot) to category names. A [`Classifier`] owns one table and resolves any
//! extension to a category, falling back to [`OTHER`].
//!
//! # Examples
//!
//! ```
//! use dirsort::file_category::Classifier;
//!
//! let classifier = Classifier::default();
//! assert_eq!(classifier.category_for(".jpg"), "Images");
//! assert_eq!(classifier.category_for("JPG"), "Images");
//! assert_eq!(classifier.category_for(".unknownext"), "Other");
//! assert_eq!(classifier.category_for(""), "Other");
//! ```

use std::collections::HashMap;
use std::path::Path;

/// Catch-all category for extensions that are not in the table.
pub const OTHER: &str = "Other";

/// Normalizes an extension to its canonical lookup form.
///
/// A single leading dot is accepted but not required, and the result is
/// lowercase with exactly one leading dot. Empty input (or a lone `.`) yields
/// an empty string, which never matches a table entry.
///
/// ```
/// use dirsort::file_category::normalize_extension;
///
/// assert_eq!(normalize_extension("JPG"), ".jpg");
/// assert_eq!(normalize_extension(".Tar"), ".tar");
/// assert_eq!(normalize_extension(""), "");
/// ```
pub fn normalize_extension(extension: &str) -> String {
    let bare = extension.strip_prefix('.').unwrap_or(extension);
    if bare.is_empty() {
        return String::new();
    }
    format!(".{}", bare.to_lowercase())
}

/// Ordered mapping from extensions to category names.
///
/// Categories keep the order in which they were added. When an extension is
/// listed under more than one category, the category added first keeps it.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    categories: Vec<String>,
    extension_map: HashMap<String, usize>,
}

impl CategoryTable {
    /// Creates a table with no categories. Every lookup resolves to [`OTHER`].
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Creates the standard table: Images, Documents, Spreadsheets,
    /// Presentations, Videos, Audio, Archives, Code and Executables.
    pub fn standard() -> Self {
        Self::empty()
            .with_category(
                "Images",
                [
                    ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp", ".heic", ".svg",
                ],
            )
            .with_category(
                "Documents",
                [".pdf", ".doc", ".docx", ".txt", ".rtf", ".odt", ".md"],
            )
            .with_category("Spreadsheets", [".xls", ".xlsx", ".csv", ".ods", ".tsv"])
            .with_category("Presentations", [".ppt", ".pptx", ".odp", ".key"])
            .with_category(
                "Videos",
                [
                    ".mp4", ".mkv", ".mov", ".avi", ".wmv", ".flv", ".webm", ".m4v",
                ],
            )
            .with_category(
                "Audio",
                [".mp3", ".wav", ".flac", ".aac", ".ogg", ".m4a", ".wma"],
            )
            .with_category(
                "Archives",
                [".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz"],
            )
            .with_category(
                "Code",
                [
                    ".py", ".js", ".ts", ".java", ".c", ".cpp", ".cs", ".rb", ".go", ".php", ".sh",
                    ".ps1", ".html", ".css", ".json", ".xml", ".yml", ".yaml",
                ],
            )
            .with_category("Executables", [".exe", ".msi", ".bat", ".cmd"])
    }

    /// Builder form of [`CategoryTable::add_category`].
    pub fn with_category<I, S>(mut self, name: &str, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_category(name, extensions);
        self
    }

    /// Adds extensions under a category, creating the category if needed.
    ///
    /// Extensions are normalized with [`normalize_extension`]. Extensions that
    /// already belong to an earlier category are left where they are.
    pub fn add_category<I, S>(&mut self, name: &str, extensions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = match self.categories.iter().position(|c| c == name) {
            Some(index) => index,
            None => {
                self.categories.push(name.to_string());
                self.categories.len() - 1
            }
        };

        for ext in extensions {
            let normalized = normalize_extension(ext.as_ref());
            if normalized.is_empty() {
                continue;
            }
            self.extension_map.entry(normalized).or_insert(index);
        }
    }

    /// Looks up an already-normalized extension.
    pub fn lookup(&self, normalized_extension: &str) -> Option<&str> {
        self.extension_map
            .get(normalized_extension)
            .map(|&index| self.categories[index].as_str())
    }

    /// Category names in table order. [`OTHER`] is only listed if it was added
    /// explicitly.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Number of distinct extensions in the table.
    pub fn extension_count(&self) -> usize {
        self.extension_map.len()
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolves file extensions to category names.
///
/// The classifier holds an immutable [`CategoryTable`]. Lookups are pure and
/// never fail: anything not in the table is [`OTHER`].
#[derive(Debug, Clone)]
pub struct Classifier {
    table: CategoryTable,
}

impl Classifier {
    pub fn new(table: CategoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    /// Returns the category for an extension such as `".jpg"`, `"JPG"` or `""`.
    pub fn category_for(&self, extension: &str) -> &str {
        self.table
            .lookup(&normalize_extension(extension))
            .unwrap_or(OTHER)
    }

    /// Returns the category for a file path, using the text after the last dot
    /// of the file name.
    ///
    /// Dotfiles such as `.bashrc` have no extension and resolve to [`OTHER`].
    pub fn category_for_path(&self, path: &Path) -> &str {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy())
            .unwrap_or_default();
        self.category_for(&extension)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(CategoryTable::default())
    }
}
