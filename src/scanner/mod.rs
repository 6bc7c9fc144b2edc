//! Document discovery.
//!
//! Walks a docs root and returns the Markdown pages to validate, sorted by
//! their path relative to the root.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScanSettings;
use crate::error::{Result, WikilintError};

/// Decides whether a file, given relative to the docs root, is validated.
pub trait DocumentFilter {
    fn should_include(&self, relative: &Path) -> bool;
}

/// Keeps `*.md` files under the included top-level directories, except
/// excluded file names.
#[derive(Debug, Clone)]
pub struct DocsFilter {
    include_dirs: Vec<String>,
    /// Stored lower-cased; names compare case-insensitively.
    exclude_files: Vec<String>,
}

impl DocsFilter {
    pub fn new(include_dirs: Vec<String>, exclude_files: &[String]) -> Self {
        Self {
            include_dirs,
            exclude_files: exclude_files.iter().map(|f| f.to_lowercase()).collect(),
        }
    }

    pub fn from_settings(settings: &ScanSettings) -> Self {
        Self::new(settings.include_dirs.clone(), &settings.exclude_files)
    }

    fn is_markdown(relative: &Path) -> bool {
        relative.extension().is_some_and(|ext| ext == "md")
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        relative
            .file_name()
            .map(|name| name.to_string_lossy().to_lowercase())
            .is_some_and(|name| self.exclude_files.contains(&name))
    }

    fn in_included_dir(&self, relative: &Path) -> bool {
        let mut components = relative.components();
        let first = components.next();
        // Files directly in the root have no top-level directory.
        if components.next().is_none() {
            return false;
        }
        first
            .map(|c| c.as_os_str().to_string_lossy())
            .is_some_and(|dir| self.include_dirs.iter().any(|d| *d == dir))
    }
}

impl DocumentFilter for DocsFilter {
    fn should_include(&self, relative: &Path) -> bool {
        Self::is_markdown(relative) && !self.is_excluded(relative) && self.in_included_dir(relative)
    }
}

/// A page found under the docs root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path on disk.
    pub path: PathBuf,
    /// Path relative to the docs root; used in reports and breadcrumb checks.
    pub relative: PathBuf,
}

pub struct DocumentScanner<F: DocumentFilter> {
    filter: F,
}

impl<F: DocumentFilter> DocumentScanner<F> {
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    /// Every matching file under `root`, sorted by relative path.
    pub fn scan(&self, root: &Path) -> Vec<DiscoveredFile> {
        let mut files: Vec<_> = WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                let relative = e.path().strip_prefix(root).ok()?.to_path_buf();
                Some(DiscoveredFile {
                    path: e.into_path(),
                    relative,
                })
            })
            .filter(|f| self.filter.should_include(&f.relative))
            .inspect(|f| tracing::debug!("Discovered {}", f.relative.display()))
            .collect();

        files.sort_by(|a, b| a.relative.cmp(&b.relative));
        files
    }
}

/// Check that `root` is a directory containing the `marker` directory.
pub fn ensure_docs_root(root: &Path, marker: &str) -> Result<()> {
    if !root.is_dir() {
        return Err(WikilintError::DocsRootNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.join(marker).is_dir() {
        return Err(WikilintError::NotDocsRoot {
            path: root.to_path_buf(),
            marker: marker.to_string(),
        });
    }
    Ok(())
}

/// Check the root and list its pages using `settings`.
pub fn scan_docs(root: &Path, settings: &ScanSettings) -> Result<Vec<DiscoveredFile>> {
    ensure_docs_root(root, &settings.marker_dir)?;
    let scanner = DocumentScanner::new(DocsFilter::from_settings(settings));
    Ok(scanner.scan(root))
}
