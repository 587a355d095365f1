mod filter;

pub use filter::{ComponentFilter, FileFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Identifies one discovered component source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMetadata {
    pub name: String,
    pub path: PathBuf,
}

impl ComponentMetadata {
    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("component")
            .to_string();
        Self { name, path }
    }
}

/// Trait for discovering component files under a root directory.
pub trait ComponentScanner {
    /// Scan a directory tree and return all matching components, sorted by path.
    ///
    /// Unreadable entries are skipped; a missing or unreadable root yields an
    /// empty list rather than an error.
    fn scan(&self, root: &Path) -> Vec<ComponentMetadata>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }
}

impl<F: FileFilter> ComponentScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Vec<ComponentMetadata> {
        let mut components: Vec<ComponentMetadata> = WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| self.filter.should_include(p))
            .map(ComponentMetadata::from_path)
            .collect();
        components.sort_by(|a, b| a.path.cmp(&b.path));
        components
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
