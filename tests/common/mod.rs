#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates a temporary directory with component fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates an audit config file in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".a11y-guard.toml", content);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A page component with a landmark, a language attribute, and accessible
/// markup throughout.
pub const CLEAN_PAGE: &str = r#"<template>
  <main lang="en">
    <h1>Dashboard</h1>
    <img src="chart.png" alt="Monthly revenue chart">
    <a href="/reports">View the full revenue report</a>
  </main>
</template>
<script>
export default { name: 'DashboardPage' }
</script>
"#;

/// A component with an image missing alternative text.
pub const MISSING_ALT: &str = r#"<template>
  <div>
    <img src="logo.png">
  </div>
</template>
"#;

/// A component wiring click behavior to a non-interactive element.
pub const POINTER_ONLY: &str = r#"<template>
  <div @click="open">Open menu</div>
</template>
"#;
