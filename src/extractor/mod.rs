use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{A11yGuardError, Result};
use crate::scanner::ComponentMetadata;

/// Best-effort textual extraction of one component file.
///
/// `template` and `script` are empty strings (never absent) when the file has
/// no matching section. Slices are not guaranteed to be well-formed markup;
/// validators treat them as literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedComponent {
    pub name: String,
    pub path: PathBuf,
    pub template: String,
    pub script: String,
}

/// Pattern-based section slicer for single-file components.
///
/// Intentionally text-based rather than tree-based: tolerant of non-standard
/// syntax, and each downstream check only assumes best-effort slices.
pub struct StructuralExtractor {
    template_pattern: Regex,
    script_pattern: Regex,
    name_pattern: Regex,
}

impl Default for StructuralExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuralExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // First non-greedy match per section; attributes on the opening
            // tag are allowed, nested same-name sections are not resolved.
            template_pattern: Regex::new(r"(?s)<template[^>]*>(.*?)</template>")
                .expect("Invalid regex"),
            script_pattern: Regex::new(r"(?s)<script[^>]*>(.*?)</script>").expect("Invalid regex"),
            name_pattern: Regex::new(r#"name\s*:\s*['"]([^'"]+)['"]"#).expect("Invalid regex"),
        }
    }

    /// Read and slice one component file.
    ///
    /// # Errors
    /// Returns `A11yGuardError::FileRead` if the file cannot be read and
    /// `A11yGuardError::Parse` if its content is not valid UTF-8 text.
    pub fn extract(&self, metadata: &ComponentMetadata) -> Result<NormalizedComponent> {
        let bytes =
            std::fs::read(&metadata.path).map_err(|e| A11yGuardError::FileRead {
                path: metadata.path.clone(),
                source: e,
            })?;
        let source = String::from_utf8(bytes).map_err(|e| A11yGuardError::Parse {
            path: metadata.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(self.extract_source(&source, &metadata.name, &metadata.path))
    }

    /// Slice already-loaded source text. Never fails; missing sections come
    /// back as empty strings.
    #[must_use]
    pub fn extract_source(&self, source: &str, fallback_name: &str, path: &Path) -> NormalizedComponent {
        let template = self.first_capture(&self.template_pattern, source);
        let script = self.first_capture(&self.script_pattern, source);
        let name = self.resolve_name(&script, fallback_name);

        NormalizedComponent {
            name,
            path: path.to_path_buf(),
            template,
            script,
        }
    }

    fn first_capture(&self, pattern: &Regex, source: &str) -> String {
        pattern
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Prefer a declared `name:` inside the script block, else the filename
    /// stem. The result is always non-empty.
    fn resolve_name(&self, script: &str, fallback: &str) -> String {
        let declared = self
            .name_pattern
            .captures(script)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|name| !name.is_empty());

        match declared {
            Some(name) => name.to_string(),
            None if fallback.is_empty() => "component".to_string(),
            None => fallback.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
