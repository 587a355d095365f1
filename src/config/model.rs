use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::audit::ComponentType;
use crate::error::{A11yGuardError, Result};
use crate::rules::RuleId;

/// Audit configuration, loaded from `.a11y-guard.toml` and overridable from
/// the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root directory to scan for components.
    pub target: PathBuf,

    /// Rule subset to evaluate, drawn from the fixed catalog. Default: all.
    pub rules: Vec<RuleId>,

    /// Minimum overall conformity (0-100). 0 means report-only.
    pub min_conformity: f64,

    /// Component types to audit; others are skipped entirely.
    pub component_types: Vec<ComponentType>,

    /// Exclude patterns (glob syntax) applied during scanning.
    pub exclude: Vec<String>,

    /// Diagnostic verbosity (0-2); the CLI -v flag takes the maximum.
    pub verbosity: u8,

    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Report format: text, json, or markdown.
    pub format: String,

    /// Write an SVG conformity badge to this path after the audit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: PathBuf::from("."),
            rules: RuleId::ALL.to_vec(),
            min_conformity: 0.0,
            component_types: ComponentType::ALL.to_vec(),
            exclude: Vec::new(),
            verbosity: 0,
            output: OutputConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            badge: None,
        }
    }
}

impl Config {
    /// Check invariants that TOML deserialization cannot express.
    ///
    /// # Errors
    /// Returns `A11yGuardError::Config` when a value is out of range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.min_conformity) {
            return Err(A11yGuardError::Config(format!(
                "min_conformity must be between 0 and 100, got {}",
                self.min_conformity
            )));
        }
        if self.rules.is_empty() {
            return Err(A11yGuardError::Config(
                "rules must not be empty; omit the field to audit the full catalog".to_string(),
            ));
        }
        if self.component_types.is_empty() {
            return Err(A11yGuardError::Config(
                "component_types must not be empty; omit the field to audit all types".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
