mod badge;
mod json;
mod markdown;
mod text;

pub use badge::BadgeRenderer;
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::audit::AuditResult;
use crate::error::Result;

/// Trait for formatting an audit result into various output formats.
pub trait ReportFormatter {
    /// Format the audit result into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &AuditResult) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
