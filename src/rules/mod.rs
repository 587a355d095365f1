mod catalog;
pub mod validators;

pub use catalog::RuleInfo;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

/// The fixed catalog of WCAG success criteria this tool checks.
///
/// Identifiers serialize as the WCAG criterion number (e.g. `"1.1.1"`).
/// The catalog is append-only; dispatch never depends on it, only display
/// and configuration lookup do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    NonTextContent,
    InfoAndRelationships,
    IdentifyInputPurpose,
    UseOfColor,
    Keyboard,
    TimingAdjustable,
    BypassBlocks,
    LinkPurpose,
    HeadingsAndLabels,
    LabelInName,
    LanguageOfPage,
    ConsistentIdentification,
    ErrorIdentification,
    LabelsOrInstructions,
    NameRoleValue,
    StatusMessages,
}

impl RuleId {
    /// Every rule in the catalog, in stable display order.
    pub const ALL: [Self; 16] = [
        Self::NonTextContent,
        Self::InfoAndRelationships,
        Self::IdentifyInputPurpose,
        Self::UseOfColor,
        Self::Keyboard,
        Self::TimingAdjustable,
        Self::BypassBlocks,
        Self::LinkPurpose,
        Self::HeadingsAndLabels,
        Self::LabelInName,
        Self::LanguageOfPage,
        Self::ConsistentIdentification,
        Self::ErrorIdentification,
        Self::LabelsOrInstructions,
        Self::NameRoleValue,
        Self::StatusMessages,
    ];

    /// WCAG success criterion number.
    #[must_use]
    pub const fn criterion(self) -> &'static str {
        match self {
            Self::NonTextContent => "1.1.1",
            Self::InfoAndRelationships => "1.3.1",
            Self::IdentifyInputPurpose => "1.3.5",
            Self::UseOfColor => "1.4.1",
            Self::Keyboard => "2.1.1",
            Self::TimingAdjustable => "2.2.1",
            Self::BypassBlocks => "2.4.1",
            Self::LinkPurpose => "2.4.4",
            Self::HeadingsAndLabels => "2.4.6",
            Self::LabelInName => "2.5.3",
            Self::LanguageOfPage => "3.1.1",
            Self::ConsistentIdentification => "3.2.4",
            Self::ErrorIdentification => "3.3.1",
            Self::LabelsOrInstructions => "3.3.2",
            Self::NameRoleValue => "4.1.2",
            Self::StatusMessages => "4.1.3",
        }
    }

    /// Short human-readable rule name from the catalog.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.info().name
    }

    /// Whether the rule only makes sense for page/section-level components.
    #[must_use]
    pub const fn is_page_scoped(self) -> bool {
        matches!(self, Self::BypassBlocks | Self::LanguageOfPage)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.criterion())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.criterion() == s || rule.info().slug == s)
            .ok_or_else(|| format!("Unknown rule id: {s}"))
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.criterion())
    }
}

impl<'de> Deserialize<'de> for RuleId {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Severity of a single violation. Does not influence PASSED/FAILED status;
/// any violation fails the rule for that component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
            Self::Info => f.write_str("info"),
        }
    }
}

/// One detected non-conformance instance.
///
/// `rule_name` is always filled from the catalog, so it cannot drift from
/// the emitting validator's id. `line` is 1-based within the extracted
/// section the finding was made in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub rule_id: RuleId,
    pub rule_name: &'static str,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub issue: String,
    pub recommendation: String,
}

impl Violation {
    #[must_use]
    pub fn new(
        rule_id: RuleId,
        severity: Severity,
        issue: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            rule_name: rule_id.name(),
            severity,
            line: None,
            content: None,
            issue: issue.into(),
            recommendation: recommendation.into(),
        }
    }

    #[must_use]
    pub const fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
