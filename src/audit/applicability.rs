use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::rules::RuleId;

/// Component classification inferred from path/name convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Page,
    Layout,
    Item,
    Generic,
}

impl ComponentType {
    pub const ALL: [Self; 4] = [Self::Page, Self::Layout, Self::Item, Self::Generic];

    /// Infer the type from the file's location and the component name.
    /// Directory convention wins over name suffix.
    #[must_use]
    pub fn infer(path: &Path, name: &str) -> Self {
        let in_dir = |dir: &str| {
            path.iter()
                .filter_map(|seg| seg.to_str())
                .any(|seg| seg.eq_ignore_ascii_case(dir))
        };
        if in_dir("pages") || in_dir("views") {
            return Self::Page;
        }
        if in_dir("layouts") {
            return Self::Layout;
        }
        if name.ends_with("Page") || name.ends_with("View") || name.ends_with("Screen") {
            return Self::Page;
        }
        if name.ends_with("Layout") {
            return Self::Layout;
        }
        if name.ends_with("Item") || name.ends_with("Cell") || name.ends_with("Row") {
            return Self::Item;
        }
        Self::Generic
    }

    /// Page/section-level components receive the page-scoped rules.
    #[must_use]
    pub const fn is_page_level(self) -> bool {
        matches!(self, Self::Page | Self::Layout)
    }
}

impl std::str::FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "page" => Ok(Self::Page),
            "layout" => Ok(Self::Layout),
            "item" => Ok(Self::Item),
            "generic" => Ok(Self::Generic),
            _ => Err(format!("Unknown component type: {s}")),
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page => f.write_str("page"),
            Self::Layout => f.write_str("layout"),
            Self::Item => f.write_str("item"),
            Self::Generic => f.write_str("generic"),
        }
    }
}

/// Per-component partition of the configured rule set.
///
/// Rules filtered out by component type are never dropped; they surface as
/// explicit NOT_APPLICABLE statuses downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSplit {
    pub applicable: Vec<RuleId>,
    pub not_applicable: Vec<RuleId>,
}

#[must_use]
pub fn split_rules(component_type: ComponentType, configured: &[RuleId]) -> RuleSplit {
    let (applicable, not_applicable) = configured
        .iter()
        .copied()
        .partition(|rule| !rule.is_page_scoped() || component_type.is_page_level());
    RuleSplit {
        applicable,
        not_applicable,
    }
}

#[cfg(test)]
#[path = "applicability_tests.rs"]
mod tests;
