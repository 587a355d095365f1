use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;

/// WCAG 2.4.1: a page needs a main landmark or a skip link.
///
/// Page-scoped; the applicability filter keeps this off item-level
/// components.
pub struct BypassBlocksValidator {
    main_landmark_pattern: Regex,
    skip_link_pattern: Regex,
}

impl Default for BypassBlocksValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl BypassBlocksValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            main_landmark_pattern: Regex::new(r#"<main\b|role\s*=\s*["']main["']"#)
                .expect("Invalid regex"),
            skip_link_pattern: Regex::new(
                r#"(?i)href\s*=\s*["']#(?:main|content)[^"']*["']|class\s*=\s*["'][^"']*skip[^"']*["']"#,
            )
            .expect("Invalid regex"),
        }
    }
}

impl RuleValidator for BypassBlocksValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::BypassBlocks
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        if template.trim().is_empty() {
            return Vec::new();
        }
        if self.main_landmark_pattern.is_match(template)
            || self.skip_link_pattern.is_match(template)
        {
            return Vec::new();
        }

        vec![Violation::new(
            RuleId::BypassBlocks,
            Severity::Error,
            "Page has no main landmark and no skip link",
            "Wrap the primary content in <main>, or add a skip link targeting it",
        )]
    }
}

#[cfg(test)]
#[path = "bypass_blocks_tests.rs"]
mod tests;
