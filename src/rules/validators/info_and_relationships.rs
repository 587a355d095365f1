use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{attr_value, line_of_offset, snippet};

/// WCAG 1.3.1: label/control associations must resolve, and heading levels
/// must not skip steps.
pub struct InfoAndRelationshipsValidator {
    label_pattern: Regex,
    heading_pattern: Regex,
}

impl Default for InfoAndRelationshipsValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoAndRelationshipsValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            label_pattern: Regex::new(r"<label\b[^>]*>").expect("Invalid regex"),
            heading_pattern: Regex::new(r"<h([1-6])\b").expect("Invalid regex"),
        }
    }

    fn check_label_targets(&self, template: &str, violations: &mut Vec<Violation>) {
        for m in self.label_pattern.find_iter(template) {
            let tag = m.as_str();
            // Bound :for values cannot be resolved statically.
            if tag.contains(":for") || tag.contains("v-bind:for") {
                continue;
            }
            let Some(target) = attr_value(tag, "for") else {
                continue;
            };
            let target = target.trim();
            if target.is_empty() || target.contains('{') {
                continue;
            }
            let id_needle_double = format!("id=\"{target}\"");
            let id_needle_single = format!("id='{target}'");
            if !template.contains(&id_needle_double) && !template.contains(&id_needle_single) {
                violations.push(
                    Violation::new(
                        RuleId::InfoAndRelationships,
                        Severity::Error,
                        format!("Label references id \"{target}\" but no element declares it"),
                        "Point the label's for attribute at an existing control id",
                    )
                    .at_line(line_of_offset(template, m.start()))
                    .with_content(snippet(tag)),
                );
            }
        }
    }

    fn check_heading_order(&self, template: &str, violations: &mut Vec<Violation>) {
        let mut previous_level: Option<u32> = None;
        for caps in self.heading_pattern.captures_iter(template) {
            let m = caps.get(0).expect("capture 0 always present");
            let level: u32 = caps
                .get(1)
                .and_then(|d| d.as_str().parse().ok())
                .unwrap_or(1);
            if let Some(prev) = previous_level
                && level > prev + 1
            {
                violations.push(
                    Violation::new(
                        RuleId::InfoAndRelationships,
                        Severity::Error,
                        format!("Heading level jumps from h{prev} to h{level}"),
                        "Increase heading levels one step at a time",
                    )
                    .at_line(line_of_offset(template, m.start()))
                    .with_content(snippet(m.as_str())),
                );
            }
            previous_level = Some(level);
        }
    }
}

impl RuleValidator for InfoAndRelationshipsValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::InfoAndRelationships
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.check_label_targets(&component.template, &mut violations);
        self.check_heading_order(&component.template, &mut violations);
        violations
    }
}

#[cfg(test)]
#[path = "info_and_relationships_tests.rs"]
mod tests;
