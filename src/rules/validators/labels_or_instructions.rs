use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{attr_value, has_attr, line_of_offset, snippet};

const UNLABELED_EXEMPT_TYPES: &[&str] = &["hidden", "submit", "button", "reset", "image"];

/// WCAG 3.3.2: form controls need labels; a placeholder is not one.
pub struct LabelsOrInstructionsValidator {
    control_pattern: Regex,
}

impl Default for LabelsOrInstructionsValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelsOrInstructionsValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            control_pattern: Regex::new(r"<(?:input|select|textarea)\b[^>]*>")
                .expect("Invalid regex"),
        }
    }

    fn has_associated_label(tag: &str, template: &str) -> bool {
        if has_attr(tag, "aria-label") || has_attr(tag, "aria-labelledby") {
            return true;
        }
        attr_value(tag, "id").is_some_and(|id| {
            let id = id.trim();
            !id.is_empty()
                && (template.contains(&format!("for=\"{id}\""))
                    || template.contains(&format!("for='{id}'")))
        })
    }
}

impl RuleValidator for LabelsOrInstructionsValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::LabelsOrInstructions
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for m in self.control_pattern.find_iter(template) {
            let tag = m.as_str();
            if attr_value(tag, "type")
                .is_some_and(|t| UNLABELED_EXEMPT_TYPES.contains(&t.trim()))
            {
                continue;
            }
            if Self::has_associated_label(tag, template) {
                continue;
            }

            let line = line_of_offset(template, m.start());
            if has_attr(tag, "placeholder") {
                violations.push(
                    Violation::new(
                        RuleId::LabelsOrInstructions,
                        Severity::Error,
                        "Control relies on placeholder text instead of a label",
                        "Add a visible label; placeholders disappear on input and are not \
                         reliably announced",
                    )
                    .at_line(line)
                    .with_content(snippet(tag)),
                );
            } else {
                violations.push(
                    Violation::new(
                        RuleId::LabelsOrInstructions,
                        Severity::Error,
                        "Form control has no label, aria-label, or aria-labelledby",
                        "Associate a label with the control",
                    )
                    .at_line(line)
                    .with_content(snippet(tag)),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
#[path = "labels_or_instructions_tests.rs"]
mod tests;
