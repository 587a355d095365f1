use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{attr_value, inner_text, line_of_offset, snippet};

/// WCAG 2.5.3: when a control has both visible text and an aria-label, the
/// accessible name must contain the visible label.
pub struct LabelInNameValidator {
    control_pattern: Regex,
}

impl Default for LabelInNameValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelInNameValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            control_pattern: Regex::new(r"(?s)<(button|a)\b[^>]*>(.*?)</(?:button|a)>")
                .expect("Invalid regex"),
        }
    }
}

impl RuleValidator for LabelInNameValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::LabelInName
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for caps in self.control_pattern.captures_iter(template) {
            let whole = caps.get(0).expect("capture 0 always present");
            let inner = caps.get(2).map_or("", |m| m.as_str());
            let opening_end = whole.as_str().find('>').map_or(0, |i| i + 1);
            let opening = &whole.as_str()[..opening_end];

            let visible = inner_text(inner);
            if visible.is_empty() || visible.contains("{{") {
                continue;
            }
            let Some(label) = attr_value(opening, "aria-label") else {
                continue;
            };
            let label = label.trim();
            if label.is_empty() || label.contains('{') {
                continue;
            }

            if !label.to_lowercase().contains(&visible.to_lowercase()) {
                violations.push(
                    Violation::new(
                        RuleId::LabelInName,
                        Severity::Warning,
                        format!(
                            "Accessible name \"{label}\" does not contain the visible label \"{visible}\""
                        ),
                        "Start the aria-label with the visible text so speech input can target it",
                    )
                    .at_line(line_of_offset(template, whole.start()))
                    .with_content(snippet(opening)),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
#[path = "label_in_name_tests.rs"]
mod tests;
