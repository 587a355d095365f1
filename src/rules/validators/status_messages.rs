use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{attr_value, has_attr, line_of_offset, snippet};

/// WCAG 4.1.3: status containers need a live-region declaration.
pub struct StatusMessagesValidator {
    status_class_pattern: Regex,
    live_off_pattern: Regex,
}

impl Default for StatusMessagesValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusMessagesValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            status_class_pattern: Regex::new(
                r#"(?s)<[a-zA-Z][a-zA-Z0-9-]*\b[^>]*(?:class|id)\s*=\s*"[^"]*\b(?:status|alert|notification|toast)\b[^"]*"[^>]*>"#,
            )
            .expect("Invalid regex"),
            live_off_pattern: Regex::new(r#"<[^>]*aria-live\s*=\s*["']off["'][^>]*>"#)
                .expect("Invalid regex"),
        }
    }

    fn announces_changes(tag: &str) -> bool {
        has_attr(tag, "aria-live")
            || attr_value(tag, "role").is_some_and(|r| matches!(r.trim(), "status" | "alert" | "log"))
    }
}

impl RuleValidator for StatusMessagesValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::StatusMessages
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for m in self.status_class_pattern.find_iter(template) {
            let tag = m.as_str();
            if Self::announces_changes(tag) {
                continue;
            }
            violations.push(
                Violation::new(
                    RuleId::StatusMessages,
                    Severity::Warning,
                    "Status container has no live-region politeness declaration",
                    "Add role=\"status\" (polite) or role=\"alert\" (assertive) so changes \
                     are announced",
                )
                .at_line(line_of_offset(template, m.start()))
                .with_content(snippet(tag)),
            );
        }

        for m in self.live_off_pattern.find_iter(template) {
            let tag = m.as_str();
            // Turning a region off is only suspicious when the element reacts
            // to data changes.
            if !tag.contains("v-if") && !tag.contains("v-show") && !tag.contains("{{") {
                continue;
            }
            violations.push(
                Violation::new(
                    RuleId::StatusMessages,
                    Severity::Warning,
                    "Reactive element explicitly disables its live region",
                    "Remove aria-live=\"off\" or announce the change elsewhere",
                )
                .at_line(line_of_offset(template, m.start()))
                .with_content(snippet(tag)),
            );
        }

        violations
    }
}

#[cfg(test)]
#[path = "status_messages_tests.rs"]
mod tests;
