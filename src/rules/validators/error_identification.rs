use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{attr_value, has_attr, inner_text, line_of_offset, snippet};

/// WCAG 3.3.1: errors must be identified in text, not styling alone.
pub struct ErrorIdentificationValidator {
    error_styled_pattern: Regex,
    invalid_input_pattern: Regex,
}

impl Default for ErrorIdentificationValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorIdentificationValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            error_styled_pattern: Regex::new(
                r#"(?s)<([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*class\s*=\s*"[^"]*\b(?:error|invalid|danger)\b[^"]*"[^>]*>"#,
            )
            .expect("Invalid regex"),
            invalid_input_pattern: Regex::new(
                r#"(?s)<(?:input|select|textarea)\b[^>]*aria-invalid\s*=\s*["']true["'][^>]*>"#,
            )
            .expect("Invalid regex"),
        }
    }
}

impl RuleValidator for ErrorIdentificationValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::ErrorIdentification
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for caps in self.error_styled_pattern.captures_iter(template) {
            let m = caps.get(0).expect("capture 0 always present");
            let opening = m.as_str();
            if attr_value(opening, "role").is_some_and(|r| r == "alert")
                || has_attr(opening, "aria-live")
            {
                continue;
            }

            let tag_name = caps.get(1).map_or("", |t| t.as_str());
            let close = format!("</{tag_name}>");
            let body = template[m.end()..]
                .split_once(close.as_str())
                .map_or("", |(body, _)| body);
            if !inner_text(body).is_empty() {
                continue;
            }

            violations.push(
                Violation::new(
                    RuleId::ErrorIdentification,
                    Severity::Error,
                    "Error state is conveyed only by styling, with no text or alert role",
                    "Describe the error in text, or expose it with role=\"alert\"",
                )
                .at_line(line_of_offset(template, m.start()))
                .with_content(snippet(opening)),
            );
        }

        for m in self.invalid_input_pattern.find_iter(template) {
            let tag = m.as_str();
            if has_attr(tag, "aria-describedby") || has_attr(tag, "aria-errormessage") {
                continue;
            }
            violations.push(
                Violation::new(
                    RuleId::ErrorIdentification,
                    Severity::Warning,
                    "Invalid input does not reference an error description",
                    "Point aria-describedby at the element explaining the error",
                )
                .at_line(line_of_offset(template, m.start()))
                .with_content(snippet(tag)),
            );
        }

        violations
    }
}

#[cfg(test)]
#[path = "error_identification_tests.rs"]
mod tests;
