use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{has_accessible_name, inner_text, line_of_offset, snippet};

/// WCAG 1.4.1: a class name that encodes state as a bare color must be
/// backed by text, an icon, or an accessible label.
pub struct UseOfColorValidator {
    colored_element_pattern: Regex,
    icon_pattern: Regex,
}

impl Default for UseOfColorValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl UseOfColorValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            colored_element_pattern: Regex::new(
                r#"(?s)<([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*class\s*=\s*"[^"]*\b(?:red|green|blue|yellow|orange|gray|grey)\b[^"]*"[^>]*>"#,
            )
            .expect("Invalid regex"),
            icon_pattern: Regex::new(r"(?i)<(?:i|svg)\b|icon").expect("Invalid regex"),
        }
    }
}

impl RuleValidator for UseOfColorValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::UseOfColor
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for caps in self.colored_element_pattern.captures_iter(template) {
            let m = caps.get(0).expect("capture 0 always present");
            let opening = m.as_str();
            if has_accessible_name(opening) {
                continue;
            }

            // Self-closing and void elements carry no text of their own.
            let tag_name = caps.get(1).map_or("", |t| t.as_str());
            let close = format!("</{tag_name}>");
            let body = template[m.end()..]
                .split_once(close.as_str())
                .map_or("", |(body, _)| body);
            if !inner_text(body).is_empty() || self.icon_pattern.is_match(body) {
                continue;
            }

            violations.push(
                Violation::new(
                    RuleId::UseOfColor,
                    Severity::Warning,
                    "Element communicates state through a color class alone",
                    "Add visible text, an icon, or an aria-label alongside the color",
                )
                .at_line(line_of_offset(template, m.start()))
                .with_content(snippet(opening)),
            );
        }

        violations
    }
}

#[cfg(test)]
#[path = "use_of_color_tests.rs"]
mod tests;
