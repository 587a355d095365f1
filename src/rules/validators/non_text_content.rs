use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{attr_value, has_accessible_name, inner_text, line_of_offset, snippet};

/// WCAG 1.1.1: graphics need text alternatives, decorative graphics need
/// explicitly empty ones, icon-only controls need an accessible label.
pub struct NonTextContentValidator {
    img_pattern: Regex,
    svg_pattern: Regex,
    button_pattern: Regex,
    icon_pattern: Regex,
}

impl Default for NonTextContentValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl NonTextContentValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            img_pattern: Regex::new(r"<img\b[^>]*>").expect("Invalid regex"),
            svg_pattern: Regex::new(r"<svg\b[^>]*>").expect("Invalid regex"),
            button_pattern: Regex::new(r"(?s)<button\b[^>]*>(.*?)</button>")
                .expect("Invalid regex"),
            icon_pattern: Regex::new(r"(?i)<(?:i|svg|span)\b[^>]*\bclass\s*=\s*.[^>]*icon|<[a-z-]*icon\b")
                .expect("Invalid regex"),
        }
    }

    fn is_decorative(tag: &str) -> bool {
        attr_value(tag, "role").is_some_and(|r| r == "presentation" || r == "none")
            || attr_value(tag, "aria-hidden").is_some_and(|v| v == "true")
    }

    fn check_img(tag: &str, line: usize, violations: &mut Vec<Violation>) {
        // A bound :alt counts as a present, non-empty alternative.
        let alt = attr_value(tag, "alt");
        if Self::is_decorative(tag) {
            if alt.is_none_or(|v| !v.trim().is_empty()) {
                violations.push(
                    Violation::new(
                        RuleId::NonTextContent,
                        Severity::Error,
                        "Decorative image must carry an explicitly empty alt attribute",
                        "Add alt=\"\" to the decorative image",
                    )
                    .at_line(line)
                    .with_content(snippet(tag)),
                );
            }
            return;
        }

        match alt {
            None => violations.push(
                Violation::new(
                    RuleId::NonTextContent,
                    Severity::Error,
                    "Image is missing an alt attribute",
                    "Add a descriptive alt attribute, or mark the image decorative with \
                     alt=\"\" and role=\"presentation\"",
                )
                .at_line(line)
                .with_content(snippet(tag)),
            ),
            Some(value) if value.trim().is_empty() => violations.push(
                Violation::new(
                    RuleId::NonTextContent,
                    Severity::Error,
                    "Image has an empty alt attribute but is not marked decorative",
                    "Describe the image, or add role=\"presentation\" if it is decorative",
                )
                .at_line(line)
                .with_content(snippet(tag)),
            ),
            Some(_) => {}
        }
    }
}

impl RuleValidator for NonTextContentValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::NonTextContent
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for m in self.img_pattern.find_iter(template) {
            Self::check_img(m.as_str(), line_of_offset(template, m.start()), &mut violations);
        }

        for m in self.svg_pattern.find_iter(template) {
            let tag = m.as_str();
            if Self::is_decorative(tag) || has_accessible_name(tag) {
                continue;
            }
            if attr_value(tag, "role").is_some_and(|r| r == "img") {
                continue;
            }
            violations.push(
                Violation::new(
                    RuleId::NonTextContent,
                    Severity::Error,
                    "Inline SVG has no accessible name and is not hidden from assistive technology",
                    "Add aria-label or a title, or hide it with aria-hidden=\"true\"",
                )
                .at_line(line_of_offset(template, m.start()))
                .with_content(snippet(tag)),
            );
        }

        for caps in self.button_pattern.captures_iter(template) {
            let whole = caps.get(0).expect("capture 0 always present");
            let inner = caps.get(1).map_or("", |m| m.as_str());
            let opening_end = whole.as_str().find('>').map_or(0, |i| i + 1);
            let opening = &whole.as_str()[..opening_end];

            let icon_only = inner_text(inner).is_empty() && self.icon_pattern.is_match(inner);
            if icon_only && !has_accessible_name(opening) {
                violations.push(
                    Violation::new(
                        RuleId::NonTextContent,
                        Severity::Error,
                        "Icon-only button has no accessible label",
                        "Add an aria-label describing the action",
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
#[path = "non_text_content_tests.rs"]
mod tests;
