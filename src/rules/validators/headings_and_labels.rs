use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{inner_text, line_of_offset, snippet};

const FILLER_HEADINGS: &[&str] = &["heading", "title", "untitled", "header", "lorem ipsum"];

/// WCAG 2.4.6: headings must describe their section.
pub struct HeadingsAndLabelsValidator {
    heading_pattern: Regex,
}

impl Default for HeadingsAndLabelsValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl HeadingsAndLabelsValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heading_pattern: Regex::new(r"(?s)<h([1-6])\b[^>]*>(.*?)</h[1-6]>")
                .expect("Invalid regex"),
        }
    }
}

impl RuleValidator for HeadingsAndLabelsValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::HeadingsAndLabels
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for caps in self.heading_pattern.captures_iter(template) {
            let whole = caps.get(0).expect("capture 0 always present");
            let level = caps.get(1).map_or("?", |l| l.as_str());
            let text = inner_text(caps.get(2).map_or("", |m| m.as_str()));
            let line = line_of_offset(template, whole.start());

            if text.contains("{{") {
                continue;
            }
            if text.is_empty() {
                violations.push(
                    Violation::new(
                        RuleId::HeadingsAndLabels,
                        Severity::Error,
                        format!("Empty h{level} heading"),
                        "Give the heading text describing its section, or remove it",
                    )
                    .at_line(line)
                    .with_content(snippet(whole.as_str())),
                );
            } else if FILLER_HEADINGS.contains(&text.to_lowercase().trim()) {
                violations.push(
                    Violation::new(
                        RuleId::HeadingsAndLabels,
                        Severity::Warning,
                        format!("Heading text \"{text}\" is generic filler"),
                        "Replace the placeholder with a descriptive heading",
                    )
                    .at_line(line)
                    .with_content(snippet(whole.as_str())),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
#[path = "headings_and_labels_tests.rs"]
mod tests;
