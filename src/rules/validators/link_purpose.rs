use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{attr_value, has_accessible_name, inner_text, line_of_offset, snippet};

const GENERIC_PHRASES: &[&str] = &[
    "click here", "here", "read more", "more", "learn more", "link", "this", "details",
    "click", "go",
];

/// WCAG 2.4.4: link text must describe the destination.
pub struct LinkPurposeValidator {
    link_pattern: Regex,
    img_pattern: Regex,
}

impl Default for LinkPurposeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkPurposeValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            link_pattern: Regex::new(r"(?s)<a\b[^>]*>(.*?)</a>").expect("Invalid regex"),
            img_pattern: Regex::new(r"<img\b[^>]*>").expect("Invalid regex"),
        }
    }

    fn image_alternative(&self, inner: &str) -> Option<bool> {
        self.img_pattern.find(inner).map(|img| {
            attr_value(img.as_str(), "alt").is_some_and(|alt| !alt.trim().is_empty())
        })
    }
}

impl RuleValidator for LinkPurposeValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::LinkPurpose
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for caps in self.link_pattern.captures_iter(template) {
            let whole = caps.get(0).expect("capture 0 always present");
            let inner = caps.get(1).map_or("", |m| m.as_str());
            let opening_end = whole.as_str().find('>').map_or(0, |i| i + 1);
            let opening = &whole.as_str()[..opening_end];
            let line = line_of_offset(template, whole.start());

            let text = inner_text(inner);
            // Bound text cannot be judged statically.
            if text.contains("{{") {
                continue;
            }

            if text.is_empty() {
                if let Some(has_alt) = self.image_alternative(inner) {
                    if !has_alt && !has_accessible_name(opening) {
                        violations.push(
                            Violation::new(
                                RuleId::LinkPurpose,
                                Severity::Error,
                                "Image-only link has no text alternative",
                                "Give the image a descriptive alt, or label the link itself",
                            )
                            .at_line(line)
                            .with_content(snippet(whole.as_str())),
                        );
                    }
                } else if !has_accessible_name(opening) {
                    violations.push(
                        Violation::new(
                            RuleId::LinkPurpose,
                            Severity::Error,
                            "Link has no text and no accessible name",
                            "Add link text or an aria-label describing the destination",
                        )
                        .at_line(line)
                        .with_content(snippet(whole.as_str())),
                    );
                }
                continue;
            }

            let lowered = text.to_lowercase();
            if GENERIC_PHRASES.contains(&lowered.trim()) && !has_accessible_name(opening) {
                violations.push(
                    Violation::new(
                        RuleId::LinkPurpose,
                        Severity::Warning,
                        format!("Link text \"{text}\" does not describe the destination"),
                        "Rewrite the link text to name its target, or add an aria-label",
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
#[path = "link_purpose_tests.rs"]
mod tests;
