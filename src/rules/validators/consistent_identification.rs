use std::collections::HashMap;

use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{inner_text, line_of_offset, snippet};

/// Canonical action vocabulary: any of the synonyms identifies the action.
const ACTIONS: &[(&str, &[&str])] = &[
    ("save", &["save", "submit", "apply"]),
    ("delete", &["delete", "remove", "erase", "trash"]),
    ("close", &["close", "dismiss"]),
    ("cancel", &["cancel", "abort"]),
    ("edit", &["edit", "modify"]),
    ("add", &["add", "create", "new"]),
    ("search", &["search", "find"]),
];

/// WCAG 3.2.4: the same canonical action must keep the same label and icon
/// within a component.
///
/// "First seen" tracking lives entirely inside one `validate` call, so the
/// check stays deterministic and order-independent across components.
pub struct ConsistentIdentificationValidator {
    control_pattern: Regex,
    icon_class_pattern: Regex,
}

impl Default for ConsistentIdentificationValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsistentIdentificationValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            control_pattern: Regex::new(r"(?s)<(?:button|a)\b[^>]*>(.*?)</(?:button|a)>")
                .expect("Invalid regex"),
            icon_class_pattern: Regex::new(r"(?:icon|mdi|fa|bi)-([a-z][a-z0-9]*)")
                .expect("Invalid regex"),
        }
    }

    fn canonical_action(text: &str) -> Option<&'static str> {
        let lowered = text.to_lowercase();
        for word in lowered.split(|c: char| !c.is_alphanumeric()) {
            for (action, synonyms) in ACTIONS {
                if synonyms.contains(&word) {
                    return Some(action);
                }
            }
        }
        None
    }
}

impl RuleValidator for ConsistentIdentificationValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::ConsistentIdentification
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        // action -> first (label, line); separate track for icon names.
        let mut first_labels: HashMap<&'static str, (String, usize)> = HashMap::new();
        let mut first_icons: HashMap<&'static str, (String, usize)> = HashMap::new();

        for caps in self.control_pattern.captures_iter(template) {
            let whole = caps.get(0).expect("capture 0 always present");
            let inner = caps.get(1).map_or("", |m| m.as_str());
            let line = line_of_offset(template, whole.start());

            let label = inner_text(inner);
            if !label.is_empty() && !label.contains("{{") {
                if let Some(action) = Self::canonical_action(&label) {
                    match first_labels.get(action) {
                        None => {
                            first_labels.insert(action, (label, line));
                        }
                        Some((first, first_line)) if !first.eq_ignore_ascii_case(&label) => {
                            violations.push(
                                Violation::new(
                                    RuleId::ConsistentIdentification,
                                    Severity::Warning,
                                    format!(
                                        "Action \"{action}\" is labeled \"{label}\" here but \
                                         \"{first}\" on line {first_line}"
                                    ),
                                    "Use one label per action throughout the component",
                                )
                                .at_line(line)
                                .with_content(snippet(whole.as_str())),
                            );
                        }
                        Some(_) => {}
                    }
                }
            }

            if let Some(icon_caps) = self.icon_class_pattern.captures(inner) {
                let icon = icon_caps.get(1).map_or("", |m| m.as_str()).to_string();
                if let Some(action) = Self::canonical_action(&icon) {
                    match first_icons.get(action) {
                        None => {
                            first_icons.insert(action, (icon, line));
                        }
                        Some((first, first_line)) if *first != icon => {
                            violations.push(
                                Violation::new(
                                    RuleId::ConsistentIdentification,
                                    Severity::Warning,
                                    format!(
                                        "Action \"{action}\" uses icon \"{icon}\" here but \
                                         \"{first}\" on line {first_line}"
                                    ),
                                    "Use one icon per action throughout the component",
                                )
                                .at_line(line)
                                .with_content(snippet(whole.as_str())),
                            );
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        violations
    }
}

#[cfg(test)]
#[path = "consistent_identification_tests.rs"]
mod tests;
