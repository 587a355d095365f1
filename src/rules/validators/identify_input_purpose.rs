use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{attr_value, has_attr, line_of_offset, snippet};

const IDENTITY_HINTS: &[&str] = &[
    "email", "e-mail", "tel", "phone", "firstname", "first-name", "first_name", "lastname",
    "last-name", "last_name", "fullname", "full-name", "full_name", "address", "street", "city",
    "postal", "zip", "country", "birthday", "birthdate",
];

/// WCAG 1.3.5: inputs collecting common personal data should declare an
/// autocomplete purpose.
pub struct IdentifyInputPurposeValidator {
    input_pattern: Regex,
}

impl Default for IdentifyInputPurposeValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifyInputPurposeValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input_pattern: Regex::new(r"<input\b[^>]*>").expect("Invalid regex"),
        }
    }

    fn identity_hint(tag: &str) -> Option<&'static str> {
        let fields: [Option<&str>; 3] = [
            attr_value(tag, "type"),
            attr_value(tag, "name"),
            attr_value(tag, "id"),
        ];
        for value in fields.into_iter().flatten() {
            let value = value.to_lowercase();
            if let Some(hint) = IDENTITY_HINTS.iter().find(|h| value.contains(*h)) {
                return Some(hint);
            }
        }
        None
    }
}

impl RuleValidator for IdentifyInputPurposeValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::IdentifyInputPurpose
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for m in self.input_pattern.find_iter(template) {
            let tag = m.as_str();
            if has_attr(tag, "autocomplete") {
                continue;
            }
            if let Some(hint) = Self::identity_hint(tag) {
                violations.push(
                    Violation::new(
                        RuleId::IdentifyInputPurpose,
                        Severity::Warning,
                        format!("Input collecting \"{hint}\" data has no autocomplete purpose"),
                        "Add an autocomplete attribute naming the input purpose",
                    )
                    .at_line(line_of_offset(template, m.start()))
                    .with_content(snippet(tag)),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
#[path = "identify_input_purpose_tests.rs"]
mod tests;
