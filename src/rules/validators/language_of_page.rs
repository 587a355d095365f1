use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{line_of_offset, snippet};

/// WCAG 3.1.1: pages must declare a valid document language.
///
/// Page-scoped; the applicability filter keeps this off item-level
/// components.
pub struct LanguageOfPageValidator {
    lang_attr_pattern: Regex,
    valid_code_pattern: Regex,
}

impl Default for LanguageOfPageValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageOfPageValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lang_attr_pattern: Regex::new(r#"(?:^|[\s:])lang\s*=\s*["']([^"']*)["']"#)
                .expect("Invalid regex"),
            // Two-letter primary tag, optional region/script qualifier.
            valid_code_pattern: Regex::new(r"^[a-zA-Z]{2}(-[a-zA-Z]{2,4})?$")
                .expect("Invalid regex"),
        }
    }
}

impl RuleValidator for LanguageOfPageValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::LanguageOfPage
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        if template.trim().is_empty() {
            return Vec::new();
        }

        let Some(caps) = self.lang_attr_pattern.captures(template) else {
            return vec![Violation::new(
                RuleId::LanguageOfPage,
                Severity::Error,
                "Page declares no document language",
                "Add a lang attribute with a two-letter language code to the page root",
            )];
        };

        let m = caps.get(0).expect("capture 0 always present");
        let code = caps.get(1).map_or("", |c| c.as_str());
        // Bound :lang values cannot be judged statically.
        if m.as_str().starts_with(':')
            || code.contains('{')
            || self.valid_code_pattern.is_match(code)
        {
            return Vec::new();
        }

        vec![
            Violation::new(
                RuleId::LanguageOfPage,
                Severity::Error,
                format!("Declared language code \"{code}\" is not a valid language tag"),
                "Use a two-letter code, optionally region-qualified (e.g. \"en\" or \"en-US\")",
            )
            .at_line(line_of_offset(template, m.start()))
            .with_content(snippet(m.as_str())),
        ]
    }
}

#[cfg(test)]
#[path = "language_of_page_tests.rs"]
mod tests;
