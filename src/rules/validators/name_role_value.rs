use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{has_attr, line_of_offset, snippet};

const WIDGET_ROLES: &[&str] = &[
    "button", "link", "checkbox", "radio", "tab", "menuitem", "switch", "option", "combobox",
    "slider", "textbox", "listbox", "menu",
];

/// WCAG 4.1.2: custom widgets need a programmatic role and keyboard focus.
pub struct NameRoleValueValidator {
    role_widget_pattern: Regex,
}

impl Default for NameRoleValueValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameRoleValueValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // Non-semantic elements promoted to widgets via role.
            role_widget_pattern: Regex::new(
                r#"(?s)<(?:div|span|li|td|p|section)\b[^>]*role\s*=\s*["']([a-z]+)["'][^>]*>"#,
            )
            .expect("Invalid regex"),
        }
    }
}

impl RuleValidator for NameRoleValueValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::NameRoleValue
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for caps in self.role_widget_pattern.captures_iter(template) {
            let m = caps.get(0).expect("capture 0 always present");
            let tag = m.as_str();
            let role = caps.get(1).map_or("", |r| r.as_str());
            if !WIDGET_ROLES.contains(&role) {
                continue;
            }
            if has_attr(tag, "tabindex") {
                continue;
            }
            violations.push(
                Violation::new(
                    RuleId::NameRoleValue,
                    Severity::Error,
                    format!("Element with role=\"{role}\" is not keyboard focusable"),
                    "Add tabindex=\"0\" so the widget joins the focus order, or use the \
                     native element",
                )
                .at_line(line_of_offset(template, m.start()))
                .with_content(snippet(tag)),
            );
        }

        // Widgets that toggle need an exposed state.
        for caps in self.role_widget_pattern.captures_iter(template) {
            let m = caps.get(0).expect("capture 0 always present");
            let tag = m.as_str();
            let role = caps.get(1).map_or("", |r| r.as_str());
            if matches!(role, "checkbox" | "radio" | "switch" | "tab")
                && !has_attr(tag, "aria-checked")
                && !has_attr(tag, "aria-selected")
                && !has_attr(tag, "aria-pressed")
            {
                violations.push(
                    Violation::new(
                        RuleId::NameRoleValue,
                        Severity::Error,
                        format!("role=\"{role}\" widget exposes no state"),
                        "Reflect the widget state with aria-checked, aria-selected, or \
                         aria-pressed",
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
#[path = "name_role_value_tests.rs"]
mod tests;
