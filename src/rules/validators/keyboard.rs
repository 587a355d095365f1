use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{attr_value, has_attr, line_of_offset, snippet};

const INTERACTIVE_ROLES: &[&str] = &[
    "button", "link", "checkbox", "radio", "tab", "menuitem", "switch", "option", "combobox",
    "slider", "textbox",
];

/// WCAG 2.1.1: everything clickable must be reachable by keyboard.
pub struct KeyboardValidator {
    clickable_pattern: Regex,
    keyboard_handler_pattern: Regex,
    disabled_pattern: Regex,
    pointer_events_pattern: Regex,
}

impl Default for KeyboardValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // Non-semantic elements wired with a pointer handler.
            clickable_pattern: Regex::new(
                r"(?s)<(?:div|span|li|td|img|p|section|article)\b[^>]*(?:@click|v-on:click|\bonclick)[^>]*>",
            )
            .expect("Invalid regex"),
            keyboard_handler_pattern: Regex::new(
                r"@key(?:down|up|press)|v-on:key|\bonkey(?:down|up|press)",
            )
            .expect("Invalid regex"),
            disabled_pattern: Regex::new(r"(?s)<(?:button|input|select|textarea|a)\b[^>]*>")
                .expect("Invalid regex"),
            pointer_events_pattern: Regex::new(r"pointer-events\s*:\s*none").expect("Invalid regex"),
        }
    }

    fn has_interactive_role(tag: &str) -> bool {
        attr_value(tag, "role").is_some_and(|role| INTERACTIVE_ROLES.contains(&role.trim()))
    }
}

impl RuleValidator for KeyboardValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::Keyboard
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let template = &component.template;
        let mut violations = Vec::new();

        for m in self.clickable_pattern.find_iter(template) {
            let tag = m.as_str();
            if self.keyboard_handler_pattern.is_match(tag) && Self::has_interactive_role(tag) {
                continue;
            }
            let missing = if self.keyboard_handler_pattern.is_match(tag) {
                "an interactive role"
            } else if Self::has_interactive_role(tag) {
                "a keyboard handler"
            } else {
                "a keyboard handler and an interactive role"
            };
            violations.push(
                Violation::new(
                    RuleId::Keyboard,
                    Severity::Error,
                    format!("Pointer-only click handler on a non-interactive element lacks {missing}"),
                    "Use a native button/link, or add a keydown handler, a role, and tabindex",
                )
                .at_line(line_of_offset(template, m.start()))
                .with_content(snippet(tag)),
            );
        }

        for m in self.disabled_pattern.find_iter(template) {
            let tag = m.as_str();
            if attr_value(tag, "disabled").is_some_and(|v| v.is_empty() || v == "true")
                && !has_attr(tag, "aria-disabled")
            {
                violations.push(
                    Violation::new(
                        RuleId::Keyboard,
                        Severity::Warning,
                        "Disabled control is removed from the keyboard focus order",
                        "Prefer aria-disabled=\"true\" so the control stays discoverable",
                    )
                    .at_line(line_of_offset(template, m.start()))
                    .with_content(snippet(tag)),
                );
            }
        }

        for m in self.pointer_events_pattern.find_iter(template) {
            violations.push(
                Violation::new(
                    RuleId::Keyboard,
                    Severity::Warning,
                    "pointer-events: none disables pointer interaction without an enabled keyboard path",
                    "Ensure the functionality remains reachable by keyboard, or remove the style",
                )
                .at_line(line_of_offset(template, m.start()))
                .with_content(snippet(m.as_str())),
            );
        }

        violations
    }
}

#[cfg(test)]
#[path = "keyboard_tests.rs"]
mod tests;
