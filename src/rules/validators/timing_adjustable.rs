use regex::Regex;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Severity, Violation};

use super::RuleValidator;
use super::support::{line_of_offset, snippet};

const SESSION_ENDING_HINTS: &[&str] = &[
    "logout", "logOut", "signout", "signOut", "redirect", "location.href", "router.push",
    "router.replace", "close", "dismiss", "hide",
];

/// Delays shorter than this before a session-ending action deny users any
/// realistic reaction time.
const MIN_REACTION_MS: u64 = 2000;

/// WCAG 2.2.1: timed actions that end a session, redirect, or dismiss
/// content must leave the user in control.
pub struct TimingAdjustableValidator {
    timeout_pattern: Regex,
}

impl Default for TimingAdjustableValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingAdjustableValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            // Simple literal-delay calls only; computed delays are not resolved.
            timeout_pattern: Regex::new(r"(?s)set(?:Timeout|Interval)\s*\((.*?),\s*(\d+)\s*\)")
                .expect("Invalid regex"),
        }
    }
}

impl RuleValidator for TimingAdjustableValidator {
    fn rule_id(&self) -> RuleId {
        RuleId::TimingAdjustable
    }

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation> {
        let script = &component.script;
        let mut violations = Vec::new();

        for caps in self.timeout_pattern.captures_iter(script) {
            let m = caps.get(0).expect("capture 0 always present");
            let body = caps.get(1).map_or("", |b| b.as_str());
            let Some(hint) = SESSION_ENDING_HINTS.iter().find(|h| body.contains(*h)) else {
                continue;
            };
            let delay_ms: u64 = caps
                .get(2)
                .and_then(|d| d.as_str().parse().ok())
                .unwrap_or(0);

            let line = line_of_offset(script, m.start());
            if delay_ms < MIN_REACTION_MS {
                violations.push(
                    Violation::new(
                        RuleId::TimingAdjustable,
                        Severity::Error,
                        format!(
                            "Delayed \"{hint}\" fires after {delay_ms}ms, denying users reaction time"
                        ),
                        "Let the user trigger, extend, or cancel the action instead of racing a timer",
                    )
                    .at_line(line)
                    .with_content(snippet(m.as_str())),
                );
            } else {
                violations.push(
                    Violation::new(
                        RuleId::TimingAdjustable,
                        Severity::Warning,
                        format!("Timer triggers \"{hint}\" after {delay_ms}ms"),
                        "Provide a way to turn off, adjust, or extend the time limit",
                    )
                    .at_line(line)
                    .with_content(snippet(m.as_str())),
                );
            }
        }

        violations
    }
}

#[cfg(test)]
#[path = "timing_adjustable_tests.rs"]
mod tests;
