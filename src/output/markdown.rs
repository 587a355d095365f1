use std::fmt::Write;

use crate::audit::{AuditResult, ComponentAuditResult};
use crate::error::Result;
use crate::rules::Severity;

use super::ReportFormatter;

pub struct MarkdownFormatter {
    show_passing: bool,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_passing: false,
        }
    }

    #[must_use]
    pub const fn with_passing(mut self, show: bool) -> Self {
        self.show_passing = show;
        self
    }

    const fn severity_icon(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "❌",
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
        }
    }

    fn write_component(output: &mut String, component: &ComponentAuditResult) {
        writeln!(
            output,
            "### {} (`{}`)\n",
            component.name,
            component.path.display()
        )
        .ok();
        writeln!(output, "| | Rule | Line | Issue | Recommendation |").ok();
        writeln!(output, "|---|------|-----:|-------|----------------|").ok();
        for violation in &component.violations {
            writeln!(
                output,
                "| {} | {} {} | {} | {} | {} |",
                Self::severity_icon(violation.severity),
                violation.rule_id,
                violation.rule_name,
                violation.line.map_or(String::from("-"), |l| l.to_string()),
                violation.issue,
                violation.recommendation,
            )
            .ok();
        }
        writeln!(output).ok();
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &AuditResult) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        writeln!(output, "## Accessibility Audit\n").ok();
        writeln!(output, "| Metric | Value |").ok();
        writeln!(output, "|--------|------:|").ok();
        writeln!(output, "| Components audited | {} |", summary.total_components).ok();
        writeln!(
            output,
            "| Components with violations | {} |",
            summary.components_with_violations
        )
        .ok();
        writeln!(output, "| Total violations | {} |", summary.total_violations).ok();
        writeln!(
            output,
            "| Overall conformity | {:.1}% |",
            summary.overall_conformity_percent
        )
        .ok();
        writeln!(output).ok();

        writeln!(output, "## Rule Conformity\n").ok();
        writeln!(
            output,
            "| Rule | Name | Passed | Failed | N/A | Conformity |"
        )
        .ok();
        writeln!(output, "|------|------|-------:|-------:|----:|-----------:|").ok();
        for stat in &summary.rule_statistics {
            writeln!(
                output,
                "| {} | {} | {} | {} | {} | {:.1}% |",
                stat.rule_id,
                stat.rule_name,
                stat.passed,
                stat.failed,
                stat.not_applicable,
                stat.conformity_percent,
            )
            .ok();
        }
        writeln!(output).ok();

        let flagged: Vec<_> = report
            .components
            .iter()
            .filter(|c| self.show_passing || !c.violations.is_empty())
            .collect();
        if !flagged.is_empty() {
            writeln!(output, "## Components\n").ok();
            for component in flagged {
                if component.violations.is_empty() {
                    writeln!(
                        output,
                        "### {} (`{}`)\n\nNo violations.\n",
                        component.name,
                        component.path.display()
                    )
                    .ok();
                } else {
                    Self::write_component(&mut output, component);
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
