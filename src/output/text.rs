use std::fmt::Write;

use crate::audit::AuditResult;
use crate::error::Result;
use crate::rules::Severity;

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{reset}", reset = ansi::RESET)
        } else {
            text.to_string()
        }
    }

    const fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        }
    }

    fn write_violations(&self, output: &mut String, report: &AuditResult) {
        for component in &report.components {
            if component.violations.is_empty() {
                continue;
            }
            writeln!(
                output,
                "\n{} ({})",
                component.name,
                component.path.display()
            )
            .ok();
            for violation in &component.violations {
                let severity =
                    self.paint(Self::severity_color(violation.severity), &violation.severity.to_string());
                let line = violation
                    .line
                    .map_or(String::new(), |l| format!(" line {l},"));
                writeln!(
                    output,
                    "  [{severity}] {} {}:{line} {}",
                    violation.rule_id, violation.rule_name, violation.issue
                )
                .ok();
                if self.verbose > 0 {
                    if let Some(content) = &violation.content {
                        writeln!(output, "      > {content}").ok();
                    }
                    writeln!(output, "      fix: {}", violation.recommendation).ok();
                }
            }
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &AuditResult) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        writeln!(output, "Accessibility audit").ok();
        writeln!(
            output,
            "  Components: {} audited, {} with violations",
            summary.total_components, summary.components_with_violations
        )
        .ok();
        writeln!(output, "  Violations: {}", summary.total_violations).ok();
        let conformity = format!("{:.1}%", summary.overall_conformity_percent);
        let colored = if summary.overall_conformity_percent >= 90.0 {
            self.paint(ansi::GREEN, &conformity)
        } else if summary.overall_conformity_percent >= 70.0 {
            self.paint(ansi::YELLOW, &conformity)
        } else {
            self.paint(ansi::RED, &conformity)
        };
        writeln!(output, "  Overall conformity: {colored}").ok();

        if self.verbose > 0 {
            writeln!(output, "\nPer-rule conformity:").ok();
            for stat in &summary.rule_statistics {
                writeln!(
                    output,
                    "  {} {:<28} {:>5.1}%  ({} passed, {} failed, {} n/a)",
                    stat.rule_id,
                    stat.rule_name,
                    stat.conformity_percent,
                    stat.passed,
                    stat.failed,
                    stat.not_applicable
                )
                .ok();
            }
        }

        self.write_violations(&mut output, report);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
