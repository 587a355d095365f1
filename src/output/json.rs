use crate::audit::AuditResult;
use crate::error::Result;

use super::ReportFormatter;

/// The audit result serializes directly; the JSON report is the data model.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AuditResult) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
