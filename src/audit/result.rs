use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::rules::{RuleId, Violation};
use crate::stats::Summary;

use super::applicability::ComponentType;

/// Evaluation outcome of one rule on one component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleOutcome {
    Passed,
    Failed,
    NotApplicable,
}

/// FAILED iff at least one violation was recorded, regardless of severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleStatus {
    pub rule_id: RuleId,
    pub status: RuleOutcome,
    pub violation_count: usize,
}

impl RuleStatus {
    #[must_use]
    pub const fn evaluated(rule_id: RuleId, violation_count: usize) -> Self {
        let status = if violation_count > 0 {
            RuleOutcome::Failed
        } else {
            RuleOutcome::Passed
        };
        Self {
            rule_id,
            status,
            violation_count,
        }
    }

    #[must_use]
    pub const fn not_applicable(rule_id: RuleId) -> Self {
        Self {
            rule_id,
            status: RuleOutcome::NotApplicable,
            violation_count: 0,
        }
    }
}

/// Full evaluation record for one component: exactly one status per rule in
/// the configured set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentAuditResult {
    pub name: String,
    pub path: PathBuf,
    pub component_type: ComponentType,
    pub violations: Vec<Violation>,
    pub rule_statuses: Vec<RuleStatus>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditScope {
    pub components_scanned: usize,
    pub components_with_violations: usize,
    pub rules_applied: usize,
    pub extraction_failures: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditWindow {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_ms: i64,
    pub scope: AuditScope,
}

/// The complete result of one run. Constructed once, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub timestamp: DateTime<Utc>,
    pub audit: AuditWindow,
    pub components: Vec<ComponentAuditResult>,
    pub summary: Summary,
}
