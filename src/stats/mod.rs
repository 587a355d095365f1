use indexmap::IndexMap;
use serde::Serialize;

use crate::audit::{ComponentAuditResult, RuleOutcome};
use crate::rules::RuleId;

/// Per-rule aggregation across all audited components.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleStatistics {
    pub rule_id: RuleId,
    pub rule_name: &'static str,
    pub passed: usize,
    pub failed: usize,
    pub not_applicable: usize,
    pub total_applicable: usize,
    pub conformity_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_components: usize,
    pub components_with_violations: usize,
    pub total_violations: usize,
    pub overall_conformity_percent: f64,
    pub by_rule: IndexMap<RuleId, usize>,
    pub rule_statistics: Vec<RuleStatistics>,
}

#[allow(clippy::cast_precision_loss)] // Counts are far below f64 precision limits
fn percent(passed: usize, applicable: usize) -> f64 {
    if applicable == 0 {
        // Zero-applicable convention: nothing could fail.
        100.0
    } else {
        passed as f64 / applicable as f64 * 100.0
    }
}

/// Count PASSED/FAILED/NOT_APPLICABLE per rule over all components.
#[must_use]
pub fn rule_statistics(
    components: &[ComponentAuditResult],
    rules: &[RuleId],
) -> Vec<RuleStatistics> {
    rules
        .iter()
        .map(|&rule_id| {
            let (mut passed, mut failed, mut not_applicable) = (0, 0, 0);
            for component in components {
                for status in &component.rule_statuses {
                    if status.rule_id != rule_id {
                        continue;
                    }
                    match status.status {
                        RuleOutcome::Passed => passed += 1,
                        RuleOutcome::Failed => failed += 1,
                        RuleOutcome::NotApplicable => not_applicable += 1,
                    }
                }
            }
            let total_applicable = passed + failed;
            RuleStatistics {
                rule_id,
                rule_name: rule_id.name(),
                passed,
                failed,
                not_applicable,
                total_applicable,
                conformity_percent: percent(passed, total_applicable),
            }
        })
        .collect()
}

/// Overall conformity is the ratio of summed passed to summed applicable
/// evaluations across rules. A rule applicable to many components weighs
/// proportionally more than a rarely-applicable one; this is not the mean
/// of the per-rule percentages.
#[must_use]
pub fn overall_conformity(statistics: &[RuleStatistics]) -> f64 {
    let total_passed: usize = statistics.iter().map(|s| s.passed).sum();
    let total_applicable: usize = statistics.iter().map(|s| s.total_applicable).sum();
    percent(total_passed, total_applicable)
}

/// Pure aggregation over accumulated component results.
#[must_use]
pub fn summarize(components: &[ComponentAuditResult], rules: &[RuleId]) -> Summary {
    let statistics = rule_statistics(components, rules);

    let by_rule: IndexMap<RuleId, usize> = rules
        .iter()
        .map(|&rule_id| {
            let count = components
                .iter()
                .flat_map(|c| &c.violations)
                .filter(|v| v.rule_id == rule_id)
                .count();
            (rule_id, count)
        })
        .collect();

    Summary {
        total_components: components.len(),
        components_with_violations: components
            .iter()
            .filter(|c| !c.violations.is_empty())
            .count(),
        total_violations: components.iter().map(|c| c.violations.len()).sum(),
        overall_conformity_percent: overall_conformity(&statistics),
        by_rule,
        rule_statistics: statistics,
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
