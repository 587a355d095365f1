use super::*;
use crate::scanner::{ComponentFilter, DirectoryScanner};
use tempfile::TempDir;

fn write_component(dir: &std::path::Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn auditor(rules: Vec<RuleId>) -> Auditor<DirectoryScanner<ComponentFilter>> {
    let filter = ComponentFilter::new("vue", &[]).unwrap();
    Auditor::new(DirectoryScanner::new(filter), rules)
}

const CLEAN_PAGE: &str = "<template>\n  <main lang=\"en\"><h1>Home</h1></main>\n</template>\n";

#[test]
fn audit_produces_one_status_per_configured_rule() {
    let temp_dir = TempDir::new().unwrap();
    write_component(temp_dir.path(), "pages/Home.vue", CLEAN_PAGE);
    write_component(
        temp_dir.path(),
        "components/TodoItem.vue",
        "<template><li>item</li></template>",
    );

    let rules = RuleId::ALL.to_vec();
    let report = auditor(rules.clone()).audit(temp_dir.path());

    assert_eq!(report.components.len(), 2);
    for component in &report.components {
        assert_eq!(component.rule_statuses.len(), rules.len());
        let mut ids: Vec<RuleId> = component.rule_statuses.iter().map(|s| s.rule_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rules.len(), "duplicate status for a rule");
    }
}

#[test]
fn page_rules_are_not_applicable_for_items_rather_than_failed() {
    let temp_dir = TempDir::new().unwrap();
    // Identical markup, one under pages/, one as an Item component.
    let markup = "<template><div><p>No landmark here</p></div></template>";
    write_component(temp_dir.path(), "pages/Settings.vue", markup);
    write_component(temp_dir.path(), "components/SettingsItem.vue", markup);

    let report = auditor(vec![RuleId::BypassBlocks]).audit(temp_dir.path());

    let item = report
        .components
        .iter()
        .find(|c| c.name == "SettingsItem")
        .unwrap();
    assert_eq!(item.rule_statuses[0].status, RuleOutcome::NotApplicable);
    assert!(item.violations.is_empty());

    let page = report
        .components
        .iter()
        .find(|c| c.name == "Settings")
        .unwrap();
    assert_eq!(page.rule_statuses[0].status, RuleOutcome::Failed);
    assert_eq!(page.violations.len(), 1);
    assert_eq!(page.violations[0].severity, crate::rules::Severity::Error);
}

#[test]
fn missing_alt_fails_exactly_one_rule_with_one_error() {
    let temp_dir = TempDir::new().unwrap();
    write_component(
        temp_dir.path(),
        "components/Logo.vue",
        "<template><img src=\"logo.png\"></template>",
    );

    let report = auditor(vec![RuleId::NonTextContent]).audit(temp_dir.path());

    let component = &report.components[0];
    assert_eq!(component.violations.len(), 1);
    assert_eq!(component.violations[0].severity, crate::rules::Severity::Error);
    assert!(component.violations[0].issue.contains("alt"));

    let failed: Vec<_> = component
        .rule_statuses
        .iter()
        .filter(|s| s.status == RuleOutcome::Failed)
        .collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].violation_count, 1);
}

#[test]
fn unparseable_component_is_excluded_but_run_continues() {
    let temp_dir = TempDir::new().unwrap();
    write_component(temp_dir.path(), "components/Good.vue", CLEAN_PAGE);
    std::fs::write(temp_dir.path().join("components/Bad.vue"), [0xff, 0xfe]).unwrap();

    let report = auditor(RuleId::ALL.to_vec()).audit(temp_dir.path());

    assert_eq!(report.components.len(), 1);
    assert_eq!(report.components[0].name, "Good");
    assert_eq!(report.audit.scope.extraction_failures, 1);
    assert_eq!(report.audit.scope.components_scanned, 1);
}

#[test]
fn every_component_failing_still_yields_a_complete_result() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("Bad.vue"), [0xff, 0xfe]).unwrap();

    let report = auditor(RuleId::ALL.to_vec()).audit(temp_dir.path());

    assert_eq!(report.audit.scope.components_scanned, 0);
    // Zero applicable evaluations report full conformity by convention.
    assert!((report.summary.overall_conformity_percent - 100.0).abs() < f64::EPSILON);
}

#[test]
fn results_are_sorted_by_path() {
    let temp_dir = TempDir::new().unwrap();
    write_component(temp_dir.path(), "z/Last.vue", "<template><div/></template>");
    write_component(temp_dir.path(), "a/First.vue", "<template><div/></template>");
    write_component(temp_dir.path(), "m/Mid.vue", "<template><div/></template>");

    let report = auditor(vec![RuleId::NonTextContent]).audit(temp_dir.path());

    let paths: Vec<_> = report.components.iter().map(|c| c.path.clone()).collect();
    let mut sorted = paths.clone();
    sorted.sort();
    assert_eq!(paths, sorted);
}

#[test]
fn component_type_allowlist_skips_other_types() {
    let temp_dir = TempDir::new().unwrap();
    write_component(temp_dir.path(), "pages/Home.vue", CLEAN_PAGE);
    write_component(
        temp_dir.path(),
        "components/TodoItem.vue",
        "<template><li>item</li></template>",
    );

    let filter = ComponentFilter::new("vue", &[]).unwrap();
    let report = Auditor::new(DirectoryScanner::new(filter), RuleId::ALL.to_vec())
        .with_allowed_types(vec![ComponentType::Page])
        .audit(temp_dir.path());

    assert_eq!(report.components.len(), 1);
    assert_eq!(report.components[0].name, "Home");
}

#[test]
fn timestamps_and_scope_are_consistent() {
    let temp_dir = TempDir::new().unwrap();
    write_component(temp_dir.path(), "pages/Home.vue", CLEAN_PAGE);

    let rules = vec![RuleId::NonTextContent, RuleId::Keyboard];
    let report = auditor(rules.clone()).audit(temp_dir.path());

    assert!(report.audit.start_time <= report.audit.end_time);
    assert!(report.audit.duration_ms >= 0);
    assert_eq!(report.audit.scope.rules_applied, rules.len());
    assert_eq!(
        report.audit.scope.components_with_violations,
        report.summary.components_with_violations
    );
}
