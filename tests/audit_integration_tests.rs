#![allow(deprecated)] // cargo_bin deprecation - still works fine

mod common;

use assert_cmd::Command;
use common::{CLEAN_PAGE, MISSING_ALT, POINTER_ONLY, TestFixture};
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("a11y-guard").expect("binary should exist")
}

#[test]
fn audit_empty_directory_exits_success() {
    let fixture = TestFixture::new();

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Accessibility audit"))
        .stdout(predicate::str::contains("0 audited"));
}

#[test]
fn audit_clean_page_passes() {
    let fixture = TestFixture::new();
    fixture.create_file("pages/DashboardPage.vue", CLEAN_PAGE);

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 audited, 0 with violations"))
        .stdout(predicate::str::contains("Overall conformity: 100.0%"));
}

#[test]
fn audit_reports_violations_without_failing_by_default() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Logo.vue", MISSING_ALT);

    // min_conformity defaults to 0, so violations alone never break the exit code.
    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 audited, 1 with violations"))
        .stdout(predicate::str::contains("1.1.1"));
}

#[test]
fn audit_below_min_conformity_exits_one() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Logo.vue", MISSING_ALT);

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--rules")
        .arg("1.1.1")
        .arg("--min-conformity")
        .arg("100")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("below the required 100.0%"));
}

#[test]
fn warn_only_converts_threshold_failure_to_success() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Logo.vue", MISSING_ALT);

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--rules")
        .arg("1.1.1")
        .arg("--min-conformity")
        .arg("100")
        .arg("--warn-only")
        .assert()
        .success();
}

#[test]
fn rule_subset_ignores_other_findings() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Logo.vue", MISSING_ALT);

    // Only the keyboard rule runs, and the component has no handlers.
    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--rules")
        .arg("keyboard")
        .arg("--min-conformity")
        .arg("100")
        .assert()
        .success()
        .stdout(predicate::str::contains("Violations: 0"));
}

#[test]
fn unknown_rule_id_exits_two() {
    let fixture = TestFixture::new();

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--rules")
        .arg("9.9.9")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown rule id: 9.9.9"));
}

#[test]
fn out_of_range_min_conformity_exits_two() {
    let fixture = TestFixture::new();

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--min-conformity")
        .arg("150")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("min_conformity"));
}

#[test]
fn json_output_is_parseable_and_complete() {
    let fixture = TestFixture::new();
    fixture.create_file("pages/DashboardPage.vue", CLEAN_PAGE);
    fixture.create_file("components/Logo.vue", MISSING_ALT);

    let output = cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");
    assert_eq!(report["summary"]["totalComponents"], 2);
    assert_eq!(report["summary"]["componentsWithViolations"], 1);
    assert_eq!(report["audit"]["scope"]["rulesApplied"], 16);

    let components = report["components"].as_array().unwrap();
    assert_eq!(components.len(), 2);
    for component in components {
        assert_eq!(component["ruleStatuses"].as_array().unwrap().len(), 16);
    }
}

#[test]
fn page_rules_are_not_applicable_for_generic_components() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Logo.vue", MISSING_ALT);

    let output = cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--rules")
        .arg("2.4.1,3.1.1")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let statuses = report["components"][0]["ruleStatuses"].as_array().unwrap();
    assert_eq!(statuses.len(), 2);
    for status in statuses {
        assert_eq!(status["status"], "NOT_APPLICABLE");
    }
    assert_eq!(report["summary"]["overallConformityPercent"], 100.0);
}

#[test]
fn markdown_output_renders_tables() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Dropdown.vue", POINTER_ONLY);

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--format")
        .arg("markdown")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Accessibility Audit"))
        .stdout(predicate::str::contains("## Rule Conformity"))
        .stdout(predicate::str::contains("### Dropdown"));
}

#[test]
fn exclude_patterns_skip_matching_files() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Logo.vue", MISSING_ALT);
    fixture.create_file("legacy/Old.vue", MISSING_ALT);

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("-x")
        .arg("**/legacy/**")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 audited"));
}

#[test]
fn component_type_filter_skips_other_types() {
    let fixture = TestFixture::new();
    fixture.create_file("pages/DashboardPage.vue", CLEAN_PAGE);
    fixture.create_file("components/Logo.vue", MISSING_ALT);

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--component-types")
        .arg("page")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 audited, 0 with violations"));
}

#[test]
fn config_file_drives_the_audit() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Logo.vue", MISSING_ALT);
    fixture.create_config(
        r#"
rules = ["1.1.1"]
min_conformity = 100.0
"#,
    );

    cmd()
        .current_dir(fixture.path())
        .arg("audit")
        .assert()
        .code(1);
}

#[test]
fn cli_overrides_beat_the_config_file() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Logo.vue", MISSING_ALT);
    fixture.create_config(
        r#"
rules = ["1.1.1"]
min_conformity = 100.0
"#,
    );

    cmd()
        .current_dir(fixture.path())
        .arg("audit")
        .arg("--min-conformity")
        .arg("0")
        .assert()
        .success();
}

#[test]
fn badge_is_written_next_to_the_report() {
    let fixture = TestFixture::new();
    fixture.create_file("pages/DashboardPage.vue", CLEAN_PAGE);
    let badge_path = fixture.path().join("a11y.svg");

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--badge")
        .arg(&badge_path)
        .assert()
        .success();

    let svg = std::fs::read_to_string(&badge_path).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("100.0%"));
}

#[test]
fn output_flag_writes_report_to_file() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Logo.vue", MISSING_ALT);
    let report_path = fixture.path().join("report.json");

    cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&report_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["summary"]["totalComponents"], 1);
}

#[test]
fn unreadable_component_is_tallied_but_does_not_abort() {
    let fixture = TestFixture::new();
    fixture.create_file("components/Good.vue", CLEAN_PAGE);
    std::fs::write(fixture.path().join("components/Bad.vue"), [0xff, 0xfe]).unwrap();

    let output = cmd()
        .arg("audit")
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["audit"]["scope"]["extractionFailures"], 1);
    assert_eq!(report["audit"]["scope"]["componentsScanned"], 1);
}
