use std::path::PathBuf;

use super::*;

fn component(template: &str) -> NormalizedComponent {
    NormalizedComponent {
        name: "Test".to_string(),
        path: PathBuf::from("src/components/Test.vue"),
        template: template.to_string(),
        script: String::new(),
    }
}

#[test]
fn label_with_matching_id_passes() {
    let validator = InfoAndRelationshipsValidator::new();
    let violations = validator.validate(&component(
        r#"<label for="email">Email</label><input id="email" type="email">"#,
    ));

    assert!(violations.is_empty());
}

#[test]
fn label_with_dangling_for_is_flagged() {
    let validator = InfoAndRelationshipsValidator::new();
    let violations =
        validator.validate(&component(r#"<label for="missing">Email</label><input>"#));

    assert_eq!(violations.len(), 1);
    assert!(violations[0].issue.contains("missing"));
}

#[test]
fn bound_for_is_not_judged() {
    let validator = InfoAndRelationshipsValidator::new();
    let violations = validator.validate(&component(r#"<label :for="fieldId">Email</label>"#));

    assert!(violations.is_empty());
}

#[test]
fn heading_skip_is_flagged() {
    let validator = InfoAndRelationshipsValidator::new();
    let violations = validator.validate(&component(
        "<h1>Title</h1>\n<h3>Subsection</h3>",
    ));

    assert_eq!(violations.len(), 1);
    assert!(violations[0].issue.contains("h1"));
    assert!(violations[0].issue.contains("h3"));
    assert_eq!(violations[0].line, Some(2));
}

#[test]
fn sequential_headings_pass() {
    let validator = InfoAndRelationshipsValidator::new();
    let violations = validator.validate(&component(
        "<h1>Title</h1><h2>Section</h2><h3>Sub</h3><h2>Next</h2>",
    ));

    assert!(violations.is_empty());
}

#[test]
fn decreasing_heading_levels_pass() {
    let validator = InfoAndRelationshipsValidator::new();
    let violations = validator.validate(&component("<h3>Deep</h3><h1>Top</h1>"));

    assert!(violations.is_empty());
}
