use std::path::PathBuf;

use super::*;
use crate::rules::Severity;

fn component(template: &str) -> NormalizedComponent {
    NormalizedComponent {
        name: "Test".to_string(),
        path: PathBuf::from("src/components/Test.vue"),
        template: template.to_string(),
        script: String::new(),
    }
}

#[test]
fn image_without_alt_is_an_error() {
    let validator = NonTextContentValidator::new();
    let violations = validator.validate(&component(r#"<div><img src="logo.png"></div>"#));

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].severity, Severity::Error);
    assert!(violations[0].issue.contains("alt"));
}

#[test]
fn decorative_image_with_empty_alt_passes() {
    let validator = NonTextContentValidator::new();
    let violations = validator.validate(&component(
        r#"<img src="divider.png" alt="" role="presentation">"#,
    ));

    assert!(violations.is_empty());
}

#[test]
fn decorative_image_with_text_alt_is_flagged() {
    let validator = NonTextContentValidator::new();
    let violations = validator.validate(&component(
        r#"<img src="divider.png" alt="a divider" aria-hidden="true">"#,
    ));

    assert_eq!(violations.len(), 1);
    assert!(violations[0].issue.contains("empty alt"));
}

#[test]
fn empty_alt_without_decorative_marker_is_flagged() {
    let validator = NonTextContentValidator::new();
    let violations = validator.validate(&component(r#"<img src="chart.png" alt="">"#));

    assert_eq!(violations.len(), 1);
}

#[test]
fn bound_alt_counts_as_present() {
    let validator = NonTextContentValidator::new();
    let violations = validator.validate(&component(r#"<img :src="url" :alt="description">"#));

    assert!(violations.is_empty());
}

#[test]
fn icon_only_button_without_label_is_flagged() {
    let validator = NonTextContentValidator::new();
    let violations = validator.validate(&component(
        r#"<button @click="close"><i class="icon-close"></i></button>"#,
    ));

    assert_eq!(violations.len(), 1);
    assert!(violations[0].issue.contains("Icon-only"));
}

#[test]
fn icon_button_with_aria_label_passes() {
    let validator = NonTextContentValidator::new();
    let violations = validator.validate(&component(
        r#"<button aria-label="Close dialog"><i class="icon-close"></i></button>"#,
    ));

    assert!(violations.is_empty());
}

#[test]
fn svg_without_name_is_flagged_and_hidden_svg_passes() {
    let validator = NonTextContentValidator::new();

    let flagged = validator.validate(&component(r#"<svg viewBox="0 0 24 24"></svg>"#));
    assert_eq!(flagged.len(), 1);

    let hidden = validator.validate(&component(r#"<svg aria-hidden="true"></svg>"#));
    assert!(hidden.is_empty());
}

#[test]
fn absence_of_graphics_yields_no_violations() {
    let validator = NonTextContentValidator::new();
    let violations = validator.validate(&component("<div><p>Text only</p></div>"));

    assert!(violations.is_empty());
}

#[test]
fn every_violation_carries_own_rule_id() {
    let validator = NonTextContentValidator::new();
    let violations = validator.validate(&component(r#"<img src="a.png"><img src="b.png">"#));

    assert_eq!(violations.len(), 2);
    assert!(violations.iter().all(|v| v.rule_id == validator.rule_id()));
}
