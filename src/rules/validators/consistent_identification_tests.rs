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
fn differing_labels_for_same_action_are_flagged() {
    let validator = ConsistentIdentificationValidator::new();
    let violations = validator.validate(&component(
        "<button @click=\"saveDraft\">Save</button>\n<button @click=\"saveAll\">Submit</button>",
    ));

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].severity, Severity::Warning);
    // The finding references both labels and both source lines.
    assert!(violations[0].issue.contains("Save"));
    assert!(violations[0].issue.contains("Submit"));
    assert!(violations[0].issue.contains("line 1"));
    assert_eq!(violations[0].line, Some(2));
}

#[test]
fn repeated_identical_labels_pass() {
    let validator = ConsistentIdentificationValidator::new();
    let violations = validator.validate(&component(
        "<button>Save</button><button>Save</button>",
    ));

    assert!(violations.is_empty());
}

#[test]
fn case_insensitive_label_match_passes() {
    let validator = ConsistentIdentificationValidator::new();
    let violations = validator.validate(&component(
        "<button>Save</button><button>SAVE</button>",
    ));

    assert!(violations.is_empty());
}

#[test]
fn unrelated_actions_do_not_interfere() {
    let validator = ConsistentIdentificationValidator::new();
    let violations = validator.validate(&component(
        "<button>Save</button><button>Delete</button><button>Close</button>",
    ));

    assert!(violations.is_empty());
}

#[test]
fn differing_icons_for_same_action_are_flagged() {
    let validator = ConsistentIdentificationValidator::new();
    let violations = validator.validate(&component(
        r#"<button><i class="icon-delete"></i></button><button><i class="icon-trash"></i></button>"#,
    ));

    assert_eq!(violations.len(), 1);
    assert!(violations[0].issue.contains("icon"));
}

#[test]
fn tracking_is_local_to_one_invocation() {
    let validator = ConsistentIdentificationValidator::new();
    let first = component("<button>Save</button>");
    let second = component("<button>Submit</button>");

    // Two components each using one consistent label: no cross-component state.
    assert!(validator.validate(&first).is_empty());
    assert!(validator.validate(&second).is_empty());
}
