mod bypass_blocks;
mod consistent_identification;
mod error_identification;
mod headings_and_labels;
mod identify_input_purpose;
mod info_and_relationships;
mod keyboard;
mod label_in_name;
mod labels_or_instructions;
mod language_of_page;
mod link_purpose;
mod name_role_value;
mod non_text_content;
mod status_messages;
mod support;
mod timing_adjustable;
mod use_of_color;

pub use bypass_blocks::BypassBlocksValidator;
pub use consistent_identification::ConsistentIdentificationValidator;
pub use error_identification::ErrorIdentificationValidator;
pub use headings_and_labels::HeadingsAndLabelsValidator;
pub use identify_input_purpose::IdentifyInputPurposeValidator;
pub use info_and_relationships::InfoAndRelationshipsValidator;
pub use keyboard::KeyboardValidator;
pub use label_in_name::LabelInNameValidator;
pub use labels_or_instructions::LabelsOrInstructionsValidator;
pub use language_of_page::LanguageOfPageValidator;
pub use link_purpose::LinkPurposeValidator;
pub use name_role_value::NameRoleValueValidator;
pub use non_text_content::NonTextContentValidator;
pub use status_messages::StatusMessagesValidator;
pub use timing_adjustable::TimingAdjustableValidator;
pub use use_of_color::UseOfColorValidator;

use crate::extractor::NormalizedComponent;
use crate::rules::{RuleId, Violation};

/// One independent rule checker.
///
/// Implementations are pure functions of the component's own text: no shared
/// state, deterministic, and safe under re-invocation or reordering. Every
/// emitted violation carries the validator's own rule id.
pub trait RuleValidator: Send + Sync {
    fn rule_id(&self) -> RuleId;

    fn validate(&self, component: &NormalizedComponent) -> Vec<Violation>;
}

/// The full validator registry, one entry per catalog rule, in stable
/// catalog order. Rule-id uniqueness is asserted in tests.
#[must_use]
pub fn all_validators() -> Vec<Box<dyn RuleValidator>> {
    vec![
        Box::new(NonTextContentValidator::new()),
        Box::new(InfoAndRelationshipsValidator::new()),
        Box::new(IdentifyInputPurposeValidator::new()),
        Box::new(UseOfColorValidator::new()),
        Box::new(KeyboardValidator::new()),
        Box::new(TimingAdjustableValidator::new()),
        Box::new(BypassBlocksValidator::new()),
        Box::new(LinkPurposeValidator::new()),
        Box::new(HeadingsAndLabelsValidator::new()),
        Box::new(LabelInNameValidator::new()),
        Box::new(LanguageOfPageValidator::new()),
        Box::new(ConsistentIdentificationValidator::new()),
        Box::new(ErrorIdentificationValidator::new()),
        Box::new(LabelsOrInstructionsValidator::new()),
        Box::new(NameRoleValueValidator::new()),
        Box::new(StatusMessagesValidator::new()),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
