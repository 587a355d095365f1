use super::RuleId;

/// Display metadata for one catalog entry. Lookup only; never drives
/// validator dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    pub slug: &'static str,
    pub name: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
}

impl RuleId {
    #[must_use]
    pub const fn info(self) -> &'static RuleInfo {
        match self {
            Self::NonTextContent => &RuleInfo {
                slug: "non-text-content",
                name: "Non-text Content",
                short_description: "Images and icons need text alternatives",
                long_description: "Every graphic element needs a non-empty text alternative \
                    unless it is explicitly marked decorative, in which case its alternative \
                    must be empty. Icon-only interactive controls need an accessible label.",
            },
            Self::InfoAndRelationships => &RuleInfo {
                slug: "info-and-relationships",
                name: "Info and Relationships",
                short_description: "Structure must be expressed in markup",
                long_description: "Inputs referencing an id must have a matching label, and \
                    heading levels must not increase by more than one step at a time.",
            },
            Self::IdentifyInputPurpose => &RuleInfo {
                slug: "identify-input-purpose",
                name: "Identify Input Purpose",
                short_description: "Identity inputs need an autocomplete hint",
                long_description: "Inputs collecting common personal data (name, email, \
                    telephone, address) should declare an autocomplete purpose so user \
                    agents can assist with filling them.",
            },
            Self::UseOfColor => &RuleInfo {
                slug: "use-of-color",
                name: "Use of Color",
                short_description: "Color must not be the only carrier of state",
                long_description: "Elements whose class names encode state via color alone \
                    must also carry text, an icon, or an accessible label.",
            },
            Self::Keyboard => &RuleInfo {
                slug: "keyboard",
                name: "Keyboard",
                short_description: "All functionality must be keyboard reachable",
                long_description: "Disabled interactive elements, pointer-event-disabling \
                    styles without an enabled keyboard path, and pointer-only handlers \
                    lacking both a keyboard handler and an interactive role are flagged.",
            },
            Self::TimingAdjustable => &RuleInfo {
                slug: "timing-adjustable",
                name: "Timing Adjustable",
                short_description: "Timed actions must leave users in control",
                long_description: "Delayed actions that terminate a session, redirect, or \
                    dismiss content are flagged for review; very short delays before such \
                    actions deny users reaction time.",
            },
            Self::BypassBlocks => &RuleInfo {
                slug: "bypass-blocks",
                name: "Bypass Blocks",
                short_description: "Pages need a main landmark or skip link",
                long_description: "Page-level components need a way to bypass repeated \
                    blocks of content: a main landmark or an explicit skip link. Applies \
                    only to page/section-level component types.",
            },
            Self::LinkPurpose => &RuleInfo {
                slug: "link-purpose",
                name: "Link Purpose (In Context)",
                short_description: "Link text must describe the destination",
                long_description: "Generic link phrases, links with no text and no \
                    accessible name, and image-only links without an alternative are \
                    flagged.",
            },
            Self::HeadingsAndLabels => &RuleInfo {
                slug: "headings-and-labels",
                name: "Headings and Labels",
                short_description: "Headings and labels must be descriptive",
                long_description: "Empty headings and headings consisting of generic \
                    filler text describe nothing and are flagged.",
            },
            Self::LabelInName => &RuleInfo {
                slug: "label-in-name",
                name: "Label in Name",
                short_description: "Accessible name must contain the visible label",
                long_description: "When a control carries both visible text and an \
                    aria-label, the accessible name must contain the visible text so \
                    speech-input users can target it.",
            },
            Self::LanguageOfPage => &RuleInfo {
                slug: "language-of-page",
                name: "Language of Page",
                short_description: "Pages must declare a document language",
                long_description: "Page-level components need a declared two-letter \
                    (optionally region-qualified) language code. Applies only to \
                    page/section-level component types.",
            },
            Self::ConsistentIdentification => &RuleInfo {
                slug: "consistent-identification",
                name: "Consistent Identification",
                short_description: "Same action, same label",
                long_description: "Within one component, the first label or icon used for \
                    a canonical action (save, delete, close, ...) sets the expectation; a \
                    later use of a different label or icon for the same action is flagged.",
            },
            Self::ErrorIdentification => &RuleInfo {
                slug: "error-identification",
                name: "Error Identification",
                short_description: "Errors must be identified in text",
                long_description: "Error messages conveyed only through color styling, \
                    without an alert role or error text, are flagged.",
            },
            Self::LabelsOrInstructions => &RuleInfo {
                slug: "labels-or-instructions",
                name: "Labels or Instructions",
                short_description: "Form controls need labels",
                long_description: "Form controls relying solely on placeholder text, with \
                    no label, aria-label, or aria-labelledby, are flagged.",
            },
            Self::NameRoleValue => &RuleInfo {
                slug: "name-role-value",
                name: "Name, Role, Value",
                short_description: "Custom widgets need role and keyboard focus",
                long_description: "Non-semantic elements wired as interactive widgets need \
                    an explicit role and a tabindex making them focusable.",
            },
            Self::StatusMessages => &RuleInfo {
                slug: "status-messages",
                name: "Status Messages",
                short_description: "Status containers need a live region",
                long_description: "Elements matching status/alert naming or role \
                    conventions need a live-region politeness declaration; explicitly \
                    disabling a live region on a reactive element is flagged.",
            },
        }
    }
}
