mod applicability;
mod result;

pub use applicability::{ComponentType, RuleSplit, split_rules};
pub use result::{
    AuditResult, AuditScope, AuditWindow, ComponentAuditResult, RuleOutcome, RuleStatus,
};

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use rayon::prelude::*;

use crate::extractor::StructuralExtractor;
use crate::rules::RuleId;
use crate::rules::validators::{RuleValidator, all_validators};
use crate::scanner::{ComponentMetadata, ComponentScanner};
use crate::stats;

/// Sequences scan -> extract -> filter -> validate -> accumulate.
///
/// Every per-item failure is isolated: an unreadable or unparseable file is
/// excluded and tallied, a panicking validator contributes zero violations
/// for that rule on that component. The run always produces a complete
/// `AuditResult`.
pub struct Auditor<S: ComponentScanner> {
    scanner: S,
    extractor: StructuralExtractor,
    validators: Vec<Box<dyn RuleValidator>>,
    rules: Vec<RuleId>,
    allowed_types: Vec<ComponentType>,
    verbose: u8,
}

impl<S: ComponentScanner + Sync> Auditor<S> {
    #[must_use]
    pub fn new(scanner: S, rules: Vec<RuleId>) -> Self {
        let validators = all_validators();
        debug_assert_eq!(
            validators.len(),
            {
                let mut ids: Vec<_> = validators.iter().map(|v| v.rule_id()).collect();
                ids.sort_unstable();
                ids.dedup();
                ids.len()
            },
            "duplicate rule id in validator registry"
        );
        Self {
            scanner,
            extractor: StructuralExtractor::new(),
            validators,
            rules,
            allowed_types: ComponentType::ALL.to_vec(),
            verbose: 0,
        }
    }

    #[must_use]
    pub fn with_allowed_types(mut self, allowed_types: Vec<ComponentType>) -> Self {
        self.allowed_types = allowed_types;
        self
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the full audit over one directory tree.
    #[must_use]
    pub fn audit(&self, root: &Path) -> AuditResult {
        let start_time = Utc::now();
        let discovered = self.scanner.scan(root);
        let extraction_failures = AtomicUsize::new(0);

        let mut components: Vec<ComponentAuditResult> = discovered
            .par_iter()
            .filter_map(|metadata| match self.audit_component(metadata) {
                Ok(result) => result,
                Err(reason) => {
                    extraction_failures.fetch_add(1, Ordering::Relaxed);
                    if self.verbose > 0 {
                        eprintln!("warning: skipping {}: {reason}", metadata.path.display());
                    }
                    None
                }
            })
            .collect();

        // Validation may run in any order; output must not depend on it.
        components.sort_by(|a, b| a.path.cmp(&b.path));

        let summary = stats::summarize(&components, &self.rules);
        let end_time = Utc::now();

        AuditResult {
            timestamp: end_time,
            audit: AuditWindow {
                start_time,
                end_time,
                duration_ms: (end_time - start_time).num_milliseconds(),
                scope: AuditScope {
                    components_scanned: components.len(),
                    components_with_violations: summary.components_with_violations,
                    rules_applied: self.rules.len(),
                    extraction_failures: extraction_failures.load(Ordering::Relaxed),
                },
            },
            components,
            summary,
        }
    }

    /// Audit one component. `Ok(None)` means the component's type is outside
    /// the configured allowlist; `Err` means extraction failed.
    fn audit_component(
        &self,
        metadata: &ComponentMetadata,
    ) -> std::result::Result<Option<ComponentAuditResult>, String> {
        let component = self
            .extractor
            .extract(metadata)
            .map_err(|e| e.to_string())?;

        let component_type = ComponentType::infer(&component.path, &component.name);
        if !self.allowed_types.contains(&component_type) {
            return Ok(None);
        }

        let split = split_rules(component_type, &self.rules);
        let mut violations = Vec::new();
        let mut rule_statuses = Vec::with_capacity(self.rules.len());

        // One status per configured rule, in configured order.
        for &rule_id in &self.rules {
            if !split.applicable.contains(&rule_id) {
                rule_statuses.push(RuleStatus::not_applicable(rule_id));
                continue;
            }
            let found = self.run_validator(rule_id, &component);
            rule_statuses.push(RuleStatus::evaluated(rule_id, found.len()));
            violations.extend(found);
        }

        Ok(Some(ComponentAuditResult {
            name: component.name,
            path: component.path,
            component_type,
            violations,
            rule_statuses,
        }))
    }

    fn run_validator(
        &self,
        rule_id: RuleId,
        component: &crate::extractor::NormalizedComponent,
    ) -> Vec<crate::rules::Violation> {
        let Some(validator) = self.validators.iter().find(|v| v.rule_id() == rule_id) else {
            return Vec::new();
        };
        panic::catch_unwind(AssertUnwindSafe(|| validator.validate(component))).unwrap_or_else(
            |_| {
                if self.verbose > 0 {
                    eprintln!(
                        "warning: rule {rule_id} failed on {}, treating as zero violations",
                        component.path.display()
                    );
                }
                Vec::new()
            },
        )
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
