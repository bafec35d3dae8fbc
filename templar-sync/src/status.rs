//! Per-template convergence classification for `templar status`.
//!
//! Signal precedence:
//! 1. `Missing` (no remote entry under the declared name)
//! 2. `Divergent` (remote entry differs in one or more canonical fields)
//! 3. `Current`

use templar_core::manifest::DeclaredTemplate;
use templar_core::normalize;
use templar_core::types::TemplateContent;

use crate::snapshot::Snapshot;

/// Convergence state of one declared template against a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateState {
    /// The remote store has no entry under this name.
    Missing,
    /// The remote entry differs in the named canonical fields.
    Divergent { fields: Vec<String> },
    /// The remote entry structurally equals the normalized declared content.
    Current,
}

/// Classify a declared template against the snapshot.
pub fn check(declared: &DeclaredTemplate, snapshot: &Snapshot) -> TemplateState {
    let desired = normalize(&declared.content);
    match snapshot.get(&declared.name.0) {
        None => TemplateState::Missing,
        Some(current) if *current == desired => TemplateState::Current,
        Some(current) => TemplateState::Divergent {
            fields: divergent_fields(current, &desired),
        },
    }
}

fn divergent_fields(current: &TemplateContent, desired: &TemplateContent) -> Vec<String> {
    let mut fields = Vec::new();
    if current.order != desired.order {
        fields.push("order".to_string());
    }
    if current.aliases != desired.aliases {
        fields.push("aliases".to_string());
    }
    if current.mappings != desired.mappings {
        fields.push("mappings".to_string());
    }
    if current.settings != desired.settings {
        fields.push("settings".to_string());
    }
    if current.template != desired.template {
        fields.push("template".to_string());
    }
    fields
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
