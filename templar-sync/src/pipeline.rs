//! Shared reconciliation pipeline entrypoint used by the CLI subcommands.
//!
//! One snapshot fetch per run. A listing failure aborts before any write
//! (fail-closed); a write failure for one template is recorded per name and
//! does not block the remaining templates.

use chrono::{DateTime, Utc};

use templar_client::TransportConfig;
use templar_core::manifest::{DeclaredTemplate, Manifest};
use templar_core::types::TemplateName;

use crate::error::SyncError;
use crate::reconciler::{self, FlushResult};
use crate::snapshot::Snapshot;

/// Scope for a reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncScope {
    /// Converge every template declared in the manifest.
    All,
    /// Converge a single declared template by name.
    Template(String),
}

/// Per-template outcome of a run.
#[derive(Debug)]
pub struct TemplateOutcome {
    pub name: TemplateName,
    pub result: Result<FlushResult, SyncError>,
}

/// Outcome of one reconciliation run.
#[derive(Debug)]
pub struct SyncRunResult {
    pub fetched_at: DateTime<Utc>,
    pub outcomes: Vec<TemplateOutcome>,
}

impl SyncRunResult {
    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// Run the reconciliation pipeline for a scope.
pub fn run(
    config: &TransportConfig,
    manifest: &Manifest,
    scope: SyncScope,
    dry_run: bool,
) -> Result<SyncRunResult, SyncError> {
    let snapshot = Snapshot::fetch(config)?;

    let declared: Vec<&DeclaredTemplate> = match &scope {
        SyncScope::All => manifest.templates.iter().collect(),
        SyncScope::Template(name) => {
            let found = manifest
                .template(name)
                .ok_or_else(|| SyncError::UnknownTemplate {
                    name: TemplateName::from(name.as_str()),
                })?;
            vec![found]
        }
    };

    let mut outcomes = Vec::new();
    for template in declared {
        let result = reconciler::flush(config, template, &snapshot, dry_run);
        if let Err(err) = &result {
            tracing::warn!("failed to converge template '{}': {err}", template.name);
        }
        outcomes.push(TemplateOutcome {
            name: template.name.clone(),
            result,
        });
    }

    Ok(SyncRunResult {
        fetched_at: snapshot.fetched_at(),
        outcomes,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
