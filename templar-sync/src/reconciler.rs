//! Snapshot-gated convergence for a single declared template.
//!
//! ## `flush` — per-template state machine
//!
//! A declared template is either **present** (the snapshot holds a
//! structurally equal normalized document) or **absent-or-divergent**.
//! Present templates are left alone; everything else gets exactly one PUT of
//! the canonical declared document. Comparison always runs over fully
//! normalized content, so a declaration of just a pattern converges against
//! a remote document that already carries the matching defaults.

use templar_client::{put_template, TransportConfig};
use templar_core::manifest::DeclaredTemplate;
use templar_core::normalize;
use templar_core::types::{Ensure, TemplateName, TemplateRecord};

use crate::error::SyncError;
use crate::snapshot::Snapshot;

/// Outcome of flushing an individual declared template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlushResult {
    /// The remote store had no entry under this name; one write created it.
    Created { name: TemplateName },
    /// The remote entry diverged from the declared content; one write
    /// replaced it.
    Updated { name: TemplateName },
    /// The remote entry already matches — no network write was performed.
    Unchanged { name: TemplateName },
    /// Dry-run mode: the template *would* have been written.
    WouldWrite { name: TemplateName },
}

impl FlushResult {
    pub fn name(&self) -> &TemplateName {
        match self {
            FlushResult::Created { name }
            | FlushResult::Updated { name }
            | FlushResult::Unchanged { name }
            | FlushResult::WouldWrite { name } => name,
        }
    }
}

/// Converge one declared template against the snapshot.
///
/// On a write failure the remote entry stays absent-or-divergent and the
/// error propagates; the next run converges it again (at-least-once intent).
pub fn flush(
    config: &TransportConfig,
    declared: &DeclaredTemplate,
    snapshot: &Snapshot,
    dry_run: bool,
) -> Result<FlushResult, SyncError> {
    let desired = normalize(&declared.content);
    let name = declared.name.clone();

    let current = snapshot.get(&name.0);
    if current == Some(&desired) {
        tracing::debug!("unchanged: {name}");
        return Ok(FlushResult::Unchanged { name });
    }

    if dry_run {
        tracing::info!("[dry-run] would write template: {name}");
        return Ok(FlushResult::WouldWrite { name });
    }

    let existed = current.is_some();
    put_template(config, &name, &desired)?;
    tracing::info!("wrote template: {name}");
    Ok(if existed {
        FlushResult::Updated { name }
    } else {
        FlushResult::Created { name }
    })
}

/// The record downstream consumers receive for a converged template:
/// exactly name, ensure, and the fully normalized content.
pub fn desired_record(declared: &DeclaredTemplate) -> TemplateRecord {
    TemplateRecord {
        name: declared.name.clone(),
        ensure: Ensure::Present,
        content: normalize(&declared.content),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
