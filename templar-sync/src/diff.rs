//! Dry-run unified diff support for `templar diff`.

use similar::TextDiff;

use templar_client::TransportConfig;
use templar_core::manifest::{DeclaredTemplate, Manifest};
use templar_core::normalize;
use templar_core::types::{TemplateContent, TemplateName};

use crate::error::SyncError;
use crate::snapshot::Snapshot;

/// A single declared-vs-remote template diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDiff {
    pub name: TemplateName,
    pub unified_diff: String,
}

/// Diff result for a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffManifestResult {
    pub diffs: Vec<TemplateDiff>,
}

/// Fetch a snapshot and diff every declared template against it.
///
/// No writes are performed.
pub fn diff_manifest(
    config: &TransportConfig,
    manifest: &Manifest,
) -> Result<DiffManifestResult, SyncError> {
    let snapshot = Snapshot::fetch(config)?;
    diff_against(&snapshot, &manifest.templates)
}

/// Diff declared templates against an already-fetched snapshot.
pub fn diff_against(
    snapshot: &Snapshot,
    declared: &[DeclaredTemplate],
) -> Result<DiffManifestResult, SyncError> {
    let mut diffs = Vec::new();
    for template in declared {
        let desired = normalize(&template.content);
        let remote = snapshot.get(&template.name.0);
        if remote == Some(&desired) {
            continue;
        }

        let remote_text = match remote {
            Some(content) => pretty(content)?,
            None => String::new(),
        };
        let desired_text = pretty(&desired)?;

        let old_header = format!("remote/{}", template.name);
        let new_header = format!("declared/{}", template.name);
        let unified = TextDiff::from_lines(&remote_text, &desired_text)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();

        diffs.push(TemplateDiff {
            name: template.name.clone(),
            unified_diff: unified,
        });
    }
    Ok(DiffManifestResult { diffs })
}

fn pretty(content: &TemplateContent) -> Result<String, SyncError> {
    let mut text = serde_json::to_string_pretty(content)?;
    text.push('\n');
    Ok(text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
