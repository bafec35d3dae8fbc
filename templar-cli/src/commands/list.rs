//! `templar list` — normalized view of the remote template store.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use templar_sync::Snapshot;

/// Arguments for `templar list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,

    /// Path to the manifest (defaults to ~/.templar/manifest.yaml).
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl ListArgs {
    pub fn run(self) -> Result<()> {
        let (_, config) = super::load_manifest(self.manifest.as_ref())?;
        let snapshot = Snapshot::fetch(&config).context("failed to list remote templates")?;
        let records = snapshot.records();

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&records).context("failed to render listing JSON")?
            );
            return Ok(());
        }

        if records.is_empty() {
            println!("Remote store has no templates.");
            return Ok(());
        }

        for record in &records {
            println!(
                "{}  order={}  template={}",
                record.name,
                record.content.order,
                record.content.template.as_deref().unwrap_or("-")
            );
        }
        Ok(())
    }
}
