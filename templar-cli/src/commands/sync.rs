//! `templar sync` — converge declared templates onto the remote store.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use templar_sync::pipeline::{self, SyncRunResult, SyncScope};
use templar_sync::FlushResult;

/// Arguments for `templar sync`.
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Name of the declared template to sync (omit when using `--all`).
    pub template: Option<String>,

    /// Sync every template declared in the manifest.
    #[arg(long, conflicts_with = "template")]
    pub all: bool,

    /// Show what would be written without issuing any writes.
    #[arg(long)]
    pub dry_run: bool,

    /// Path to the manifest (defaults to ~/.templar/manifest.yaml).
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl SyncArgs {
    pub fn run(self) -> Result<()> {
        let (manifest, config) = super::load_manifest(self.manifest.as_ref())?;

        let scope = if self.all {
            if manifest.templates.is_empty() {
                println!("No templates declared in the manifest.");
                return Ok(());
            }
            SyncScope::All
        } else {
            let name = self
                .template
                .clone()
                .context("provide a template name or use --all")?;
            SyncScope::Template(name)
        };

        let result = pipeline::run(&config, &manifest, scope, self.dry_run)
            .context("reconciliation failed")?;
        print_outcomes(&result, self.dry_run);

        let failed = result.failed();
        if failed > 0 {
            bail!("{failed} template(s) failed to converge");
        }
        Ok(())
    }
}

fn print_outcomes(result: &SyncRunResult, dry_run: bool) {
    let prefix = if dry_run { "[dry-run] " } else { "" };
    let written = result
        .outcomes
        .iter()
        .filter(|o| {
            matches!(
                o.result,
                Ok(FlushResult::Created { .. })
                    | Ok(FlushResult::Updated { .. })
                    | Ok(FlushResult::WouldWrite { .. })
            )
        })
        .count();
    let unchanged = result
        .outcomes
        .iter()
        .filter(|o| matches!(o.result, Ok(FlushResult::Unchanged { .. })))
        .count();

    println!(
        "{prefix}✓ {written} written, {unchanged} unchanged, {} failed",
        result.failed()
    );

    for outcome in &result.outcomes {
        match &outcome.result {
            Ok(FlushResult::Created { name }) => println!("  ✎  {name} created"),
            Ok(FlushResult::Updated { name }) => println!("  ✎  {name} updated"),
            Ok(FlushResult::Unchanged { name }) => println!("  ·  {name} unchanged"),
            Ok(FlushResult::WouldWrite { name }) => println!("  ~  {name} would write"),
            Err(err) => println!("  ✗  {}: {err}", outcome.name),
        }
    }
}
