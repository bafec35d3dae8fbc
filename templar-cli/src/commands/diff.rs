//! `templar diff` — unified diff of what sync would write.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use templar_sync::diff::diff_manifest;

/// Arguments for `templar diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Limit the diff to a single declared template.
    pub template: Option<String>,

    /// Path to the manifest (defaults to ~/.templar/manifest.yaml).
    #[arg(long)]
    pub manifest: Option<PathBuf>,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let (manifest, config) = super::load_manifest(self.manifest.as_ref())?;

        if let Some(name) = &self.template {
            if manifest.template(name).is_none() {
                bail!("template '{name}' is not declared in the manifest");
            }
        }

        let result = diff_manifest(&config, &manifest).context("diff failed")?;
        let mut shown = 0;
        for diff in &result.diffs {
            if let Some(name) = &self.template {
                if diff.name.0 != *name {
                    continue;
                }
            }
            print!("{}", diff.unified_diff);
            shown += 1;
        }

        if shown == 0 {
            println!("No differences — remote store matches the manifest.");
        }
        Ok(())
    }
}
