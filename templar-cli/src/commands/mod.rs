pub mod diff;
pub mod list;
pub mod status;
pub mod sync;

use std::path::PathBuf;

use anyhow::{Context, Result};

use templar_client::TransportConfig;
use templar_core::manifest::{self, Manifest};

/// Load the manifest (explicit path or `~/.templar/manifest.yaml`) and build
/// the transport config from its connection settings.
pub(crate) fn load_manifest(path: Option<&PathBuf>) -> Result<(Manifest, TransportConfig)> {
    let path = match path {
        Some(p) => p.clone(),
        None => manifest::manifest_path().context("could not determine home directory")?,
    };
    let manifest = manifest::load_at(&path)
        .with_context(|| format!("failed to load manifest at {}", path.display()))?;
    let config = TransportConfig::from_settings(&manifest.connection);
    Ok((manifest, config))
}
