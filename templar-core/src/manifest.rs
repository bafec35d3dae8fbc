//! Declared-state manifest.
//!
//! # Storage layout
//!
//! ```text
//! ~/.templar/
//!   manifest.yaml   (connection settings + declared templates)
//! ```
//!
//! # API pattern
//!
//! - `load_at(path)` — explicit path; used in tests with `TempDir`
//! - `load()` — derives the path from `dirs::home_dir()`, delegates to `load_at`
//!
//! Tests must NEVER call the no-arg wrapper; always use `load_at`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ManifestError;
use crate::types::{Scheme, TemplateName};

// ---------------------------------------------------------------------------
// Document types
// ---------------------------------------------------------------------------

/// Connection settings for the remote index service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    #[serde(default)]
    pub scheme: Scheme,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Request timeout for listing and write calls, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            scheme: Scheme::Http,
            host: default_host(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            username: None,
            password: None,
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    9200
}

fn default_timeout_secs() -> u64 {
    10
}

/// One declared template: a name plus a partial content document. Missing
/// content fields mean "apply normalization defaults," never "delete the
/// field remotely."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclaredTemplate {
    pub name: TemplateName,
    pub content: Value,
}

/// Root of the templar YAML manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Manifest {
    #[serde(default)]
    pub connection: ConnectionSettings,
    #[serde(default)]
    pub templates: Vec<DeclaredTemplate>,
}

impl Manifest {
    /// Look up a declared template by name.
    pub fn template(&self, name: &str) -> Option<&DeclaredTemplate> {
        self.templates.iter().find(|t| t.name.0 == name)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `<home>/.templar/manifest.yaml` — pure, no I/O.
pub fn manifest_path_at(home: &Path) -> PathBuf {
    home.join(".templar").join("manifest.yaml")
}

/// `manifest_path_at` convenience wrapper — uses `dirs::home_dir()`.
pub fn manifest_path() -> Result<PathBuf, ManifestError> {
    Ok(manifest_path_at(&home()?))
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// Load and validate the manifest at `path`.
///
/// Returns `ManifestError::ManifestNotFound` if absent,
/// `ManifestError::Parse` (with path + line context) if malformed YAML.
/// Validation rejects declared templates without a `template` pattern and
/// half-configured credentials.
pub fn load_at(path: &Path) -> Result<Manifest, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    let manifest: Manifest = serde_yaml::from_str(&contents).map_err(|e| ManifestError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    validate(&manifest)?;
    Ok(manifest)
}

/// `load_at` convenience wrapper for the default manifest location.
pub fn load() -> Result<Manifest, ManifestError> {
    load_at(&manifest_path()?)
}

fn validate(manifest: &Manifest) -> Result<(), ManifestError> {
    let conn = &manifest.connection;
    if conn.username.is_some() != conn.password.is_some() {
        return Err(ManifestError::PartialCredentials);
    }
    for declared in &manifest.templates {
        let pattern = declared
            .content
            .as_object()
            .and_then(|o| o.get("template"))
            .and_then(Value::as_str);
        if pattern.is_none() {
            return Err(ManifestError::MissingPattern {
                name: declared.name.clone(),
            });
        }
    }
    Ok(())
}

fn home() -> Result<PathBuf, ManifestError> {
    dirs::home_dir().ok_or(ManifestError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
