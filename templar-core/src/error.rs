//! Error types for templar-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::TemplateName;

/// All errors that can arise from manifest operations.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load — includes file path and line context from serde_yaml.
    #[error("failed to parse manifest at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The manifest file did not exist at the expected path.
    #[error("manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.templar/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// A declared template is missing its required `template` index pattern.
    #[error("declared template '{name}' has no 'template' index pattern")]
    MissingPattern { name: TemplateName },

    /// Exactly one of username / password was configured.
    #[error("connection credentials are incomplete: set both username and password or neither")]
    PartialCredentials,
}
