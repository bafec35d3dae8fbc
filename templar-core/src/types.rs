//! Domain types for templar.
//!
//! Template names are newtypes; never bare `String`s in public signatures.
//! Content types serialize with serde + serde_json.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name of an index template (the unique remote key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateName(pub String);

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TemplateName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// URL scheme of the remote index service. `Https` implies TLS with standard
/// certificate validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Http => write!(f, "http"),
            Scheme::Https => write!(f, "https"),
        }
    }
}

/// Desired presence of a template. Deletion is not part of the reconciler,
/// so `present` is the only state a record can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ensure {
    Present,
}

impl fmt::Display for Ensure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ensure::Present => write!(f, "present"),
        }
    }
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Canonical template content after normalization.
///
/// The three map fields are always materialized (absent and empty collapse to
/// the same value) and `order` is always an integer regardless of how the
/// remote encoded it. Empty `settings` is omitted again on the wire, matching
/// what the remote emits for documents that never declared any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateContent {
    pub order: i64,
    pub aliases: Map<String, Value>,
    pub mappings: Map<String, Value>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub settings: Map<String, Value>,
    /// Index pattern the template applies to. Required for any declared
    /// template; remote documents missing it keep `None` so the caller can
    /// reject them instead of the normalizer inventing a pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl TemplateContent {
    /// The canonical JSON document — exactly what a write puts on the wire.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// One reconciled template as reported to downstream consumers: exactly
/// name, ensure, and fully normalized content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateRecord {
    pub name: TemplateName,
    pub ensure: Ensure,
    pub content: TemplateContent,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
