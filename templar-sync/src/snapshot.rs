//! Directory snapshot — the normalized result of one listing call.
//!
//! Rebuilt wholesale from a single successful fetch, never partially
//! updated, and read-only for the remainder of the run that built it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use templar_client::{list_templates, TransportConfig};
use templar_core::normalize;
use templar_core::types::{Ensure, TemplateContent, TemplateName, TemplateRecord};

use crate::error::SyncError;

/// Point-in-time mapping of every remote template to its normalized content.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    fetched_at: DateTime<Utc>,
    templates: HashMap<String, TemplateContent>,
}

impl Snapshot {
    /// Fetch the remote listing and normalize every entry.
    ///
    /// Fails with the listing error untouched — callers rely on this to stay
    /// fail-closed (no snapshot, no writes).
    pub fn fetch(config: &TransportConfig) -> Result<Self, SyncError> {
        let raw = list_templates(config)?;
        Ok(Self::from_listing(raw))
    }

    /// Build a snapshot from an already-fetched raw listing.
    pub fn from_listing(raw: Map<String, Value>) -> Self {
        let templates = raw
            .iter()
            .map(|(name, document)| (name.clone(), normalize(document)))
            .collect();
        Self {
            fetched_at: Utc::now(),
            templates,
        }
    }

    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    pub fn get(&self, name: &str) -> Option<&TemplateContent> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// The listing as reporting records, sorted by name for stable output.
    /// The snapshot itself is an unordered mapping; consumers must not read
    /// meaning into the order beyond display stability.
    pub fn records(&self) -> Vec<TemplateRecord> {
        let mut records: Vec<TemplateRecord> = self
            .templates
            .iter()
            .map(|(name, content)| TemplateRecord {
                name: TemplateName::from(name.as_str()),
                ensure: Ensure::Present,
                content: content.clone(),
            })
            .collect();
        records.sort_by(|a, b| a.name.0.cmp(&b.name.0));
        records
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
