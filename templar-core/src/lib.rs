//! Templar core library — domain types, content normalization, manifest.
//!
//! Public API surface:
//! - [`types`] — newtypes and domain structs
//! - [`normalize`] — canonicalization of raw template documents
//! - [`manifest`] — declared-state manifest load / path helpers
//! - [`error`] — [`ManifestError`]

pub mod error;
pub mod manifest;
pub mod normalize;
pub mod types;

pub use error::ManifestError;
pub use normalize::normalize;
pub use types::{Ensure, Scheme, TemplateContent, TemplateName, TemplateRecord};
