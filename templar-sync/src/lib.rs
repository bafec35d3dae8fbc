//! # templar-sync
//!
//! Snapshot-gated template reconciliation.
//!
//! Call [`pipeline::run`] to converge every declared template in a manifest
//! against one fresh [`Snapshot`] of the remote store, or [`reconciler::flush`]
//! to converge a single declared template.

pub mod diff;
pub mod error;
pub mod pipeline;
pub mod reconciler;
pub mod snapshot;
pub mod status;

pub use error::SyncError;
pub use reconciler::{flush, FlushResult};
pub use snapshot::Snapshot;
pub use status::TemplateState;
