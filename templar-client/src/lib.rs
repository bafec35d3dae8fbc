//! # templar-client
//!
//! Blocking HTTP client for the remote index service's `_template` API.
//!
//! Build a [`TransportConfig`] once per reconciliation run, then call
//! [`list_templates`] to enumerate the remote store or [`put_template`] to
//! write a canonical document. No retries happen here; retry policy belongs
//! to the caller.

pub mod config;
pub mod error;
pub mod http;

pub use config::{Credentials, TransportConfig};
pub use error::ClientError;
pub use http::{list_templates, put_template};
