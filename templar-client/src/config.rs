//! Transport configuration — pure data assembly, no I/O.

use std::time::Duration;

use base64::Engine;

use templar_core::manifest::ConnectionSettings;
use templar_core::types::{Scheme, TemplateName};

/// Basic-auth credentials. Existence of a value implies both halves are set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Immutable connection parameters for one reconciliation run.
///
/// TLS is selected purely by scheme; both the listing and write calls share
/// the same timeout and credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    scheme: Scheme,
    host: String,
    port: u16,
    timeout: Duration,
    credentials: Option<Credentials>,
}

impl TransportConfig {
    pub fn new(
        scheme: Scheme,
        host: impl Into<String>,
        port: u16,
        timeout: Duration,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            scheme,
            host: host.into(),
            port,
            timeout,
            credentials,
        }
    }

    /// Build a config from manifest connection settings.
    pub fn from_settings(settings: &ConnectionSettings) -> Self {
        let credentials = match (&settings.username, &settings.password) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            _ => None,
        };
        Self::new(
            settings.scheme,
            settings.host.clone(),
            settings.port,
            Duration::from_secs(settings.timeout_secs),
            credentials,
        )
    }

    /// `{scheme}://{host}:{port}`
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }

    /// `{base_url}/_template`
    pub fn listing_url(&self) -> String {
        format!("{}/_template", self.base_url())
    }

    /// `{base_url}/_template/{name}`
    pub fn template_url(&self, name: &TemplateName) -> String {
        format!("{}/_template/{}", self.base_url(), name)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `Authorization` header value when credentials are configured.
    pub fn basic_auth_header(&self) -> Option<String> {
        self.credentials.as_ref().map(|c| {
            let token = base64::engine::general_purpose::STANDARD
                .encode(format!("{}:{}", c.username, c.password));
            format!("Basic {token}")
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
