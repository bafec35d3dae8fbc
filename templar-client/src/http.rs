//! Raw listing and write requests against the `_template` API.
//!
//! Protocol-level concerns live here: headers, basic auth, TLS (selected by
//! the configured scheme), and the shared request timeout. Responses are
//! returned un-normalized; canonicalization happens in `templar-core`.

use serde_json::{Map, Value};

use templar_core::types::{TemplateContent, TemplateName};

use crate::config::TransportConfig;
use crate::error::ClientError;

/// Fetch the full remote template listing.
///
/// GET `{base}/_template` with `Accept: application/json`. An empty remote
/// store yields an empty mapping, not an error. Only HTTP 200 is accepted.
pub fn list_templates(config: &TransportConfig) -> Result<Map<String, Value>, ClientError> {
    let url = config.listing_url();
    tracing::debug!("listing templates from {url}");

    let mut request = agent(config).get(&url).set("Accept", "application/json");
    if let Some(auth) = config.basic_auth_header() {
        request = request.set("Authorization", &auth);
    }

    let response = match request.call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            return Err(ClientError::unavailable(&url, format!("HTTP {code}")));
        }
        Err(err) => return Err(ClientError::unavailable(&url, err.to_string())),
    };
    if response.status() != 200 {
        return Err(ClientError::unavailable(
            &url,
            format!("HTTP {}", response.status()),
        ));
    }

    let body = response
        .into_string()
        .map_err(|e| ClientError::unavailable(&url, e.to_string()))?;
    let document: Value =
        serde_json::from_str(&body).map_err(|e| ClientError::malformed(&url, e.to_string()))?;
    match document {
        Value::Object(map) => Ok(map),
        other => Err(ClientError::malformed(
            &url,
            format!("expected a JSON object, got {}", json_kind(&other)),
        )),
    }
}

/// Write one canonical template document.
///
/// PUT `{base}/_template/{name}` with `Accept` and `Content-Type` set to
/// `application/json`. Any 2xx response is success.
pub fn put_template(
    config: &TransportConfig,
    name: &TemplateName,
    content: &TemplateContent,
) -> Result<(), ClientError> {
    let url = config.template_url(name);
    let body = serde_json::to_string(content)
        .map_err(|e| ClientError::write_failed(&url, e.to_string()))?;
    tracing::debug!("writing template '{name}' to {url}");

    let mut request = agent(config)
        .put(&url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");
    if let Some(auth) = config.basic_auth_header() {
        request = request.set("Authorization", &auth);
    }

    let response = match request.send_string(&body) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            return Err(ClientError::write_failed(&url, format!("HTTP {code}")));
        }
        Err(err) => return Err(ClientError::write_failed(&url, err.to_string())),
    };
    if !(200..300).contains(&response.status()) {
        return Err(ClientError::write_failed(
            &url,
            format!("HTTP {}", response.status()),
        ));
    }
    Ok(())
}

fn agent(config: &TransportConfig) -> ureq::Agent {
    ureq::AgentBuilder::new().timeout(config.timeout()).build()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
