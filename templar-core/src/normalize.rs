//! Boundary normalization of raw template documents.
//!
//! Remote services are inconsistent about whether `order` round-trips as a
//! number or a numeric string, and about which sub-documents they bother to
//! emit at all. Normalizing once here means every later comparison is plain
//! structural equality with no special-casing.

use serde_json::{Map, Value};

use crate::types::TemplateContent;

/// Canonicalize a raw template document (remote or declared).
///
/// - `aliases` / `mappings` / `settings`: kept when present and a mapping,
///   otherwise replaced with an empty mapping.
/// - `template`: taken verbatim; stays `None` when absent.
/// - `order`: defaulted to 0, with numeric strings parsed to integers.
pub fn normalize(raw: &Value) -> TemplateContent {
    let obj = raw.as_object();
    TemplateContent {
        order: obj
            .and_then(|o| o.get("order"))
            .map(normalize_order)
            .unwrap_or(0),
        aliases: map_field(obj, "aliases"),
        mappings: map_field(obj, "mappings"),
        settings: map_field(obj, "settings"),
        template: obj
            .and_then(|o| o.get("template"))
            .and_then(Value::as_str)
            .map(str::to_owned),
    }
}

fn map_field(obj: Option<&Map<String, Value>>, key: &str) -> Map<String, Value> {
    obj.and_then(|o| o.get(key))
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default()
}

/// Coerce an `order` value to an integer.
///
/// Fractional values truncate toward zero; unparseable values fall back to 0.
fn normalize_order(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
