//! Query key composition.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A key uniquely identifying a cached query result.
///
/// Made of an entity name, an operation scope and the discriminating
/// parameters. Parameters are stored as canonical JSON with object keys
/// sorted at every depth, so the same logical request always produces the
/// same key regardless of field order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QueryKey {
    entity: String,
    scope: String,
    params: String,
}

impl QueryKey {
    /// Create a key from an entity, a scope and a JSON parameter object.
    pub fn new(entity: impl Into<String>, scope: impl Into<String>, params: Value) -> Self {
        Self {
            entity: entity.into(),
            scope: scope.into(),
            params: canonical_json(&params),
        }
    }

    /// Get the entity name (e.g. `wallet`).
    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Get the operation scope (e.g. `get`, `list`).
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Get the canonical parameter JSON.
    pub fn params(&self) -> &str {
        &self.params
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}{}", self.entity, self.scope, self.params)
    }
}

fn canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));

            out.push('{');
            for (i, (key, value)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(value, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}
