//! Entity formatting and response shape handling
//!
//! The catalog returns entities as loosely structured JSON; nothing here
//! validates a schema. [`format_entity`] renders any JSON value into the
//! two-line display form with documented fallbacks, and [`EntityPage`]
//! names the response shapes the listing endpoint is known to produce.

use serde::Deserialize;
use serde_json::Value;

/// Separator between formatted entities in multi-entity output
pub const ENTITY_SEPARATOR: &str = "\n---\n";

const UNKNOWN: &str = "Unknown";
const DEFAULT_NAMESPACE: &str = "default";

/// Render an entity as two lines:
///
/// ```text
/// <kind>:<namespace>/<name>
/// Description: <description>
/// ```
///
/// Missing fields fall back to `Unknown` (kind, name), `default`
/// (namespace), and the empty string (description). Extra fields are
/// ignored.
pub fn format_entity(entity: &Value) -> String {
    let metadata = entity.get("metadata");
    let kind = entity.get("kind").and_then(Value::as_str).unwrap_or(UNKNOWN);
    let name = metadata
        .and_then(|meta| meta.get("name"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN);
    let namespace = metadata
        .and_then(|meta| meta.get("namespace"))
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_NAMESPACE);
    let description = metadata
        .and_then(|meta| meta.get("description"))
        .and_then(Value::as_str)
        .unwrap_or("");
    format!("{kind}:{namespace}/{name}\nDescription: {description}")
}

/// The shapes the entity listing endpoint returns: either a bare array
/// of entities or an object wrapping that array under `items`. Anything
/// else is `Unrecognized` and maps to "No entities found." at the tool
/// layer.
#[derive(Debug)]
pub enum EntityPage {
    /// A sequence of entity values (elements are not yet validated as
    /// objects)
    Entities(Vec<Value>),
    /// The response did not contain an entity sequence
    Unrecognized,
}

impl EntityPage {
    /// Classify a decoded listing response
    pub fn from_response(response: Value) -> Self {
        match response {
            Value::Array(entities) => Self::Entities(entities),
            Value::Object(mut object) => match object.remove("items") {
                Some(Value::Array(entities)) => Self::Entities(entities),
                _ => Self::Unrecognized,
            },
            _ => Self::Unrecognized,
        }
    }
}

/// Decoded ancestry response. A payload without `items` fails to decode,
/// which the ancestry tool reports as "Unable to fetch ancestry."
#[derive(Debug, Deserialize)]
pub struct AncestryResponse {
    /// The ancestry chain, nearest first as reported by the catalog
    pub items: Vec<AncestryNode>,
}

/// One link in an ancestry chain. The catalog wraps each entity in an
/// object that also carries parent references, which we ignore.
#[derive(Debug, Deserialize)]
pub struct AncestryNode {
    /// The entity at this link; formatted as an empty entity when absent
    pub entity: Option<Value>,
}

impl AncestryNode {
    /// Format this link's entity, falling back to the empty entity
    pub fn format(&self) -> String {
        format_entity(self.entity.as_ref().unwrap_or(&Value::Null))
    }
}
