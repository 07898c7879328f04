//! Type-safe schema generation for structured outputs.
//!
//! Uses the `schemars` crate to automatically generate JSON schemas from Rust types.
//!
//! # Example
//!
//! ```rust,ignore
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//! use openai_client::StructuredOutput;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Posting {
//!     title: String,
//!     location: String,
//! }
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct ExtractionResponse {
//!     postings: Vec<Posting>,
//! }
//!
//! // Get a strict-mode compatible schema
//! let schema = ExtractionResponse::openai_schema();
//! ```

use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;

/// Trait for types that can be used as structured output.
///
/// Automatically implemented for any type that implements `JsonSchema + DeserializeOwned`.
pub trait StructuredOutput: JsonSchema + DeserializeOwned {
    /// Generate a strict-mode compatible JSON schema for this type.
    ///
    /// The API's strict mode requires:
    /// 1. `additionalProperties: false` on all object schemas
    /// 2. ALL properties listed in `required`, even nullable ones
    /// 3. Fully inlined schemas (no `$ref` references)
    ///
    /// This method transforms the schemars output to meet these requirements.
    fn openai_schema() -> serde_json::Value {
        let schema = schema_for!(Self);
        let mut value = serde_json::to_value(schema).unwrap_or_default();

        // Step 1: Fix all object schemas in definitions first
        fix_object_schemas(&mut value);

        // Step 2: Inline all $ref references (strict mode doesn't follow refs)
        inline_refs(&mut value);

        // Step 3: Remove definitions section and $schema (the API doesn't need them)
        if let serde_json::Value::Object(map) = &mut value {
            map.remove("definitions");
            map.remove("$schema");
        }

        value
    }

    /// Get the schema name for this type.
    fn type_name() -> String {
        <Self as JsonSchema>::schema_name()
    }
}

// Blanket implementation for all types that satisfy the bounds
impl<T: JsonSchema + DeserializeOwned> StructuredOutput for T {}

/// Fix all object schemas for strict mode compatibility.
///
/// Adds `additionalProperties: false` and ensures all properties are in `required`.
fn fix_object_schemas(value: &mut serde_json::Value) {
    if let serde_json::Value::Object(map) = value {
        // If this is an object type schema
        if map.get("type") == Some(&serde_json::Value::String("object".to_string())) {
            // Add additionalProperties: false
            map.insert(
                "additionalProperties".to_string(),
                serde_json::Value::Bool(false),
            );

            // Strict mode requires ALL properties in the required array
            if let Some(serde_json::Value::Object(props)) = map.get("properties") {
                let all_keys: Vec<serde_json::Value> = props
                    .keys()
                    .map(|k| serde_json::Value::String(k.clone()))
                    .collect();
                map.insert("required".to_string(), serde_json::Value::Array(all_keys));
            }
        }

        // Recurse into nested schemas
        for (_, v) in map.iter_mut() {
            fix_object_schemas(v);
        }
    } else if let serde_json::Value::Array(arr) = value {
        for item in arr.iter_mut() {
            fix_object_schemas(item);
        }
    }
}

/// Inline all $ref references by replacing them with the actual schema from definitions.
///
/// Strict mode validation doesn't properly traverse $ref references,
/// so we need to inline them all.
fn inline_refs(value: &mut serde_json::Value) {
    // First, extract definitions if they exist
    let definitions = if let serde_json::Value::Object(map) = value {
        map.get("definitions").cloned()
    } else {
        None
    };

    if let Some(defs) = definitions {
        inline_refs_recursive(value, &defs);
    }
}

/// Recursively inline $ref references.
fn inline_refs_recursive(value: &mut serde_json::Value, definitions: &serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            // Check if this object has a $ref
            if let Some(serde_json::Value::String(ref_path)) = map.get("$ref").cloned() {
                // Parse ref like "#/definitions/Posting"
                if ref_path.starts_with("#/definitions/") {
                    let type_name = ref_path.trim_start_matches("#/definitions/");
                    if let Some(def) = definitions.get(type_name) {
                        // Replace this object with the inlined definition
                        *value = def.clone();
                        // Recursively inline any nested refs in the inlined schema
                        inline_refs_recursive(value, definitions);
                        return;
                    }
                }
            }

            // Recurse into nested values
            for (_, v) in map.iter_mut() {
                inline_refs_recursive(v, definitions);
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr.iter_mut() {
                inline_refs_recursive(item, definitions);
            }
        }
        _ => {}
    }
}
