//! Central schema registry for all Scan Review types.
//!
//! The `SchemaRegistry` builds JSON Schemas from scan-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in the Scan Review system.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    /// Build a new registry containing all entity and response schemas from scan-core.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity types (3) ---
        register!(schemas, "scan", scan_core::entities::Scan);
        register!(schemas, "decision_record", scan_core::entities::DecisionRecord);
        register!(schemas, "review_summary", scan_core::session::ReviewSummary);

        // --- CLI response types (5) ---
        register!(schemas, "status_response", scan_core::responses::StatusResponse);
        register!(
            schemas,
            "decision_response",
            scan_core::responses::DecisionResponse
        );
        register!(schemas, "undo_response", scan_core::responses::UndoResponse);
        register!(schemas, "recent_response", scan_core::responses::RecentResponse);
        register!(
            schemas,
            "scan_list_response",
            scan_core::responses::ScanListResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let validator = self.validator(name)?;
        let errors = collect_errors(&validator, instance);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// Validate every element of a JSON array against a named schema.
    ///
    /// Stops at the first invalid element.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotAnArray` when `instances` is not an array and
    /// `SchemaError::ElementInvalid` naming the first failing index.
    pub fn validate_each(&self, name: &str, instances: &Value) -> Result<(), SchemaError> {
        let Value::Array(items) = instances else {
            return Err(SchemaError::NotAnArray {
                found: json_kind(instances),
            });
        };

        let validator = self.validator(name)?;
        for (index, item) in items.iter().enumerate() {
            let errors = collect_errors(&validator, item);
            if !errors.is_empty() {
                return Err(SchemaError::ElementInvalid { index, errors });
            }
        }
        Ok(())
    }

    fn validator(&self, name: &str) -> Result<jsonschema::Validator, SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        jsonschema::validator_for(schema).map_err(|e| SchemaError::Generation(format!("{e}")))
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_errors(validator: &jsonschema::Validator, instance: &Value) -> Vec<String> {
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
