use super::Component;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Maximum length for component ids (security limit)
const MAX_ID_LENGTH: usize = 512;

/// Maximum length for component names (security limit)
const MAX_NAME_LENGTH: usize = 255;

/// Maximum length for component versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Reasons a document is rejected as a component list
#[derive(Debug, Error, PartialEq)]
pub enum SchemaViolation {
    #[error("Document is not valid JSON: {details}")]
    MalformedJson { details: String },

    #[error("Expected a JSON array of components or an object with a \"components\" array, found {found}")]
    UnexpectedShape { found: &'static str },

    #[error("Component #{index} does not match the component schema: {details}")]
    InvalidComponent { index: usize, details: String },

    #[error("Component #{index}: field '{field}' must not be empty")]
    EmptyField { index: usize, field: &'static str },

    #[error("Component #{index}: field '{field}' is too long ({length} bytes). Maximum allowed: {max} bytes")]
    FieldTooLong {
        index: usize,
        field: &'static str,
        length: usize,
        max: usize,
    },
}

/// SbomDocument - strict parser for component-list documents
///
/// Accepts either a bare array of components or an object carrying a
/// `components` array, and reports every rejection as a typed
/// [`SchemaViolation`].
pub struct SbomDocument;

#[derive(Deserialize)]
struct Wrapped {
    components: Vec<Value>,
}

impl SbomDocument {
    /// Parses and validates a component list
    ///
    /// # Errors
    /// Returns the first schema violation found, in document order
    pub fn parse(text: &str) -> Result<Vec<Component>, SchemaViolation> {
        let value: Value = serde_json::from_str(text).map_err(|e| SchemaViolation::MalformedJson {
            details: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Validates an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Vec<Component>, SchemaViolation> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(_) => {
                let wrapped: Wrapped = serde_json::from_value(value).map_err(|_| {
                    SchemaViolation::UnexpectedShape {
                        found: "an object without a \"components\" array",
                    }
                })?;
                wrapped.components
            }
            other => {
                return Err(SchemaViolation::UnexpectedShape {
                    found: json_kind(&other),
                })
            }
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| Self::parse_component(index, item))
            .collect()
    }

    fn parse_component(index: usize, item: Value) -> Result<Component, SchemaViolation> {
        let mut component: Component =
            serde_json::from_value(item).map_err(|e| SchemaViolation::InvalidComponent {
                index,
                details: e.to_string(),
            })?;

        check_field(index, "id", &component.id, MAX_ID_LENGTH)?;
        check_field(index, "name", &component.name, MAX_NAME_LENGTH)?;
        check_field(index, "version", &component.version, MAX_VERSION_LENGTH)?;

        // Vulnerabilities are a set keyed by id
        let mut seen = HashSet::new();
        component
            .vulnerabilities
            .retain(|vulnerability| seen.insert(vulnerability.id.clone()));

        Ok(component)
    }
}

fn check_field(
    index: usize,
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), SchemaViolation> {
    if value.trim().is_empty() {
        return Err(SchemaViolation::EmptyField { index, field });
    }
    if value.len() > max {
        return Err(SchemaViolation::FieldTooLong {
            index,
            field,
            length: value.len(),
            max,
        });
    }
    Ok(())
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
