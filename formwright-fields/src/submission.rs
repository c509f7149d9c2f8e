//! Submission pipeline: required-value checks and the submission document.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, warn};

use crate::error::{FieldsError, Result};
use crate::store::SchemaStore;
use crate::types::FieldDef;

/// A value entered for one field.
///
/// Text, textarea, dropdown and radio fields produce a single string;
/// checkbox fields produce the list of ticked labels.
///
/// Deserializing accepts numbers and booleans as well and keeps their
/// text form, so `36` and `"36"` are the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(s) => s,
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Single(Scalar),
    // null entries of a selection carry nothing
    Many(Vec<Option<Scalar>>),
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::Single(scalar) => Self::Single(scalar.into()),
            RawValue::Many(items) => {
                Self::Many(items.into_iter().flatten().map(String::from).collect())
            }
        })
    }
}

impl FieldValue {
    /// An empty string or an empty selection does not satisfy a required field.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(s) => s.is_empty(),
            Self::Many(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

/// Live input values keyed by field name.
pub type ValueMap = IndexMap<String, FieldValue>;

/// The schema paired with the values entered for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDocument {
    pub fields: Vec<FieldDef>,
    pub form_values: ValueMap,
}

impl SubmissionDocument {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}

/// Validates values against the schema and assembles submission documents.
///
/// Every field in the schema is required.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmissionPipeline;

impl SubmissionPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Check `values` against `schema` and build the document.
    ///
    /// Fails with `MissingValues` naming every field without a value, in
    /// schema order. Keys of `values` that name no current field are left
    /// out of the document.
    pub fn submit(&self, schema: &SchemaStore, values: &ValueMap) -> Result<SubmissionDocument> {
        let missing: Vec<String> = schema
            .list()
            .iter()
            .filter(|f| values.get(&f.name).map_or(true, FieldValue::is_empty))
            .map(|f| f.name.clone())
            .collect();

        if !missing.is_empty() {
            warn!(missing = ?missing, "submission rejected");
            return Err(FieldsError::MissingValues { fields: missing });
        }

        let form_values: ValueMap = schema
            .list()
            .iter()
            .filter_map(|f| values.get(&f.name).map(|v| (f.name.clone(), v.clone())))
            .collect();

        let stale = values.len() - form_values.len();
        if stale > 0 {
            debug!(stale, "dropped values for fields not in the schema");
        }

        info!(fields = schema.len(), "submission accepted");
        Ok(SubmissionDocument {
            fields: schema.list().to_vec(),
            form_values,
        })
    }
}
