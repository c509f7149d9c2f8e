//! Core schema types.
//!
//! A [`FieldDef`] is one entry of a runtime form schema. Definitions are
//! built by the field editor and owned by the schema store.

use std::fmt;

use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::registry::FieldType;

/// Opaque identity of a field definition.
///
/// Every id is minted fresh when a definition is confirmed and is never
/// reassigned, even after the field is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(Ulid);

impl FieldId {
    pub(crate) fn new() -> Self {
        Self(Ulid::new())
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single choice of a dropdown, checkbox or radio field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
}

impl FieldOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// A field definition: one configured entry of the schema.
///
/// `options` is `Some` and non-empty exactly when the type requires options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    pub id: FieldId,
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub type_: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<FieldOption>>,
}

impl FieldDef {
    /// Option labels in declaration order; empty for free-text types.
    pub fn option_labels(&self) -> Vec<&str> {
        self.options
            .iter()
            .flatten()
            .map(|o| o.label.as_str())
            .collect()
    }
}
