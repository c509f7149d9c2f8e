//! Field type registry.
//!
//! The set of field types is closed and compiled in. Each type carries the
//! metadata the editor and the render dispatcher need: a display label for
//! type-choice menus, the abstract control family, and whether the type
//! takes a list of options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FieldsError, Result};

/// Identifier of a field type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Textarea,
    Dropdown,
    Checkbox,
    Radio,
}

impl FieldType {
    /// The identifier used in recipes and submission documents.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Dropdown => "dropdown",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }

    /// Registry metadata for this type.
    pub fn meta(self) -> &'static TypeMeta {
        // REGISTRY is declared in enum order
        &REGISTRY[self as usize]
    }

    pub fn requires_options(self) -> bool {
        self.meta().requires_options
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FieldsError;

    fn from_str(s: &str) -> Result<Self> {
        FieldTypeRegistry::lookup(s).map(|meta| meta.type_id)
    }
}

/// Abstract control family a type renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Input,
    Textarea,
    Select,
    Checkbox,
    Radio,
}

impl Component {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Textarea => "textarea",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
        }
    }
}

/// Metadata for one registered field type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeMeta {
    pub type_id: FieldType,
    pub display_label: &'static str,
    pub component: Component,
    pub requires_options: bool,
}

static REGISTRY: [TypeMeta; 5] = [
    TypeMeta {
        type_id: FieldType::Text,
        display_label: "Text Input",
        component: Component::Input,
        requires_options: false,
    },
    TypeMeta {
        type_id: FieldType::Textarea,
        display_label: "Text Area",
        component: Component::Textarea,
        requires_options: false,
    },
    TypeMeta {
        type_id: FieldType::Dropdown,
        display_label: "Dropdown",
        component: Component::Select,
        requires_options: true,
    },
    TypeMeta {
        type_id: FieldType::Checkbox,
        display_label: "Checkbox",
        component: Component::Checkbox,
        requires_options: true,
    },
    TypeMeta {
        type_id: FieldType::Radio,
        display_label: "Radio Button",
        component: Component::Radio,
        requires_options: true,
    },
];

/// Read-only catalog of the compiled-in field types.
pub struct FieldTypeRegistry;

impl FieldTypeRegistry {
    /// Look up a type by its string identifier.
    pub fn lookup(type_id: &str) -> Result<&'static TypeMeta> {
        REGISTRY
            .iter()
            .find(|meta| meta.type_id.as_str() == type_id)
            .ok_or_else(|| FieldsError::UnknownType {
                type_id: type_id.to_string(),
            })
    }

    /// All types, in the order a type-choice menu presents them.
    pub fn list_all() -> &'static [TypeMeta] {
        &REGISTRY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_types() {
        let meta = FieldTypeRegistry::lookup("dropdown").unwrap();
        assert_eq!(meta.type_id, FieldType::Dropdown);
        assert_eq!(meta.display_label, "Dropdown");
        assert_eq!(meta.component, Component::Select);
        assert!(meta.requires_options);

        let meta = FieldTypeRegistry::lookup("textarea").unwrap();
        assert_eq!(meta.display_label, "Text Area");
        assert!(!meta.requires_options);
    }

    #[test]
    fn lookup_unknown_type_fails() {
        let err = FieldTypeRegistry::lookup("slider").unwrap_err();
        assert!(matches!(err, FieldsError::UnknownType { ref type_id } if type_id == "slider"));

        // identifiers are case-sensitive
        assert!(FieldTypeRegistry::lookup("Text").is_err());
    }

    #[test]
    fn list_all_is_ordered_and_consistent() {
        let ids: Vec<_> = FieldTypeRegistry::list_all()
            .iter()
            .map(|m| m.type_id.as_str())
            .collect();
        assert_eq!(ids, ["text", "textarea", "dropdown", "checkbox", "radio"]);

        for meta in FieldTypeRegistry::list_all() {
            assert_eq!(meta.type_id.meta(), meta);
        }
    }

    #[test]
    fn requires_options_only_for_choice_types() {
        assert!(!FieldType::Text.requires_options());
        assert!(!FieldType::Textarea.requires_options());
        assert!(FieldType::Dropdown.requires_options());
        assert!(FieldType::Checkbox.requires_options());
        assert!(FieldType::Radio.requires_options());
    }

    #[test]
    fn field_type_parses_and_displays() {
        let ft: FieldType = "radio".parse().unwrap();
        assert_eq!(ft, FieldType::Radio);
        assert_eq!(ft.to_string(), "radio");
        assert!("".parse::<FieldType>().is_err());
        assert_eq!(FieldType::default(), FieldType::Text);
    }

    #[test]
    fn field_type_serializes_lowercase() {
        let json = serde_json::to_string(&FieldType::Checkbox).unwrap();
        assert_eq!(json, "\"checkbox\"");
        let parsed: FieldType = serde_json::from_str("\"textarea\"").unwrap();
        assert_eq!(parsed, FieldType::Textarea);
        assert!(serde_json::from_str::<FieldType>("\"slider\"").is_err());
    }
}
