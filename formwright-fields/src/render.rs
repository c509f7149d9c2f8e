//! Widget selection for field definitions.
//!
//! The dispatcher maps a definition to an abstract widget descriptor. It says
//! which control to present and how to configure it; styling and layout
//! belong to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::error::{FieldsError, Result};
use crate::registry::FieldType;
use crate::types::{FieldDef, FieldOption};

/// One entry of a single-select choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub display: String,
    pub value: String,
}

/// Which control to present for a field, and its configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum WidgetDescriptor {
    SingleLine {
        placeholder: String,
    },
    MultiLine {
        placeholder: String,
    },
    SingleSelect {
        placeholder: String,
        choices: Vec<Choice>,
    },
    MultiSelect {
        choices: Vec<String>,
        selected: Vec<String>,
    },
    ExclusiveChoice {
        choices: Vec<String>,
        selected: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct RenderDispatcher {
    text_placeholder: String,
    select_placeholder: String,
}

impl RenderDispatcher {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            text_placeholder: config.text_placeholder.clone(),
            select_placeholder: config.select_placeholder.clone(),
        }
    }

    /// Select the widget for `def`.
    ///
    /// Depends only on the definition's type and options, so the result
    /// is always current for whatever definition is passed in.
    pub fn select_widget(&self, def: &FieldDef) -> Result<WidgetDescriptor> {
        let widget = match def.type_ {
            FieldType::Text => WidgetDescriptor::SingleLine {
                placeholder: self.text_placeholder.clone(),
            },
            FieldType::Textarea => WidgetDescriptor::MultiLine {
                placeholder: self.text_placeholder.clone(),
            },
            FieldType::Dropdown => WidgetDescriptor::SingleSelect {
                placeholder: self.select_placeholder.clone(),
                choices: required_options(def)?
                    .iter()
                    .map(|o| Choice {
                        display: o.label.clone(),
                        value: o.label.clone(),
                    })
                    .collect(),
            },
            FieldType::Checkbox => WidgetDescriptor::MultiSelect {
                choices: option_labels(required_options(def)?),
                selected: Vec::new(),
            },
            FieldType::Radio => WidgetDescriptor::ExclusiveChoice {
                choices: option_labels(required_options(def)?),
                selected: None,
            },
        };
        Ok(widget)
    }
}

impl Default for RenderDispatcher {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

/// A definition that reached the dispatcher without options was not built
/// by the editor; report it instead of rendering an empty choice list.
fn required_options(def: &FieldDef) -> Result<&[FieldOption]> {
    match def.options.as_deref() {
        Some(options) if !options.is_empty() => Ok(options),
        _ => Err(FieldsError::Validation {
            field: def.name.clone(),
            message: format!("{} field has no options", def.type_),
        }),
    }
}

fn option_labels(options: &[FieldOption]) -> Vec<String> {
    options.iter().map(|o| o.label.clone()).collect()
}
