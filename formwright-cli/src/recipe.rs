//! YAML recipes: a scripted stand-in for the user's add/remove actions.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use formwright_fields::{FieldValue, FormBuilder, ValueMap};
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};

/// One field to add, as a user would fill in the editor.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldStep {
    pub label: String,
    #[serde(rename = "type", default = "default_type")]
    pub type_id: String,
    /// Raw options text, split by the editor
    #[serde(default)]
    pub options: Option<String>,
}

fn default_type() -> String {
    "text".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Recipe {
    #[serde(default)]
    pub fields: Vec<FieldStep>,
    /// Names of fields to remove after all fields are added
    #[serde(default)]
    pub remove: Vec<String>,
}

impl Recipe {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read recipe {}", path.display()))?;
        serde_yaml_ng::from_str(&text)
            .with_context(|| format!("failed to parse recipe {}", path.display()))
    }

    /// Replay the recipe against `builder`, one editor session per field.
    pub fn apply(&self, builder: &mut FormBuilder) -> Result<()> {
        for (i, step) in self.fields.iter().enumerate() {
            if let Err(e) = add_step(builder, step) {
                builder.cancel_editor();
                return Err(anyhow::Error::new(e)
                    .context(format!("field #{} ({})", i + 1, step.label)));
            }
        }

        for name in &self.remove {
            match builder.schema().get_by_name(name).map(|f| f.id) {
                Some(id) => {
                    builder.remove_field(&id);
                    debug!(%name, "removed field");
                }
                None => warn!(%name, "recipe removes a field that does not exist"),
            }
        }
        Ok(())
    }
}

fn add_step(builder: &mut FormBuilder, step: &FieldStep) -> formwright_fields::Result<()> {
    let editor = builder.open_editor();
    editor.set_label(step.label.as_str())?;
    editor.set_type(&step.type_id)?;
    if let Some(raw) = &step.options {
        editor.set_options_from_text(raw)?;
    }
    builder.add_field()?;
    Ok(())
}

/// Load a JSON or YAML map of field name to value.
///
/// A `null` entry means nothing was entered and is left out of the map, so
/// submission reports that field as missing.
pub fn load_values(path: &Path) -> Result<ValueMap> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read values {}", path.display()))?;
    // YAML is a superset of JSON, so one parser covers both
    let raw: IndexMap<String, Option<FieldValue>> = serde_yaml_ng::from_str(&text)
        .with_context(|| format!("failed to parse values {}", path.display()))?;

    Ok(raw
        .into_iter()
        .filter_map(|(name, value)| {
            if value.is_none() {
                debug!(%name, "null value treated as not entered");
            }
            value.map(|v| (name, v))
        })
        .collect())
}
