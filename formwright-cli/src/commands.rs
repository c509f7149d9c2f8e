//! Subcommand handlers. Each returns the process exit code.

use std::path::Path;

use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL, Table};
use formwright_fields::{FieldTypeRegistry, FieldsError, FormBuilder, FormConfig};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::recipe::{load_values, Recipe};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
/// Values were rejected; the caller can fix them and retry.
pub const EXIT_VALIDATION: i32 = 2;

#[derive(Serialize)]
struct TypeRow {
    #[serde(rename = "type")]
    type_id: &'static str,
    label: &'static str,
    component: &'static str,
    requires_options: bool,
}

pub fn run_types(format: OutputFormat) -> Result<i32> {
    let rows: Vec<TypeRow> = FieldTypeRegistry::list_all()
        .iter()
        .map(|meta| TypeRow {
            type_id: meta.type_id.as_str(),
            label: meta.display_label,
            component: meta.component.as_str(),
            requires_options: meta.requires_options,
        })
        .collect();

    match format {
        OutputFormat::Table => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Type", "Label", "Component", "Options"]);
            for row in &rows {
                table.add_row(vec![
                    row.type_id,
                    row.label,
                    row.component,
                    if row.requires_options { "required" } else { "-" },
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&rows)?),
    }
    Ok(EXIT_SUCCESS)
}

fn build_form(config: FormConfig, recipe_path: &Path) -> Result<FormBuilder> {
    let recipe = Recipe::load(recipe_path)?;
    let mut builder = FormBuilder::new(config);
    recipe.apply(&mut builder)?;
    tracing::debug!(fields = builder.schema().len(), "recipe applied");
    Ok(builder)
}

#[derive(Serialize)]
struct WidgetRow<'a> {
    name: &'a str,
    label: &'a str,
    widget: formwright_fields::WidgetDescriptor,
}

pub fn run_widgets(config: FormConfig, recipe_path: &Path) -> Result<i32> {
    let builder = build_form(config, recipe_path)?;
    let rows: Vec<WidgetRow> = builder
        .widgets()?
        .into_iter()
        .map(|(def, widget)| WidgetRow {
            name: &def.name,
            label: &def.label,
            widget,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(EXIT_SUCCESS)
}

pub fn run_submit(
    config: FormConfig,
    recipe_path: &Path,
    values_path: &Path,
    format: OutputFormat,
) -> Result<i32> {
    let builder = build_form(config, recipe_path)?;
    let values = load_values(values_path)?;

    match builder.submit(&values) {
        Ok(doc) => {
            match format {
                OutputFormat::Yaml => print!("{}", doc.to_yaml()?),
                OutputFormat::Json => println!("{}", doc.to_json_pretty()?),
                OutputFormat::Table => bail!("table output is not supported for submit"),
            }
            Ok(EXIT_SUCCESS)
        }
        Err(FieldsError::MissingValues { fields }) => {
            eprintln!("Form validation failed. Missing values for:");
            for name in &fields {
                let label = builder
                    .schema()
                    .get_by_name(name)
                    .map(|f| f.label.as_str())
                    .unwrap_or_default();
                eprintln!("  {name} ({label})");
            }
            Ok(EXIT_VALIDATION)
        }
        Err(FieldsError::EmptySchema) => {
            eprintln!("Nothing to submit: the recipe leaves the form without fields");
            Ok(EXIT_VALIDATION)
        }
        Err(e) => Err(e.into()),
    }
}
