use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
#[command(name = "formwright")]
#[command(version)]
#[command(about = "Build a form at runtime and produce a submission document")]
#[command(long_about = "
formwright assembles a form schema from a YAML recipe, selects a widget for
each field and validates entered values into a submission document.

A recipe lists fields in display order, and optionally names fields to remove:

  fields:
    - label: Name
      type: text
    - label: Size
      type: dropdown
      options: \"S, M, L\"
  remove: [field0]

Example usage:
  formwright types                                    # List field types
  formwright widgets --recipe form.yaml               # Show widget per field
  formwright submit --recipe form.yaml --values v.json
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file (TOML, YAML or JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the available field types
    Types {
        #[arg(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Build the recipe's schema and print the widget for each field
    Widgets {
        /// YAML recipe describing the fields
        #[arg(long)]
        recipe: PathBuf,
    },
    /// Build the recipe's schema and submit values against it
    Submit {
        /// YAML recipe describing the fields
        #[arg(long)]
        recipe: PathBuf,

        /// JSON or YAML map of field name to value
        #[arg(long)]
        values: PathBuf,

        /// Output format for the submission document (json or yaml)
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}
