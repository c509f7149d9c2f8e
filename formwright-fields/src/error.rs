//! Error types for the form schema core

use std::path::PathBuf;
use thiserror::Error;

/// Result type for form schema operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while building a schema or submitting values.
///
/// None of these abort the workflow: the schema and any entered values are
/// left exactly as they were before the failing call.
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Type identifier is not in the registry
    #[error("unknown field type: {type_id}")]
    UnknownType { type_id: String },

    /// Candidate field rejected by the editor
    #[error("validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    /// Submission is missing values for required fields
    #[error("missing values for required fields: {}", fields.join(", "))]
    MissingValues { fields: Vec<String> },

    /// A field with this name is already in the schema
    #[error("duplicate field name: {name}")]
    DuplicateName { name: String },

    /// A field with this id is already in the schema
    #[error("duplicate field id: {id}")]
    DuplicateId { id: String },

    /// No field with this id
    #[error("field not found by id: {id}")]
    NotFound { id: String },

    /// Editor operation attempted with no open session
    #[error("field editor session is not open")]
    SessionClosed,

    /// Submit attempted against a schema with no fields
    #[error("cannot submit an empty form")]
    EmptySchema,

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl FieldsError {
    pub(crate) fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// True for errors the user fixes by correcting input: a rejected
    /// candidate field or missing submission values.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::MissingValues { .. })
    }

    /// Names of the fields that blocked a submission, if this is a
    /// submission failure.
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            Self::MissingValues { fields } => Some(fields),
            _ => None,
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration file format not supported
    #[error("unsupported configuration file format: {format}")]
    UnsupportedFormat { format: String },

    /// Configuration parsing failed
    #[error("failed to parse configuration: {source}")]
    Parse { source: Box<figment::Error> },

    /// Invalid configuration value
    #[error("invalid configuration value for key '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Parse {
            source: Box::new(error),
        }
    }
}
