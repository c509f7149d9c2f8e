//! Log formatting for schema values.

use serde::Serialize;
use std::fmt::Debug;

/// Renders a schema value as an indented YAML block in a log line.
///
/// `FormBuilder::submit` logs each accepted submission document through this
/// at debug level, so `RUST_LOG=formwright_fields=debug` shows the schema and
/// values the way they would be written out. Falls back to `{:#?}` when the
/// value cannot be expressed as YAML.
pub struct Pretty<T>(pub T);

impl<T: Serialize + Debug> std::fmt::Display for Pretty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match serde_yaml_ng::to_string(&self.0) {
            Ok(yaml) => write!(f, "\n{}", yaml),
            Err(_) => write!(f, "\n{:#?}", self.0),
        }
    }
}
