//! Runtime form schema model
//!
//! `formwright-fields` lets a user assemble a form at runtime: add and remove
//! typed fields, configure their options, and turn entered values into a
//! validated submission document. It has no UI of its own; a presentation
//! layer drives it and renders what it returns.
//!
//! # Architecture
//!
//! - **Closed type set**: `FieldTypeRegistry` is compiled in; a new field type is a code change
//! - **Staged edits**: `FieldEditor` holds one candidate until it is confirmed or cancelled
//! - **Stable names**: `SchemaStore` names fields by insertion position and never renumbers
//! - **Pure dispatch**: `RenderDispatcher` maps a definition to a widget descriptor
//! - **All-or-nothing submit**: `SubmissionPipeline` reports every missing value at once

pub mod builder;
pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod registry;
pub mod render;
pub mod store;
pub mod submission;
pub mod types;

pub use builder::FormBuilder;
pub use config::FormConfig;
pub use editor::{parse_options, FieldDraft, FieldEditor};
pub use error::{ConfigError, FieldsError, Result};
pub use logging::Pretty;
pub use registry::{Component, FieldType, FieldTypeRegistry, TypeMeta};
pub use render::{Choice, RenderDispatcher, WidgetDescriptor};
pub use store::SchemaStore;
pub use submission::{FieldValue, SubmissionDocument, SubmissionPipeline, ValueMap};
pub use types::{FieldDef, FieldId, FieldOption};
