//! FormBuilder: the workflow a presentation layer drives.
//!
//! Owns the schema and the editor session for one form, and routes
//! rendering and submission through the dispatcher and the pipeline.

use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::editor::FieldEditor;
use crate::error::{FieldsError, Result};
use crate::logging::Pretty;
use crate::render::{RenderDispatcher, WidgetDescriptor};
use crate::store::SchemaStore;
use crate::submission::{SubmissionDocument, SubmissionPipeline, ValueMap};
use crate::types::{FieldDef, FieldId};

#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    store: SchemaStore,
    editor: FieldEditor,
    dispatcher: RenderDispatcher,
    pipeline: SubmissionPipeline,
}

impl FormBuilder {
    pub fn new(config: FormConfig) -> Self {
        Self {
            store: SchemaStore::new(),
            dispatcher: RenderDispatcher::new(&config),
            editor: FieldEditor::new(config),
            pipeline: SubmissionPipeline::new(),
        }
    }

    pub fn schema(&self) -> &SchemaStore {
        &self.store
    }

    pub fn editor(&self) -> &FieldEditor {
        &self.editor
    }

    /// Editor access for setting label, type and options.
    pub fn editor_mut(&mut self) -> &mut FieldEditor {
        &mut self.editor
    }

    pub fn open_editor(&mut self) -> &mut FieldEditor {
        self.editor.open();
        &mut self.editor
    }

    pub fn cancel_editor(&mut self) {
        self.editor.cancel();
    }

    /// Confirm the open candidate and append it to the schema.
    ///
    /// Either both steps happen or neither does: a rejected candidate or a
    /// failed append leaves the schema and the editor session unchanged.
    pub fn add_field(&mut self) -> Result<&FieldDef> {
        let def = self.editor.build(&self.store)?;
        self.store.append(def)?;
        self.editor.close();

        let added = &self.store.list()[self.store.len() - 1];
        info!(name = %added.name, label = %added.label, kind = %added.type_, "field added");
        Ok(added)
    }

    /// Remove a field by id. Returns false if it was already gone.
    pub fn remove_field(&mut self, id: &FieldId) -> bool {
        match self.store.remove(id) {
            Ok(_) => true,
            Err(FieldsError::NotFound { .. }) => {
                debug!(%id, "remove ignored, field already gone");
                false
            }
            Err(e) => {
                warn!(%id, error = %e, "remove failed");
                false
            }
        }
    }

    /// Widget for every field, in display order, computed from the current schema.
    pub fn widgets(&self) -> Result<Vec<(&FieldDef, WidgetDescriptor)>> {
        self.store
            .list()
            .iter()
            .map(|def| self.dispatcher.select_widget(def).map(|w| (def, w)))
            .collect()
    }

    /// Submission is offered only once the schema has at least one field.
    pub fn can_submit(&self) -> bool {
        !self.store.is_empty()
    }

    pub fn submit(&self, values: &ValueMap) -> Result<SubmissionDocument> {
        if !self.can_submit() {
            return Err(FieldsError::EmptySchema);
        }
        let doc = self.pipeline.submit(&self.store, values)?;
        debug!("submission document: {}", Pretty(&doc));
        Ok(doc)
    }

    /// Start over: empty schema, no open editor session.
    pub fn reset(&mut self) {
        self.editor.cancel();
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Choice;

    fn add(builder: &mut FormBuilder, label: &str, type_id: &str, options: Option<&str>) -> FieldId {
        let editor = builder.open_editor();
        editor.set_label(label).unwrap();
        editor.set_type(type_id).unwrap();
        if let Some(raw) = options {
            editor.set_options_from_text(raw).unwrap();
        }
        builder.add_field().unwrap().id
    }

    #[test]
    fn add_field_appends_and_closes_editor() {
        let mut builder = FormBuilder::default();
        add(&mut builder, "Name", "text", None);
        assert!(!builder.editor().is_open());
        assert_eq!(builder.schema().len(), 1);
        assert_eq!(builder.schema().list()[0].name, "field0");
    }

    #[test]
    fn rejected_candidate_keeps_session_and_schema() {
        let mut builder = FormBuilder::default();
        add(&mut builder, "Name", "text", None);

        let editor = builder.open_editor();
        editor.set_type("radio").unwrap();
        editor.set_label("Choice").unwrap();
        assert!(builder.add_field().unwrap_err().is_validation());

        assert!(builder.editor().is_open());
        assert_eq!(builder.editor().draft().unwrap().label, "Choice");
        assert_eq!(builder.schema().len(), 1);
    }

    #[test]
    fn names_do_not_collide_after_removal() {
        let mut builder = FormBuilder::default();
        let first = add(&mut builder, "A", "text", None);
        add(&mut builder, "B", "text", None);
        assert!(builder.remove_field(&first));

        add(&mut builder, "C", "text", None);
        let names: Vec<_> = builder
            .schema()
            .list()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["field1", "field2"]);
    }

    #[test]
    fn remove_twice_reports_false() {
        let mut builder = FormBuilder::default();
        let id = add(&mut builder, "A", "text", None);
        assert!(builder.remove_field(&id));
        assert!(!builder.remove_field(&id));
        assert!(builder.schema().is_empty());
    }

    #[test]
    fn widgets_follow_schema_changes() {
        let mut builder = FormBuilder::default();
        let size = add(&mut builder, "Size", "dropdown", Some("S"));
        add(&mut builder, "Notes", "textarea", None);

        let widgets = builder.widgets().unwrap();
        assert_eq!(widgets.len(), 2);
        assert_eq!(
            widgets[0].1,
            WidgetDescriptor::SingleSelect {
                placeholder: "Please select".into(),
                choices: vec![Choice {
                    display: "S".into(),
                    value: "S".into()
                }],
            }
        );

        builder.remove_field(&size);
        let widgets = builder.widgets().unwrap();
        assert_eq!(widgets.len(), 1);
        assert_eq!(widgets[0].0.label, "Notes");
    }

    #[test]
    fn submit_gated_on_empty_schema() {
        let builder = FormBuilder::default();
        assert!(!builder.can_submit());
        assert!(matches!(
            builder.submit(&ValueMap::new()),
            Err(FieldsError::EmptySchema)
        ));
    }

    #[test]
    fn failed_submit_keeps_values_and_schema() {
        let mut builder = FormBuilder::default();
        add(&mut builder, "Name", "text", None);
        add(&mut builder, "Age", "text", None);

        let mut values = ValueMap::new();
        values.insert("field1".into(), "36".into());
        let err = builder.submit(&values).unwrap_err();
        assert_eq!(err.missing_fields().unwrap(), ["field0".to_string()]);
        assert_eq!(builder.schema().len(), 2);

        values.insert("field0".into(), "Ada".into());
        let doc = builder.submit(&values).unwrap();
        assert_eq!(doc.form_values.len(), 2);
    }

    #[test]
    fn reset_clears_everything() {
        let mut builder = FormBuilder::default();
        add(&mut builder, "Name", "text", None);
        builder.open_editor().set_label("pending").unwrap();
        builder.reset();

        assert!(builder.schema().is_empty());
        assert!(!builder.editor().is_open());
        add(&mut builder, "Again", "text", None);
        assert_eq!(builder.schema().list()[0].name, "field0");
    }
}
