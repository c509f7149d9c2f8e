//! FieldEditor: stages one candidate field until it is confirmed or cancelled.
//!
//! The editor never touches the schema store. `confirm` reads the store only
//! to derive the new field's positional name; appending is the caller's job.

use tracing::{debug, trace};

use crate::config::FormConfig;
use crate::error::{FieldsError, Result};
use crate::registry::{FieldType, FieldTypeRegistry};
use crate::store::SchemaStore;
use crate::types::{FieldDef, FieldId, FieldOption};

/// The candidate field being edited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDraft {
    pub label: String,
    pub type_: FieldType,
    pub options: Option<Vec<FieldOption>>,
}

/// Split raw options text on `delimiter`, trim each piece and drop empty ones.
///
/// Input made only of delimiters and whitespace yields an empty list.
pub fn parse_options(raw: &str, delimiter: char) -> Vec<FieldOption> {
    raw.split(delimiter)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(FieldOption::new)
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    config: FormConfig,
    draft: Option<FieldDraft>,
}

impl FieldEditor {
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            draft: None,
        }
    }

    /// Start a session with a fresh default candidate.
    ///
    /// Any previous candidate is discarded, whether or not the last session
    /// was confirmed or cancelled.
    pub fn open(&mut self) {
        trace!("field editor opened");
        self.draft = Some(FieldDraft::default());
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// The current candidate, if a session is open.
    pub fn draft(&self) -> Option<&FieldDraft> {
        self.draft.as_ref()
    }

    fn draft_mut(&mut self) -> Result<&mut FieldDraft> {
        self.draft.as_mut().ok_or(FieldsError::SessionClosed)
    }

    pub fn set_label(&mut self, text: impl Into<String>) -> Result<()> {
        self.draft_mut()?.label = text.into();
        Ok(())
    }

    /// Change the candidate's type by identifier.
    ///
    /// An unknown identifier fails with `UnknownType` and leaves the
    /// candidate as it was.
    pub fn set_type(&mut self, type_id: &str) -> Result<()> {
        self.draft_mut()?;
        let meta = FieldTypeRegistry::lookup(type_id)?;
        self.set_field_type(meta.type_id)
    }

    /// Change the candidate's type.
    ///
    /// Switching to a free-text type clears the options. Switching to a
    /// choice type keeps whatever options were entered, or none.
    pub fn set_field_type(&mut self, field_type: FieldType) -> Result<()> {
        let draft = self.draft_mut()?;
        draft.type_ = field_type;
        if !field_type.requires_options() {
            draft.options = None;
        }
        Ok(())
    }

    /// Replace the candidate's options with those parsed from `raw`.
    pub fn set_options_from_text(&mut self, raw: &str) -> Result<()> {
        let delimiter = self.config.option_delimiter;
        self.draft_mut()?.options = Some(parse_options(raw, delimiter));
        Ok(())
    }

    /// Validate the candidate and mint a definition, leaving the session open.
    pub fn build(&self, store: &SchemaStore) -> Result<FieldDef> {
        let draft = self.draft.as_ref().ok_or(FieldsError::SessionClosed)?;

        // whitespace alone is not a label, but the label is stored as typed
        if draft.label.trim().is_empty() {
            return Err(FieldsError::validation("label", "field label cannot be empty"));
        }

        let meta = draft.type_.meta();
        let options = if meta.requires_options {
            match &draft.options {
                Some(options) if !options.is_empty() => Some(options.clone()),
                _ => {
                    return Err(FieldsError::validation(
                        "options",
                        format!("{} requires at least one option", meta.display_label),
                    ))
                }
            }
        } else {
            None
        };

        Ok(FieldDef {
            id: FieldId::new(),
            name: self.config.field_name(store.next_insertion_index()),
            label: draft.label.clone(),
            type_: draft.type_,
            options,
        })
    }

    /// Validate the candidate, mint a definition and close the session.
    ///
    /// On failure the session stays open with the candidate intact.
    pub fn confirm(&mut self, store: &SchemaStore) -> Result<FieldDef> {
        let def = self.build(store)?;
        self.close();
        debug!(name = %def.name, kind = %def.type_, "field confirmed");
        Ok(def)
    }

    /// End the session after its candidate has been accepted.
    pub(crate) fn close(&mut self) {
        self.draft = None;
    }

    /// Discard the candidate. Calling this with no open session does nothing.
    pub fn cancel(&mut self) {
        if self.draft.take().is_some() {
            trace!("field editor cancelled");
        }
    }
}
