//! SchemaStore: the ordered set of field definitions for one session.
//!
//! Insertion order is display order. Names are assigned once and never
//! renumbered when earlier fields are removed.

use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::types::{FieldDef, FieldId};

#[derive(Debug, Default, Clone)]
pub struct SchemaStore {
    fields: Vec<FieldDef>,
    /// Count of fields ever appended since creation or the last `clear`.
    insertions: usize,
}

impl SchemaStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a definition at the end of the schema.
    ///
    /// Fails without touching the schema if the name or id is already taken.
    pub fn append(&mut self, def: FieldDef) -> Result<()> {
        if self.get_by_name(&def.name).is_some() {
            return Err(FieldsError::DuplicateName { name: def.name });
        }
        if self.get(&def.id).is_some() {
            return Err(FieldsError::DuplicateId {
                id: def.id.to_string(),
            });
        }

        debug!(name = %def.name, id = %def.id, kind = %def.type_, "field appended");
        self.fields.push(def);
        self.insertions += 1;
        Ok(())
    }

    /// Remove the definition with the given id, keeping the order of the rest.
    pub fn remove(&mut self, id: &FieldId) -> Result<FieldDef> {
        let idx = self
            .fields
            .iter()
            .position(|f| &f.id == id)
            .ok_or_else(|| FieldsError::NotFound { id: id.to_string() })?;

        let removed = self.fields.remove(idx);
        debug!(name = %removed.name, id = %removed.id, "field removed");
        Ok(removed)
    }

    /// All definitions in display order.
    pub fn list(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn get(&self, id: &FieldId) -> Option<&FieldDef> {
        self.fields.iter().find(|f| &f.id == id)
    }

    pub fn get_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when there is nothing to submit.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Positional index the next confirmed field is named after.
    ///
    /// Equals `len()` until a field is removed; it never goes backwards, so a
    /// derived name cannot collide with a surviving field.
    pub fn next_insertion_index(&self) -> usize {
        self.insertions
    }

    /// Drop every definition and restart naming from zero.
    pub fn clear(&mut self) {
        debug!(fields = self.fields.len(), "schema cleared");
        self.fields.clear();
        self.insertions = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FieldType;
    use crate::types::FieldOption;

    fn def(name: &str, label: &str) -> FieldDef {
        FieldDef {
            id: FieldId::new(),
            name: name.into(),
            label: label.into(),
            type_: FieldType::Text,
            options: None,
        }
    }

    #[test]
    fn append_preserves_order() {
        let mut store = SchemaStore::new();
        assert!(store.is_empty());
        store.append(def("field0", "First")).unwrap();
        store.append(def("field1", "Second")).unwrap();
        store.append(def("field2", "Third")).unwrap();

        let labels: Vec<_> = store.list().iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, ["First", "Second", "Third"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn duplicate_name_rejected_and_store_untouched() {
        let mut store = SchemaStore::new();
        store.append(def("field0", "First")).unwrap();

        let err = store.append(def("field0", "Again")).unwrap_err();
        assert!(matches!(err, FieldsError::DuplicateName { ref name } if name == "field0"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].label, "First");
        assert_eq!(store.next_insertion_index(), 1);
    }

    #[test]
    fn duplicate_id_rejected() {
        let mut store = SchemaStore::new();
        let first = def("field0", "First");
        let mut clone = first.clone();
        clone.name = "field9".into();
        store.append(first).unwrap();
        let err = store.append(clone).unwrap_err();
        assert!(matches!(err, FieldsError::DuplicateId { .. }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_keeps_survivor_names_and_order() {
        let mut store = SchemaStore::new();
        let a = def("field0", "A");
        let b = def("field1", "B");
        let c = def("field2", "C");
        let b_id = b.id;
        store.append(a).unwrap();
        store.append(b).unwrap();
        store.append(c).unwrap();

        let removed = store.remove(&b_id).unwrap();
        assert_eq!(removed.name, "field1");

        let names: Vec<_> = store.list().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["field0", "field2"]);
        assert_eq!(store.next_insertion_index(), 3);
    }

    #[test]
    fn remove_twice_is_not_found_without_side_effects() {
        let mut store = SchemaStore::new();
        let a = def("field0", "A");
        let id = a.id;
        store.append(a).unwrap();
        store.append(def("field1", "B")).unwrap();

        store.remove(&id).unwrap();
        let err = store.remove(&id).unwrap_err();
        assert!(matches!(err, FieldsError::NotFound { .. }));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].name, "field1");
    }

    #[test]
    fn lookup_by_id_and_name() {
        let mut store = SchemaStore::new();
        let mut colour = def("field0", "Colour");
        colour.type_ = FieldType::Radio;
        colour.options = Some(vec![FieldOption::new("Red")]);
        let id = colour.id;
        store.append(colour).unwrap();

        assert_eq!(store.get(&id).unwrap().label, "Colour");
        assert_eq!(store.get_by_name("field0").unwrap().id, id);
        assert!(store.get_by_name("field1").is_none());
    }

    #[test]
    fn clear_resets_naming() {
        let mut store = SchemaStore::new();
        store.append(def("field0", "A")).unwrap();
        store.append(def("field1", "B")).unwrap();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.next_insertion_index(), 0);
    }
}
