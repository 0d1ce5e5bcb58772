//! Ordered collection of saved forms, persisted under the `forms` key.

use crate::storage::{load_document, save_document, CorruptPolicy, SharedStorage, StoreError, FORMS_KEY};

use super::form::{Form, FormId};
use super::pending::PendingForm;

/// Display name used for submissions whose form no longer exists.
pub const UNKNOWN_FORM: &str = "Unknown Form";

/// Read access to forms by id.
pub trait FormLookup {
    fn find_form(&self, id: &FormId) -> Option<&Form>;

    /// Form name, or [`UNKNOWN_FORM`] for a dangling id.
    fn display_name(&self, id: &FormId) -> &str {
        self.find_form(id)
            .map(|form| form.name.as_str())
            .unwrap_or(UNKNOWN_FORM)
    }
}

impl FormLookup for [Form] {
    fn find_form(&self, id: &FormId) -> Option<&Form> {
        self.iter().find(|form| &form.id == id)
    }
}

impl FormLookup for Vec<Form> {
    fn find_form(&self, id: &FormId) -> Option<&Form> {
        self.as_slice().find_form(id)
    }
}

pub struct FormStore {
    storage: SharedStorage,
    forms: Vec<Form>,
}

impl FormStore {
    /// Load the persisted collection from `storage`.
    pub fn open(storage: SharedStorage, policy: CorruptPolicy) -> Result<Self, StoreError> {
        let forms = load_document(storage.as_ref(), FORMS_KEY, policy)?;
        Ok(Self { storage, forms })
    }

    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    pub fn get(&self, id: &FormId) -> Option<&Form> {
        self.forms.find_form(id)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Save the staged form.
    ///
    /// Returns `Ok(None)` without touching anything when the staged name is
    /// empty. Otherwise appends a form with a fresh id, persists the whole
    /// collection and clears `pending`. If persisting fails the collection
    /// and `pending` are left as they were.
    pub fn save_form(&mut self, pending: &mut PendingForm) -> Result<Option<FormId>, StoreError> {
        if pending.name().is_empty() {
            return Ok(None);
        }

        let id = FormId::generate();
        let form = Form::new(id.clone(), pending.name(), pending.fields().to_vec());

        let mut next = self.forms.clone();
        next.push(form);
        self.commit(next)?;

        tracing::info!(form_id = %id, name = pending.name(), fields = pending.fields().len(), "form saved");
        pending.clear();
        Ok(Some(id))
    }

    /// Remove the form with `id`. Returns whether a form was removed.
    ///
    /// Submissions referencing the form are left in place.
    pub fn delete_form(&mut self, id: &FormId) -> Result<bool, StoreError> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let next: Vec<Form> = self.forms.iter().filter(|f| &f.id != id).cloned().collect();
        self.commit(next)?;

        tracing::info!(form_id = %id, "form deleted");
        Ok(true)
    }

    fn commit(&mut self, next: Vec<Form>) -> Result<(), StoreError> {
        save_document(self.storage.as_ref(), FORMS_KEY, &next)?;
        self.forms = next;
        Ok(())
    }
}

impl FormLookup for FormStore {
    fn find_form(&self, id: &FormId) -> Option<&Form> {
        self.forms.find_form(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn open(store: &MemoryStore) -> FormStore {
        FormStore::open(Arc::new(store.clone()), CorruptPolicy::Fail).unwrap()
    }

    #[test]
    fn save_with_empty_name_is_noop() {
        let backend = MemoryStore::new();
        let mut forms = open(&backend);
        let mut pending = PendingForm::new().with_field(Field::text("Name"));

        assert_eq!(forms.save_form(&mut pending).unwrap(), None);
        assert!(forms.is_empty());
        assert_eq!(pending.fields().len(), 1);
        assert!(!backend.contains(FORMS_KEY));
    }

    #[test]
    fn save_appends_persists_and_clears_pending() {
        let backend = MemoryStore::new();
        let mut forms = open(&backend);
        let mut pending = PendingForm::new().with_field(Field::text("Name"));
        pending.set_name("Contact");

        let id = forms.save_form(&mut pending).unwrap().unwrap();

        assert_eq!(forms.len(), 1);
        assert_eq!(forms.get(&id).unwrap().name, "Contact");
        assert_eq!(pending, PendingForm::default());
        assert_eq!(open(&backend).forms(), forms.forms());
    }

    #[test]
    fn delete_is_idempotent() {
        let backend = MemoryStore::new();
        let mut forms = open(&backend);
        let mut pending = PendingForm::new();
        pending.set_name("Survey");
        let id = forms.save_form(&mut pending).unwrap().unwrap();

        assert!(forms.delete_form(&id).unwrap());
        assert!(!forms.delete_form(&id).unwrap());
        assert!(forms.get(&id).is_none());
        assert!(open(&backend).is_empty());
    }

    #[test]
    fn display_name_falls_back_for_dangling_id() {
        let forms: Vec<Form> = Vec::new();
        assert_eq!(forms.display_name(&FormId::from("gone")), UNKNOWN_FORM);
    }
}
