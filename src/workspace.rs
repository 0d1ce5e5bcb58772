//! The application's stores, opened together and passed to every view.
//!
//! A `Workspace` owns the storage backend, the form collection and the
//! submission collection. There is one writer per workspace; two processes
//! sharing a data directory overwrite each other's documents (last writer
//! wins).

use std::sync::Arc;

use crate::config::Config;
use crate::schema::{Form, FormId, FormStore, PendingForm};
use crate::storage::{CorruptPolicy, JsonFileStore, MemoryStore, SharedStorage, StoreError};
use crate::submission::{SubmissionStore, ValidationError};
use crate::ui::table::{TableState, TableView};

pub struct Workspace {
    forms: FormStore,
    submissions: SubmissionStore,
}

impl Workspace {
    /// Open the file-backed stores described by `config`.
    pub fn open(config: &Config) -> Result<Self, StoreError> {
        let store = JsonFileStore::new(config.storage.resolved_data_dir());
        tracing::info!(data_dir = %store.dir().display(), "opening workspace");
        Self::with_storage(Arc::new(store), config.storage.on_corrupt)
    }

    /// Open both stores on an existing backend.
    pub fn with_storage(storage: SharedStorage, policy: CorruptPolicy) -> Result<Self, StoreError> {
        let forms = FormStore::open(Arc::clone(&storage), policy)?;
        let submissions = SubmissionStore::open(storage, policy)?;
        Ok(Self { forms, submissions })
    }

    /// Fresh workspace backed by memory only.
    pub fn in_memory() -> Result<Self, StoreError> {
        Self::with_storage(Arc::new(MemoryStore::new()), CorruptPolicy::Fail)
    }

    pub fn forms(&self) -> &FormStore {
        &self.forms
    }

    pub fn submissions(&self) -> &SubmissionStore {
        &self.submissions
    }

    pub fn form(&self, id: &FormId) -> Option<&Form> {
        self.forms.get(id)
    }

    pub fn save_form(&mut self, pending: &mut PendingForm) -> Result<Option<FormId>, StoreError> {
        self.forms.save_form(pending)
    }

    pub fn delete_form(&mut self, id: &FormId) -> Result<bool, StoreError> {
        self.forms.delete_form(id)
    }

    pub fn set_value(&mut self, form_id: &FormId, label: &str, value: impl Into<String>) -> Result<(), StoreError> {
        self.submissions.set_value(form_id, label, value)
    }

    pub fn validate(&self, form_id: &FormId) -> bool {
        self.submissions.validate(form_id, &self.forms)
    }

    pub fn check(&self, form_id: &FormId) -> Result<(), ValidationError> {
        self.submissions.check(form_id, &self.forms)
    }

    pub fn submit(&mut self, form_id: &FormId) -> Result<bool, StoreError> {
        self.submissions.submit(form_id, &self.forms)
    }

    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.submissions.clear_all()
    }

    /// Data table over the current submissions.
    pub fn table(&self, state: &TableState) -> TableView {
        TableView::build(&self.forms, self.submissions.submissions(), state)
    }

    /// Tear down. Every mutation is already durable, so this only releases
    /// the stores.
    pub fn close(self) {
        tracing::info!(
            forms = self.forms.len(),
            submissions = self.submissions.len(),
            "closing workspace"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;

    #[test]
    fn submit_uses_own_forms() {
        let mut ws = Workspace::in_memory().unwrap();
        let mut pending = PendingForm::new().with_field(Field::email("Email"));
        pending.set_name("Newsletter");
        let id = ws.save_form(&mut pending).unwrap().unwrap();

        assert!(!ws.submit(&id).unwrap());
        ws.set_value(&id, "Email", "a@b.co").unwrap();
        assert!(ws.submit(&id).unwrap());
        ws.close();
    }

    #[test]
    fn table_reflects_submissions() {
        let mut ws = Workspace::in_memory().unwrap();
        ws.set_value(&FormId::from("x"), "Name", "Ada").unwrap();
        let view = ws.table(&TableState::default());
        assert_eq!(view.columns, vec!["Name"]);
        assert_eq!(view.rows[0].form_name, "Unknown Form");
    }
}
