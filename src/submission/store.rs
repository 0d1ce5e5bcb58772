//! Submission records, one per form, persisted under the `formData` key.

use crate::schema::{FormId, FormLookup};
use crate::storage::{
    load_document, save_document, CorruptPolicy, SharedStorage, StoreError, SUBMISSIONS_KEY,
};

use super::types::Submission;
use super::validate::{validate_submission, ValidationError};

pub struct SubmissionStore {
    storage: SharedStorage,
    submissions: Vec<Submission>,
}

impl SubmissionStore {
    /// Load the persisted collection from `storage`.
    pub fn open(storage: SharedStorage, policy: CorruptPolicy) -> Result<Self, StoreError> {
        let submissions = load_document(storage.as_ref(), SUBMISSIONS_KEY, policy)?;
        Ok(Self {
            storage,
            submissions,
        })
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn get(&self, form_id: &FormId) -> Option<&Submission> {
        self.submissions.iter().find(|s| &s.form_id == form_id)
    }

    /// Stored value for `label`, if the form has a record holding it.
    pub fn value(&self, form_id: &FormId, label: &str) -> Option<&str> {
        self.get(form_id)
            .and_then(|s| s.data.get(label))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Record `value` for `label`, creating the form's record if needed.
    pub fn set_value(
        &mut self,
        form_id: &FormId,
        label: &str,
        value: impl Into<String>,
    ) -> Result<(), StoreError> {
        let value = value.into();
        let mut next = self.submissions.clone();
        let index = match next.iter().position(|s| &s.form_id == form_id) {
            Some(index) => index,
            None => {
                next.push(Submission::new(form_id.clone()));
                next.len() - 1
            }
        };
        next[index].data.insert(label.to_string(), value);
        self.commit(next)?;

        tracing::debug!(form_id = %form_id, label, "value recorded");
        Ok(())
    }

    /// Validate the form's record, reporting the first failing field.
    ///
    /// Fails with [`ValidationError::FormNotFound`] when `forms` does not
    /// know `form_id`.
    pub fn check(&self, form_id: &FormId, forms: &(impl FormLookup + ?Sized)) -> Result<(), ValidationError> {
        let form = forms
            .find_form(form_id)
            .ok_or_else(|| ValidationError::FormNotFound {
                form_id: form_id.clone(),
            })?;
        validate_submission(form, self.get(form_id))
    }

    pub fn validate(&self, form_id: &FormId, forms: &(impl FormLookup + ?Sized)) -> bool {
        self.check(form_id, forms).is_ok()
    }

    /// Validation gate for a submit action.
    ///
    /// Returns the validation result. On success an empty record is created
    /// if the form had none; existing data is never touched.
    pub fn submit(&mut self, form_id: &FormId, forms: &(impl FormLookup + ?Sized)) -> Result<bool, StoreError> {
        if let Err(reason) = self.check(form_id, forms) {
            tracing::info!(form_id = %form_id, %reason, "submission rejected");
            return Ok(false);
        }

        if self.get(form_id).is_none() {
            let mut next = self.submissions.clone();
            next.push(Submission::new(form_id.clone()));
            self.commit(next)?;
        }

        tracing::info!(form_id = %form_id, "submission accepted");
        Ok(true)
    }

    /// Drop every record and the persisted document.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.storage.remove(SUBMISSIONS_KEY)?;
        let cleared = self.submissions.len();
        self.submissions.clear();

        tracing::info!(cleared, "submissions cleared");
        Ok(())
    }

    fn commit(&mut self, next: Vec<Submission>) -> Result<(), StoreError> {
        save_document(self.storage.as_ref(), SUBMISSIONS_KEY, &next)?;
        self.submissions = next;
        Ok(())
    }
}
