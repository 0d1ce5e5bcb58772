use crate::schema::FieldType;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BuilderIntent {
    SetFormName(String),
    SetFieldLabel(String),
    /// `None` clears the selection.
    SetFieldType(Option<FieldType>),
    SetOptionInput(String),
    /// Move the option input into the draft's options, even when empty.
    AddOption,
    /// Append the draft to the pending form, or explain why not.
    AddField,
    /// The pending form was persisted by the store.
    FormSaved,
    DismissNotice,
}

impl Intent for BuilderIntent {}
