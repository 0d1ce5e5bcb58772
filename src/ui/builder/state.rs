use crate::schema::{Field, FieldType, PendingForm};
use crate::ui::mvi::UiState;
use crate::ui::notice::Notice;

/// Field being composed before it is added to the pending form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldDraft {
    pub label: String,
    pub field_type: Option<FieldType>,
    pub options: Vec<String>,
    /// Text of the option input box, not yet added to `options`.
    pub option_input: String,
}

impl FieldDraft {
    /// Whether the option editor is shown for the selected type.
    pub fn shows_options(&self) -> bool {
        self.field_type.is_some_and(|t| t.is_choice())
    }

    /// Field built from the draft, `None` if label or type is missing.
    pub fn to_field(&self) -> Option<Field> {
        let field_type = self.field_type?;
        if self.label.is_empty() {
            return None;
        }
        let options = if field_type.is_choice() {
            self.options.clone()
        } else {
            Vec::new()
        };
        Some(Field::new(self.label.clone(), field_type.into_input(options)))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuilderState {
    /// Name and fields staged for the next save.
    pub pending: PendingForm,
    pub draft: FieldDraft,
    pub notice: Option<Notice>,
}

impl UiState for BuilderState {}

impl BuilderState {
    /// Fields shown in the live preview.
    pub fn preview(&self) -> &[Field] {
        self.pending.fields()
    }
}
