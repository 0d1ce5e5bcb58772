use crate::ui::builder::intent::BuilderIntent;
use crate::ui::builder::state::{BuilderState, FieldDraft};
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;

pub const LABEL_AND_TYPE_REQUIRED: &str = "Field label and type cannot be empty";
pub const CHOICE_NEEDS_OPTIONS: &str = "Choice fields need at least one option";

pub struct BuilderReducer;

impl Reducer for BuilderReducer {
    type State = BuilderState;
    type Intent = BuilderIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BuilderIntent::SetFormName(name) => {
                state.pending.set_name(name);
            }
            BuilderIntent::SetFieldLabel(label) => {
                state.draft.label = label;
            }
            BuilderIntent::SetFieldType(field_type) => {
                state.draft.field_type = field_type;
            }
            BuilderIntent::SetOptionInput(text) => {
                state.draft.option_input = text;
            }
            BuilderIntent::AddOption => {
                let option = std::mem::take(&mut state.draft.option_input);
                state.draft.options.push(option);
            }
            BuilderIntent::AddField => match state.draft.to_field() {
                None => {
                    state.notice = Some(Notice::error(LABEL_AND_TYPE_REQUIRED));
                }
                Some(field) if field.input.options().is_some_and(|o| o.is_empty()) => {
                    state.notice = Some(Notice::error(CHOICE_NEEDS_OPTIONS));
                }
                Some(field) => {
                    state.pending.add_field(field);
                    state.draft = FieldDraft::default();
                    state.notice = None;
                }
            },
            BuilderIntent::FormSaved => {
                state.pending.clear();
                state.draft = FieldDraft::default();
                state.notice = None;
            }
            BuilderIntent::DismissNotice => {
                state.notice = None;
            }
        }
        state
    }
}
