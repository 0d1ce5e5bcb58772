use formsmith::schema::{FieldInput, FieldType};
use formsmith::ui::builder::{
    BuilderIntent, BuilderReducer, BuilderState, FieldDraft, CHOICE_NEEDS_OPTIONS,
    LABEL_AND_TYPE_REQUIRED,
};
use formsmith::ui::library::{LibraryIntent, LibraryReducer, LibraryState, SUBMIT_FAILED, SUBMIT_SUCCEEDED};
use formsmith::ui::mvi::Reducer;
use formsmith::ui::notice::Notice;
use formsmith::workspace::Workspace;

fn apply(state: BuilderState, intents: Vec<BuilderIntent>) -> BuilderState {
    intents.into_iter().fold(state, BuilderReducer::reduce)
}

#[test]
fn add_field_requires_label_and_type() {
    let state = apply(
        BuilderState::default(),
        vec![
            BuilderIntent::SetFieldLabel("Name".into()),
            BuilderIntent::AddField,
        ],
    );
    assert_eq!(state.notice, Some(Notice::error(LABEL_AND_TYPE_REQUIRED)));
    assert!(state.preview().is_empty());
    assert_eq!(state.draft.label, "Name");

    let state = apply(
        BuilderState::default(),
        vec![
            BuilderIntent::SetFieldType(Some(FieldType::Text)),
            BuilderIntent::AddField,
        ],
    );
    assert_eq!(state.notice, Some(Notice::error(LABEL_AND_TYPE_REQUIRED)));
}

#[test]
fn choice_field_collects_options_then_resets_draft() {
    let state = apply(
        BuilderState::default(),
        vec![
            BuilderIntent::SetFieldLabel("Size".into()),
            BuilderIntent::SetFieldType(Some(FieldType::Radio)),
            BuilderIntent::SetOptionInput("S".into()),
            BuilderIntent::AddOption,
            BuilderIntent::SetOptionInput("M".into()),
            BuilderIntent::AddOption,
        ],
    );
    assert!(state.draft.shows_options());
    assert_eq!(state.draft.options, vec!["S", "M"]);
    assert!(state.draft.option_input.is_empty());

    let state = BuilderReducer::reduce(state, BuilderIntent::AddField);
    assert_eq!(state.notice, None);
    assert_eq!(state.preview().len(), 1);
    assert_eq!(
        state.preview()[0].input,
        FieldInput::Radio {
            options: vec!["S".into(), "M".into()]
        }
    );
    assert_eq!(state.draft, FieldDraft::default());
}

#[test]
fn choice_without_options_is_rejected() {
    let state = apply(
        BuilderState::default(),
        vec![
            BuilderIntent::SetFieldLabel("Pick".into()),
            BuilderIntent::SetFieldType(Some(FieldType::Select)),
            BuilderIntent::AddField,
        ],
    );
    assert_eq!(state.notice, Some(Notice::error(CHOICE_NEEDS_OPTIONS)));
    assert!(state.preview().is_empty());
}

#[test]
fn options_are_dropped_when_type_changes_to_text() {
    let state = apply(
        BuilderState::default(),
        vec![
            BuilderIntent::SetFieldLabel("Note".into()),
            BuilderIntent::SetFieldType(Some(FieldType::Select)),
            BuilderIntent::SetOptionInput("x".into()),
            BuilderIntent::AddOption,
            BuilderIntent::SetFieldType(Some(FieldType::Textarea)),
            BuilderIntent::AddField,
        ],
    );
    assert_eq!(state.preview()[0].input, FieldInput::Textarea);
}

#[test]
fn saving_through_workspace_clears_staging() {
    let mut ws = Workspace::in_memory().unwrap();
    let mut state = apply(
        BuilderState::default(),
        vec![
            BuilderIntent::SetFormName("Contact".into()),
            BuilderIntent::SetFieldLabel("Name".into()),
            BuilderIntent::SetFieldType(Some(FieldType::Text)),
            BuilderIntent::AddField,
        ],
    );

    let id = ws.save_form(&mut state.pending).unwrap();
    assert!(id.is_some());
    let state = BuilderReducer::reduce(state, BuilderIntent::FormSaved);
    assert_eq!(state, BuilderState::default());
    assert_eq!(ws.forms().forms()[0].fields.len(), 1);
}

#[test]
fn library_notice_follows_submit_outcome() {
    let state = LibraryReducer::reduce(
        LibraryState::default(),
        LibraryIntent::Submitted { accepted: true },
    );
    assert_eq!(state.notice, Some(Notice::success(SUBMIT_SUCCEEDED)));

    let state = LibraryReducer::reduce(state, LibraryIntent::Submitted { accepted: false });
    assert!(state.notice.as_ref().is_some_and(Notice::is_error));
    assert_eq!(state.notice.as_ref().map(Notice::message), Some(SUBMIT_FAILED));

    let state = LibraryReducer::reduce(state, LibraryIntent::DismissNotice);
    assert_eq!(state, LibraryState::default());
}
