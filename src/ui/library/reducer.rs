use crate::ui::library::intent::LibraryIntent;
use crate::ui::library::state::LibraryState;
use crate::ui::mvi::Reducer;
use crate::ui::notice::Notice;

pub const SUBMIT_SUCCEEDED: &str = "Form submitted successfully!";
pub const SUBMIT_FAILED: &str = "Form validation failed";

pub struct LibraryReducer;

impl Reducer for LibraryReducer {
    type State = LibraryState;
    type Intent = LibraryIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        let notice = match intent {
            LibraryIntent::Submitted { accepted: true } => Some(Notice::success(SUBMIT_SUCCEEDED)),
            LibraryIntent::Submitted { accepted: false } => Some(Notice::error(SUBMIT_FAILED)),
            LibraryIntent::DismissNotice => None,
        };
        LibraryState { notice }
    }
}
